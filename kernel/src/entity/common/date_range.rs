use error_stack::Report;
use time::Date;

use crate::KernelError;

/// Inclusive calendar range used by the availability search.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    pub fn new(start: Date, end: Date) -> error_stack::Result<Self, KernelError> {
        if start > end {
            return Err(Report::new(KernelError::Validation(
                "Please check start and end date".to_string(),
            )));
        }
        Ok(Self { start, end })
    }

    /// Expands the range into every day it covers, both endpoints included.
    pub fn days(&self) -> Vec<Date> {
        let mut days = Vec::new();
        let mut current = self.start;
        while current <= self.end {
            days.push(current);
            match current.next_day() {
                Some(next) => current = next,
                None => break,
            }
        }
        days
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;

    use super::DateRange;

    #[test]
    fn rejects_inverted_range() {
        let result = DateRange::new(date!(2024 - 01 - 02), date!(2024 - 01 - 01));
        assert!(result.is_err());
    }

    #[test]
    fn single_day_expands_to_itself() {
        let range = DateRange::new(date!(2024 - 01 - 01), date!(2024 - 01 - 01)).unwrap();
        assert_eq!(range.days(), vec![date!(2024 - 01 - 01)]);
    }

    #[test]
    fn expansion_is_inclusive_and_crosses_months() {
        let range = DateRange::new(date!(2024 - 01 - 30), date!(2024 - 02 - 02)).unwrap();
        assert_eq!(
            range.days(),
            vec![
                date!(2024 - 01 - 30),
                date!(2024 - 01 - 31),
                date!(2024 - 02 - 01),
                date!(2024 - 02 - 02),
            ]
        );
    }
}
