use time::Date;
use vodca::{AsRefln, Fromln};

/// Days covered by the booking. Never empty for a stored booking.
#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookingDates(Vec<Date>);

impl BookingDates {
    pub fn new(dates: impl Into<Vec<Date>>) -> Self {
        Self(dates.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
