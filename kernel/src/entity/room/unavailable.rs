use time::Date;
use vodca::{AsRefln, Fromln};

/// Days the room is already reserved for. Written by an external process;
/// this system only reads it during search.
#[derive(Debug, Clone, Eq, PartialEq, Default, Fromln, AsRefln)]
pub struct UnavailableDates(Vec<Date>);

impl UnavailableDates {
    pub fn new(dates: impl Into<Vec<Date>>) -> Self {
        Self(dates.into())
    }
}
