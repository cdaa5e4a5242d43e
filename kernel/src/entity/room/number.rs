use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Unique within a hostel, checked before insert and frozen afterwards.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct RoomNumber(i32);

impl RoomNumber {
    pub fn new(number: impl Into<i32>) -> Self {
        Self(number.into())
    }
}
