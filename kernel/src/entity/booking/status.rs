use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
pub enum BookingStatus {
    #[default]
    Processing,
    Checked,
    Complete,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Processing => "Processing",
            BookingStatus::Checked => "Checked",
            BookingStatus::Complete => "Complete",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Processing" => Some(BookingStatus::Processing),
            "Checked" => Some(BookingStatus::Checked),
            "Complete" => Some(BookingStatus::Complete),
            _ => None,
        }
    }
}
