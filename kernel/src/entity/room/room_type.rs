use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Single,
    Double,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Single" => Some(RoomType::Single),
            "Double" => Some(RoomType::Double),
            _ => None,
        }
    }
}
