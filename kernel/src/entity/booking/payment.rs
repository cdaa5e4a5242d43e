use serde::{Deserialize, Serialize};
use vodca::References;

/// Receipt reference handed back by the payment collaborator.
#[derive(Debug, Clone, Eq, PartialEq, References, Serialize, Deserialize)]
pub struct PaymentInfo {
    id: String,
    status: String,
}

impl PaymentInfo {
    pub fn new(id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: status.into(),
        }
    }
}
