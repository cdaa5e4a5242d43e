use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Default, Fromln, AsRefln, Serialize, Deserialize)]
pub struct Specification(Vec<String>);

impl Specification {
    pub fn new(items: impl Into<Vec<String>>) -> Self {
        Self(items.into())
    }
}
