use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct HostelDescription(String);

impl HostelDescription {
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }
}
