use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct HostelName(String);

impl HostelName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}
