use vodca::{AsRefln, Fromln};

/// Free-text location, matched by case-insensitive substring in search.
#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct HostelLocation(String);

impl HostelLocation {
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }
}
