use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Fromln, AsRefln)]
pub struct HostelDistance(f64);

impl HostelDistance {
    pub fn new(distance: impl Into<f64>) -> Self {
        Self(distance.into())
    }
}
