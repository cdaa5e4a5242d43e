use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct Phone(String);

impl Phone {
    pub fn new(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }
}
