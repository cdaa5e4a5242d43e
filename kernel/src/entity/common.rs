mod date_range;
mod picture;
mod specification;

pub use self::{date_range::*, picture::*, specification::*};
