mod booking;
mod hostel;
mod picture;
mod room;

pub use self::{booking::*, hostel::*, picture::*, room::*};
