mod booking;
mod hostel;
mod room;

pub use self::{booking::*, hostel::*, room::*};
