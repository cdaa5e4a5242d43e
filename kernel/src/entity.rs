mod booking;
mod common;
mod hostel;
mod room;
mod user;

pub use self::{booking::*, common::*, hostel::*, room::*, user::*};
