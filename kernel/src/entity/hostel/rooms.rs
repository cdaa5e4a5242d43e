use vodca::{AsRefln, Fromln};

use crate::entity::room::RoomId;

/// Reference set to the hostel's rooms, kept in sync manually on room
/// creation and deletion. Order carries no meaning.
#[derive(Debug, Clone, Eq, PartialEq, Default, Fromln, AsRefln)]
pub struct HostelRooms(Vec<RoomId>);

impl HostelRooms {
    pub fn new(rooms: impl Into<Vec<RoomId>>) -> Self {
        Self(rooms.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
