mod description;
mod distance;
mod id;
mod location;
mod name;
mod rooms;

pub use self::{description::*, distance::*, id::*, location::*, name::*, rooms::*};
use crate::entity::common::{Pictures, Specification};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, PartialEq, References, Destructure, Mutation)]
pub struct Hostel {
    id: HostelId,
    name: HostelName,
    location: HostelLocation,
    distance: HostelDistance,
    specification: Specification,
    description: HostelDescription,
    pictures: Pictures,
    rooms: HostelRooms,
}

impl Hostel {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: HostelId,
        name: HostelName,
        location: HostelLocation,
        distance: HostelDistance,
        specification: Specification,
        description: HostelDescription,
        pictures: Pictures,
        rooms: HostelRooms,
    ) -> Self {
        Self {
            id,
            name,
            location,
            distance,
            specification,
            description,
            pictures,
            rooms,
        }
    }
}
