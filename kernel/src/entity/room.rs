mod id;
mod name;
mod number;
mod price;
mod room_type;
mod unavailable;

pub use self::{id::*, name::*, number::*, price::*, room_type::*, unavailable::*};
use crate::entity::common::{Pictures, Specification};
use crate::entity::hostel::HostelId;
use destructure::{Destructure, Mutation};
use time::Date;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Room {
    id: RoomId,
    number: RoomNumber,
    name: RoomName,
    room_type: RoomType,
    price_per_day: PricePerDay,
    specification: Specification,
    not_available: UnavailableDates,
    pictures: Pictures,
    hostel: HostelId,
}

impl Room {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: RoomId,
        number: RoomNumber,
        name: RoomName,
        room_type: RoomType,
        price_per_day: PricePerDay,
        specification: Specification,
        not_available: UnavailableDates,
        pictures: Pictures,
        hostel: HostelId,
    ) -> Self {
        Self {
            id,
            number,
            name,
            room_type,
            price_per_day,
            specification,
            not_available,
            pictures,
            hostel,
        }
    }

    /// A single guest fits any room; two or more need a double.
    pub fn suits_occupancy(&self, person_count: i32) -> bool {
        person_count <= 1 || self.room_type == RoomType::Double
    }

    /// True when none of the requested days appear in the unavailability ledger.
    pub fn is_free_on(&self, days: &[Date]) -> bool {
        days.iter().all(|day| !self.not_available.as_ref().contains(day))
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;
    use uuid::Uuid;

    use crate::entity::{
        HostelId, Pictures, PricePerDay, Room, RoomId, RoomName, RoomNumber, RoomType,
        Specification, UnavailableDates,
    };

    fn room(room_type: RoomType, not_available: Vec<time::Date>) -> Room {
        Room::new(
            RoomId::new(Uuid::new_v4()),
            RoomNumber::new(1),
            RoomName::new("test".to_string()),
            room_type,
            PricePerDay::new(500),
            Specification::default(),
            UnavailableDates::new(not_available),
            Pictures::default(),
            HostelId::new(Uuid::new_v4()),
        )
    }

    #[test]
    fn single_guest_fits_any_room() {
        assert!(room(RoomType::Single, vec![]).suits_occupancy(1));
        assert!(room(RoomType::Double, vec![]).suits_occupancy(1));
    }

    #[test]
    fn multiple_guests_need_a_double() {
        assert!(!room(RoomType::Single, vec![]).suits_occupancy(2));
        assert!(room(RoomType::Double, vec![]).suits_occupancy(2));
    }

    #[test]
    fn free_only_when_no_requested_day_is_taken() {
        let room = room(RoomType::Double, vec![date!(2024 - 01 - 01)]);
        assert!(!room.is_free_on(&[date!(2024 - 01 - 01)]));
        assert!(!room.is_free_on(&[date!(2023 - 12 - 31), date!(2024 - 01 - 01)]));
        assert!(room.is_free_on(&[date!(2024 - 02 - 01)]));
    }

    #[test]
    fn empty_request_never_excludes_a_room() {
        let room = room(RoomType::Single, vec![date!(2024 - 01 - 01)]);
        assert!(room.is_free_on(&[]));
    }
}
