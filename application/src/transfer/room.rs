use time::Date;
use uuid::Uuid;

use kernel::interface::image::UploadImage;
use kernel::prelude::entity::{DestructRoom, Room, RoomType};

use crate::transfer::{HostelDto, PictureDto};

#[derive(Debug, Clone)]
pub struct RoomDto {
    pub id: Uuid,
    pub number: i32,
    pub name: String,
    pub room_type: RoomType,
    pub price_per_day: i64,
    pub specification: Vec<String>,
    pub not_available: Vec<Date>,
    pub pictures: Vec<PictureDto>,
    pub hostel: Uuid,
}

impl From<Room> for RoomDto {
    fn from(value: Room) -> Self {
        let DestructRoom {
            id,
            number,
            name,
            room_type,
            price_per_day,
            specification,
            not_available,
            pictures,
            hostel,
        } = value.into_destruct();
        Self {
            id: id.into(),
            number: number.into(),
            name: name.into(),
            room_type,
            price_per_day: price_per_day.into(),
            specification: specification.into(),
            not_available: not_available.into(),
            pictures: Vec::from(pictures).into_iter().map(PictureDto::from).collect(),
            hostel: hostel.into(),
        }
    }
}

/// Room document joined with its owning hostel, when the owner still exists.
#[derive(Debug, Clone)]
pub struct RoomDetailDto {
    pub room: RoomDto,
    pub hostel: Option<HostelDto>,
}

pub struct GetRoomDto {
    pub id: Uuid,
}

pub struct GetHostelRoomsDto {
    pub hostel_id: Uuid,
}

pub struct CreateRoomDto {
    pub hostel_id: Uuid,
    pub number: i32,
    pub name: String,
    pub room_type: RoomType,
    pub price_per_day: i64,
    pub specification: Vec<String>,
}

/// `number` is carried only to reject the request when a caller tries to
/// change it; rooms keep their number for life.
pub struct UpdateRoomDto {
    pub id: Uuid,
    pub number: Option<i32>,
    pub name: Option<String>,
    pub room_type: Option<RoomType>,
    pub price_per_day: Option<i64>,
    pub specification: Option<Vec<String>>,
}

pub struct DeleteRoomDto {
    pub id: Uuid,
}

pub struct ReplaceRoomPicturesDto {
    pub id: Uuid,
    pub images: Vec<UploadImage>,
}
