use time::Date;
use uuid::Uuid;

use kernel::interface::image::UploadImage;
use kernel::prelude::entity::{DestructHostel, Hostel, Room};

use crate::transfer::{PictureDto, RoomDto};

#[derive(Debug, Clone)]
pub struct HostelDto {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub distance: f64,
    pub specification: Vec<String>,
    pub description: String,
    pub pictures: Vec<PictureDto>,
    pub rooms: Vec<RoomDto>,
}

impl HostelDto {
    /// Joins a hostel document with its populated room documents.
    pub fn from_parts(hostel: Hostel, rooms: Vec<Room>) -> Self {
        let DestructHostel {
            id,
            name,
            location,
            distance,
            specification,
            description,
            pictures,
            rooms: _,
        } = hostel.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            location: location.into(),
            distance: distance.into(),
            specification: specification.into(),
            description: description.into(),
            pictures: Vec::from(pictures).into_iter().map(PictureDto::from).collect(),
            rooms: rooms.into_iter().map(RoomDto::from).collect(),
        }
    }
}

pub struct GetHostelDto {
    pub id: Uuid,
}

pub struct CreateHostelDto {
    pub name: String,
    pub location: String,
    pub distance: f64,
    pub specification: Vec<String>,
    pub description: String,
}

/// Field present means replace, absent means leave unchanged.
pub struct UpdateHostelDto {
    pub id: Uuid,
    pub name: Option<String>,
    pub location: Option<String>,
    pub distance: Option<f64>,
    pub specification: Option<Vec<String>>,
    pub description: Option<String>,
}

pub struct DeleteHostelDto {
    pub id: Uuid,
}

#[derive(Default)]
pub struct SearchHostelsDto {
    pub location: Option<String>,
    pub min_rooms: Option<i32>,
    pub person: Option<i32>,
    pub check_in: Option<Date>,
    pub check_out: Option<Date>,
}

pub struct ReplaceHostelPicturesDto {
    pub id: Uuid,
    pub images: Vec<UploadImage>,
}
