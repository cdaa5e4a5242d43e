use serde::Deserialize;
use uuid::Uuid;

use application::transfer::{
    CreateRoomDto, DeleteRoomDto, GetHostelRoomsDto, GetRoomDto, ReplaceRoomPicturesDto,
    UpdateRoomDto,
};
use kernel::interface::image::UploadImage;
use kernel::prelude::entity::RoomType;

use crate::controller::Intake;

#[derive(Debug, Deserialize)]
pub struct CreateRoomRequest {
    number: i32,
    name: String,
    room_type: RoomType,
    price_per_day: i64,
    #[serde(default)]
    specification: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRoomRequest {
    number: Option<i32>,
    name: Option<String>,
    room_type: Option<RoomType>,
    price_per_day: Option<i64>,
    specification: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct GetRoomRequest {
    id: Uuid,
}

impl GetRoomRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct GetHostelRoomsRequest {
    hostel_id: Uuid,
}

impl GetHostelRoomsRequest {
    pub fn new(hostel_id: Uuid) -> Self {
        Self { hostel_id }
    }
}

#[derive(Debug)]
pub struct DeleteRoomRequest {
    id: Uuid,
}

impl DeleteRoomRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

pub struct RoomTransformer;

impl Intake<(Uuid, CreateRoomRequest)> for RoomTransformer {
    type To = CreateRoomDto;
    fn emit(&self, input: (Uuid, CreateRoomRequest)) -> Self::To {
        let (hostel_id, input) = input;
        CreateRoomDto {
            hostel_id,
            number: input.number,
            name: input.name,
            room_type: input.room_type,
            price_per_day: input.price_per_day,
            specification: input.specification,
        }
    }
}

impl Intake<(Uuid, UpdateRoomRequest)> for RoomTransformer {
    type To = UpdateRoomDto;
    fn emit(&self, input: (Uuid, UpdateRoomRequest)) -> Self::To {
        let (id, input) = input;
        UpdateRoomDto {
            id,
            number: input.number,
            name: input.name,
            room_type: input.room_type,
            price_per_day: input.price_per_day,
            specification: input.specification,
        }
    }
}

impl Intake<GetRoomRequest> for RoomTransformer {
    type To = GetRoomDto;
    fn emit(&self, input: GetRoomRequest) -> Self::To {
        GetRoomDto { id: input.id }
    }
}

impl Intake<GetHostelRoomsRequest> for RoomTransformer {
    type To = GetHostelRoomsDto;
    fn emit(&self, input: GetHostelRoomsRequest) -> Self::To {
        GetHostelRoomsDto {
            hostel_id: input.hostel_id,
        }
    }
}

impl Intake<DeleteRoomRequest> for RoomTransformer {
    type To = DeleteRoomDto;
    fn emit(&self, input: DeleteRoomRequest) -> Self::To {
        DeleteRoomDto { id: input.id }
    }
}

impl Intake<(Uuid, Vec<UploadImage>)> for RoomTransformer {
    type To = ReplaceRoomPicturesDto;
    fn emit(&self, input: (Uuid, Vec<UploadImage>)) -> Self::To {
        let (id, images) = input;
        ReplaceRoomPicturesDto { id, images }
    }
}
