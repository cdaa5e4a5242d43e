use axum::response::{IntoResponse, Response};
use serde::Serialize;
use time::Date;
use uuid::Uuid;

use application::transfer::{HostelDto, PictureDto, RoomDetailDto, RoomDto};
use kernel::prelude::entity::RoomType;

use crate::controller::Exhaust;
use crate::response::hostel::HostelBody;

#[derive(Debug, Serialize)]
pub struct PictureBody {
    asset_id: String,
    url: String,
}

impl From<PictureDto> for PictureBody {
    fn from(value: PictureDto) -> Self {
        Self {
            asset_id: value.asset_id,
            url: value.url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RoomBody {
    id: Uuid,
    number: i32,
    name: String,
    room_type: RoomType,
    price_per_day: i64,
    specification: Vec<String>,
    not_available: Vec<Date>,
    pictures: Vec<PictureBody>,
    hostel: Uuid,
}

impl From<RoomDto> for RoomBody {
    fn from(value: RoomDto) -> Self {
        Self {
            id: value.id,
            number: value.number,
            name: value.name,
            room_type: value.room_type,
            price_per_day: value.price_per_day,
            specification: value.specification,
            not_available: value.not_available,
            pictures: value.pictures.into_iter().map(PictureBody::from).collect(),
            hostel: value.hostel,
        }
    }
}

/// Room detail with the owning hostel swapped in for the raw reference.
#[derive(Debug, Serialize)]
pub struct RoomDetailBody {
    id: Uuid,
    number: i32,
    name: String,
    room_type: RoomType,
    price_per_day: i64,
    specification: Vec<String>,
    not_available: Vec<Date>,
    pictures: Vec<PictureBody>,
    hostel: Option<HostelBody>,
}

impl From<RoomDetailDto> for RoomDetailBody {
    fn from(value: RoomDetailDto) -> Self {
        let RoomDetailDto { room, hostel } = value;
        Self {
            id: room.id,
            number: room.number,
            name: room.name,
            room_type: room.room_type,
            price_per_day: room.price_per_day,
            specification: room.specification,
            not_available: room.not_available,
            pictures: room.pictures.into_iter().map(PictureBody::from).collect(),
            hostel: hostel.map(HostelBody::from),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RoomResponse {
    success: bool,
    room: RoomBody,
}

impl IntoResponse for RoomResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedRoomResponse {
    success: bool,
    room: RoomBody,
}

impl IntoResponse for CreatedRoomResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::CREATED, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct RoomDetailResponse {
    success: bool,
    room: RoomDetailBody,
}

impl IntoResponse for RoomDetailResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct RoomsResponse {
    success: bool,
    rooms: Vec<RoomBody>,
}

impl IntoResponse for RoomsResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct DeletedRoomResponse {
    success: bool,
    hostel: HostelBody,
    message: &'static str,
}

impl IntoResponse for DeletedRoomResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct RoomPresenter;

impl Exhaust<RoomDto> for RoomPresenter {
    type To = RoomResponse;
    fn emit(&self, input: RoomDto) -> Self::To {
        RoomResponse {
            success: true,
            room: RoomBody::from(input),
        }
    }
}

impl Exhaust<RoomDetailDto> for RoomPresenter {
    type To = RoomDetailResponse;
    fn emit(&self, input: RoomDetailDto) -> Self::To {
        RoomDetailResponse {
            success: true,
            room: RoomDetailBody::from(input),
        }
    }
}

impl Exhaust<Vec<RoomDto>> for RoomPresenter {
    type To = RoomsResponse;
    fn emit(&self, input: Vec<RoomDto>) -> Self::To {
        RoomsResponse {
            success: true,
            rooms: input.into_iter().map(RoomBody::from).collect(),
        }
    }
}

pub struct CreatedRoomPresenter;

impl Exhaust<RoomDto> for CreatedRoomPresenter {
    type To = CreatedRoomResponse;
    fn emit(&self, input: RoomDto) -> Self::To {
        CreatedRoomResponse {
            success: true,
            room: RoomBody::from(input),
        }
    }
}

pub struct DeletedRoomPresenter;

impl Exhaust<HostelDto> for DeletedRoomPresenter {
    type To = DeletedRoomResponse;
    fn emit(&self, input: HostelDto) -> Self::To {
        DeletedRoomResponse {
            success: true,
            hostel: HostelBody::from(input),
            message: "room deleted successfully",
        }
    }
}
