use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

use application::transfer::HostelDto;

use crate::controller::Exhaust;
use crate::response::room::{PictureBody, RoomBody};

#[derive(Debug, Serialize)]
pub struct HostelBody {
    id: Uuid,
    name: String,
    location: String,
    distance: f64,
    specification: Vec<String>,
    description: String,
    pictures: Vec<PictureBody>,
    rooms: Vec<RoomBody>,
}

impl From<HostelDto> for HostelBody {
    fn from(value: HostelDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            location: value.location,
            distance: value.distance,
            specification: value.specification,
            description: value.description,
            pictures: value.pictures.into_iter().map(PictureBody::from).collect(),
            rooms: value.rooms.into_iter().map(RoomBody::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HostelResponse {
    success: bool,
    hostel: HostelBody,
}

impl IntoResponse for HostelResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct HostelsResponse {
    success: bool,
    hostels: Vec<HostelBody>,
}

impl IntoResponse for HostelsResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedHostelResponse {
    success: bool,
}

impl IntoResponse for CreatedHostelResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::CREATED, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct DeletedHostelResponse {
    success: bool,
    hostels: Vec<HostelBody>,
    message: &'static str,
}

impl IntoResponse for DeletedHostelResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct HostelPresenter;

impl Exhaust<HostelDto> for HostelPresenter {
    type To = HostelResponse;
    fn emit(&self, input: HostelDto) -> Self::To {
        HostelResponse {
            success: true,
            hostel: HostelBody::from(input),
        }
    }
}

impl Exhaust<Vec<HostelDto>> for HostelPresenter {
    type To = HostelsResponse;
    fn emit(&self, input: Vec<HostelDto>) -> Self::To {
        HostelsResponse {
            success: true,
            hostels: input.into_iter().map(HostelBody::from).collect(),
        }
    }
}

// The created payload intentionally omits the document, matching the
// hostel-creation contract.
impl Exhaust<Uuid> for HostelPresenter {
    type To = CreatedHostelResponse;
    fn emit(&self, _: Uuid) -> Self::To {
        CreatedHostelResponse { success: true }
    }
}

pub struct DeletedHostelPresenter;

impl Exhaust<Vec<HostelDto>> for DeletedHostelPresenter {
    type To = DeletedHostelResponse;
    fn emit(&self, input: Vec<HostelDto>) -> Self::To {
        DeletedHostelResponse {
            success: true,
            hostels: input.into_iter().map(HostelBody::from).collect(),
            message: "Hostel deleted successfully",
        }
    }
}
