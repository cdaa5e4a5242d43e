use serde::Deserialize;
use time::Date;
use uuid::Uuid;

use application::transfer::{
    CreateHostelDto, DeleteHostelDto, GetHostelDto, ReplaceHostelPicturesDto, SearchHostelsDto,
    UpdateHostelDto,
};
use kernel::interface::image::UploadImage;

use crate::controller::Intake;

/// Query half of `/hostels`: `room` is the minimum room count, `d1`/`d2`
/// the inclusive date range (both must be present to take effect).
#[derive(Debug, Deserialize)]
pub struct SearchHostelsRequest {
    location: Option<String>,
    room: Option<i32>,
    person: Option<i32>,
    d1: Option<Date>,
    d2: Option<Date>,
}

#[derive(Debug, Deserialize)]
pub struct CreateHostelRequest {
    name: String,
    location: String,
    distance: f64,
    #[serde(default)]
    specification: Vec<String>,
    description: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateHostelRequest {
    name: Option<String>,
    location: Option<String>,
    distance: Option<f64>,
    specification: Option<Vec<String>>,
    description: Option<String>,
}

#[derive(Debug)]
pub struct GetHostelRequest {
    id: Uuid,
}

impl GetHostelRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteHostelRequest {
    id: Uuid,
}

impl DeleteHostelRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

pub struct HostelTransformer;

impl Intake<SearchHostelsRequest> for HostelTransformer {
    type To = SearchHostelsDto;
    fn emit(&self, input: SearchHostelsRequest) -> Self::To {
        SearchHostelsDto {
            location: input.location,
            min_rooms: input.room,
            person: input.person,
            check_in: input.d1,
            check_out: input.d2,
        }
    }
}

impl Intake<CreateHostelRequest> for HostelTransformer {
    type To = CreateHostelDto;
    fn emit(&self, input: CreateHostelRequest) -> Self::To {
        CreateHostelDto {
            name: input.name,
            location: input.location,
            distance: input.distance,
            specification: input.specification,
            description: input.description,
        }
    }
}

impl Intake<(Uuid, UpdateHostelRequest)> for HostelTransformer {
    type To = UpdateHostelDto;
    fn emit(&self, input: (Uuid, UpdateHostelRequest)) -> Self::To {
        let (id, input) = input;
        UpdateHostelDto {
            id,
            name: input.name,
            location: input.location,
            distance: input.distance,
            specification: input.specification,
            description: input.description,
        }
    }
}

impl Intake<GetHostelRequest> for HostelTransformer {
    type To = GetHostelDto;
    fn emit(&self, input: GetHostelRequest) -> Self::To {
        GetHostelDto { id: input.id }
    }
}

impl Intake<DeleteHostelRequest> for HostelTransformer {
    type To = DeleteHostelDto;
    fn emit(&self, input: DeleteHostelRequest) -> Self::To {
        DeleteHostelDto { id: input.id }
    }
}

impl Intake<(Uuid, Vec<UploadImage>)> for HostelTransformer {
    type To = ReplaceHostelPicturesDto;
    fn emit(&self, input: (Uuid, Vec<UploadImage>)) -> Self::To {
        let (id, images) = input;
        ReplaceHostelPicturesDto { id, images }
    }
}
