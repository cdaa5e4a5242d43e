use serde::Deserialize;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use application::transfer::{CreateBookingDto, GetBookingDto, PaymentInfoDto};

use crate::controller::Intake;

#[derive(Debug, Deserialize)]
pub struct PaymentInfoRequest {
    id: String,
    status: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    user: Uuid,
    hostel: Uuid,
    room: Uuid,
    dates: Vec<Date>,
    total_price_per_day: i64,
    phone: String,
    #[serde(with = "time::serde::rfc3339")]
    paid_at: OffsetDateTime,
    payment_info: Option<PaymentInfoRequest>,
}

#[derive(Debug)]
pub struct GetBookingRequest {
    id: Uuid,
}

impl GetBookingRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

pub struct BookingTransformer;

impl Intake<CreateBookingRequest> for BookingTransformer {
    type To = CreateBookingDto;
    fn emit(&self, input: CreateBookingRequest) -> Self::To {
        CreateBookingDto {
            user: input.user,
            hostel: input.hostel,
            room: input.room,
            dates: input.dates,
            total_price_per_day: input.total_price_per_day,
            phone: input.phone,
            paid_at: input.paid_at,
            payment_info: input.payment_info.map(|info| PaymentInfoDto {
                id: info.id,
                status: info.status,
            }),
        }
    }
}

impl Intake<GetBookingRequest> for BookingTransformer {
    type To = GetBookingDto;
    fn emit(&self, input: GetBookingRequest) -> Self::To {
        GetBookingDto { id: input.id }
    }
}

impl Intake<()> for BookingTransformer {
    type To = ();
    fn emit(&self, _: ()) -> Self::To {}
}
