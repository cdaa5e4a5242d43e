use axum::response::{IntoResponse, Response};
use serde::Serialize;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use application::transfer::{BookingDto, PaymentInfoDto};
use kernel::prelude::entity::BookingStatus;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct PaymentInfoBody {
    id: String,
    status: String,
}

impl From<PaymentInfoDto> for PaymentInfoBody {
    fn from(value: PaymentInfoDto) -> Self {
        Self {
            id: value.id,
            status: value.status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookingBody {
    id: Uuid,
    user: Uuid,
    hostel: Uuid,
    room: Uuid,
    dates: Vec<Date>,
    total_price_per_day: i64,
    phone: String,
    #[serde(with = "time::serde::rfc3339")]
    paid_at: OffsetDateTime,
    payment_info: Option<PaymentInfoBody>,
    status: BookingStatus,
}

impl From<BookingDto> for BookingBody {
    fn from(value: BookingDto) -> Self {
        Self {
            id: value.id,
            user: value.user,
            hostel: value.hostel,
            room: value.room,
            dates: value.dates,
            total_price_per_day: value.total_price_per_day,
            phone: value.phone,
            paid_at: value.paid_at,
            payment_info: value.payment_info.map(PaymentInfoBody::from),
            status: value.status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    success: bool,
    booking: BookingBody,
}

impl IntoResponse for BookingResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct BookingsResponse {
    success: bool,
    bookings: Vec<BookingBody>,
}

impl IntoResponse for BookingsResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedBookingResponse {
    success: bool,
    id: Uuid,
}

impl IntoResponse for CreatedBookingResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::CREATED, axum::Json(self)).into_response()
    }
}

pub struct BookingPresenter;

impl Exhaust<BookingDto> for BookingPresenter {
    type To = BookingResponse;
    fn emit(&self, input: BookingDto) -> Self::To {
        BookingResponse {
            success: true,
            booking: BookingBody::from(input),
        }
    }
}

impl Exhaust<Vec<BookingDto>> for BookingPresenter {
    type To = BookingsResponse;
    fn emit(&self, input: Vec<BookingDto>) -> Self::To {
        BookingsResponse {
            success: true,
            bookings: input.into_iter().map(BookingBody::from).collect(),
        }
    }
}

impl Exhaust<Uuid> for BookingPresenter {
    type To = CreatedBookingResponse;
    fn emit(&self, input: Uuid) -> Self::To {
        CreatedBookingResponse {
            success: true,
            id: input,
        }
    }
}
