use time::{Date, OffsetDateTime};
use uuid::Uuid;

use kernel::prelude::entity::{Booking, BookingStatus, DestructBooking, PaymentInfo};

#[derive(Debug, Clone)]
pub struct PaymentInfoDto {
    pub id: String,
    pub status: String,
}

impl From<PaymentInfo> for PaymentInfoDto {
    fn from(value: PaymentInfo) -> Self {
        Self {
            id: value.id().clone(),
            status: value.status().clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BookingDto {
    pub id: Uuid,
    pub user: Uuid,
    pub hostel: Uuid,
    pub room: Uuid,
    pub dates: Vec<Date>,
    pub total_price_per_day: i64,
    pub phone: String,
    pub paid_at: OffsetDateTime,
    pub payment_info: Option<PaymentInfoDto>,
    pub status: BookingStatus,
}

impl From<Booking> for BookingDto {
    fn from(value: Booking) -> Self {
        let DestructBooking {
            id,
            user,
            hostel,
            room,
            dates,
            total_price_per_day,
            phone,
            paid_at,
            payment_info,
            status,
        } = value.into_destruct();
        Self {
            id: id.into(),
            user: user.into(),
            hostel: hostel.into(),
            room: room.into(),
            dates: dates.into(),
            total_price_per_day: total_price_per_day.into(),
            phone: phone.into(),
            paid_at: paid_at.into(),
            payment_info: payment_info.map(PaymentInfoDto::from),
            status,
        }
    }
}

pub struct GetBookingDto {
    pub id: Uuid,
}

pub struct CreateBookingDto {
    pub user: Uuid,
    pub hostel: Uuid,
    pub room: Uuid,
    pub dates: Vec<Date>,
    pub total_price_per_day: i64,
    pub phone: String,
    pub paid_at: OffsetDateTime,
    pub payment_info: Option<PaymentInfoDto>,
}
