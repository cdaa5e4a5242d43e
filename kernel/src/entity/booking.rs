mod dates;
mod id;
mod paid_at;
mod payment;
mod phone;
mod status;
mod total_price;

pub use self::{dates::*, id::*, paid_at::*, payment::*, phone::*, status::*, total_price::*};
use crate::entity::hostel::HostelId;
use crate::entity::room::RoomId;
use crate::entity::user::UserId;
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Booking {
    id: BookingId,
    user: UserId,
    hostel: HostelId,
    room: RoomId,
    dates: BookingDates,
    total_price_per_day: TotalPricePerDay,
    phone: Phone,
    paid_at: PaidAt,
    payment_info: Option<PaymentInfo>,
    status: BookingStatus,
}

impl Booking {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: BookingId,
        user: UserId,
        hostel: HostelId,
        room: RoomId,
        dates: BookingDates,
        total_price_per_day: TotalPricePerDay,
        phone: Phone,
        paid_at: PaidAt,
        payment_info: Option<PaymentInfo>,
        status: BookingStatus,
    ) -> Self {
        Self {
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
        }
    }
}
