use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{
    BookingQuery, DependOnBookingQuery, DependOnHostelQuery, DependOnRoomQuery, HostelQuery,
    RoomQuery,
};
use kernel::interface::update::{BookingModifier, DependOnBookingModifier};
use kernel::prelude::entity::{
    Booking, BookingDates, BookingId, BookingStatus, HostelId, PaidAt, PaymentInfo, Phone, RoomId,
    TotalPricePerDay, UserId,
};
use kernel::KernelError;

use crate::transfer::{BookingDto, CreateBookingDto, GetBookingDto};

#[async_trait::async_trait]
pub trait GetBookingService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnBookingQuery
{
    async fn get_booking(
        &self,
        dto: GetBookingDto,
    ) -> error_stack::Result<BookingDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookingId::new(dto.id);
        let booking = self
            .booking_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound("Booking")))?;

        Ok(BookingDto::from(booking))
    }

    async fn get_all_bookings(&self) -> error_stack::Result<Vec<BookingDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let bookings = self.booking_query().find_all(&mut connection).await?;
        Ok(bookings.into_iter().map(BookingDto::from).collect())
    }
}

impl<T> GetBookingService for T where T: DependOnDatabaseConnection + DependOnBookingQuery {}

#[async_trait::async_trait]
pub trait CreateBookingService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnHostelQuery
    + DependOnRoomQuery
    + DependOnBookingModifier
{
    /// Records a reservation against an existing hostel/room pair. The
    /// room's unavailability ledger is maintained elsewhere and is not
    /// touched here.
    async fn create_booking(
        &self,
        dto: CreateBookingDto,
    ) -> error_stack::Result<Uuid, KernelError> {
        if dto.dates.is_empty() {
            return Err(Report::new(KernelError::Validation(
                "At least one date required".to_string(),
            )));
        }

        let mut connection = self.database_connection().transact().await?;

        let hostel_id = HostelId::new(dto.hostel);
        self.hostel_query()
            .find_by_id(&mut connection, &hostel_id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound("Hostel")))?;

        let room_id = RoomId::new(dto.room);
        let room = self
            .room_query()
            .find_by_id(&mut connection, &room_id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound("Room")))?;
        if room.hostel() != &hostel_id {
            return Err(Report::new(KernelError::Validation(
                "Room does not belong to the hostel".to_string(),
            )));
        }

        let uuid = Uuid::new_v4();
        let booking = Booking::new(
            BookingId::new(uuid),
            UserId::new(dto.user),
            hostel_id,
            room_id,
            BookingDates::new(dto.dates),
            TotalPricePerDay::new(dto.total_price_per_day),
            Phone::new(dto.phone),
            PaidAt::new(dto.paid_at),
            dto.payment_info
                .map(|info| PaymentInfo::new(info.id, info.status)),
            BookingStatus::default(),
        );
        self.booking_modifier().create(&mut connection, &booking).await?;

        Ok(uuid)
    }
}

impl<T> CreateBookingService for T where
    T: DependOnDatabaseConnection + DependOnHostelQuery + DependOnRoomQuery + DependOnBookingModifier
{
}

#[cfg(test)]
mod test {
    use time::macros::{date, datetime};
    use uuid::Uuid;

    use kernel::prelude::entity::{BookingStatus, RoomType};
    use kernel::KernelError;

    use crate::service::memory::{sample_hostel, sample_room, TestModule};
    use crate::service::{CreateBookingService, GetBookingService};
    use crate::transfer::{CreateBookingDto, GetBookingDto};

    fn create_dto(hostel: Uuid, room: Uuid, dates: Vec<time::Date>) -> CreateBookingDto {
        CreateBookingDto {
            user: Uuid::new_v4(),
            hostel,
            room,
            dates,
            total_price_per_day: 700,
            phone: "9876543210".to_string(),
            paid_at: datetime!(2024-02-01 0:00 UTC),
            payment_info: None,
        }
    }

    #[tokio::test]
    async fn create_rejects_empty_date_list() {
        let module = TestModule::new();
        let result = module
            .create_booking(create_dto(Uuid::new_v4(), Uuid::new_v4(), vec![]))
            .await;
        assert!(matches!(
            result.unwrap_err().current_context(),
            KernelError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn create_rejects_room_owned_by_another_hostel() {
        let module = TestModule::new();
        let hostel = Uuid::new_v4();
        let other = Uuid::new_v4();
        let room = Uuid::new_v4();
        {
            let mut state = module.database().state();
            state
                .hostels
                .insert(hostel, sample_hostel(hostel, "Pune", vec![], vec![]));
            state
                .hostels
                .insert(other, sample_hostel(other, "Goa", vec![room], vec![]));
            state
                .rooms
                .insert(room, sample_room(room, other, 1, RoomType::Double, vec![], vec![]));
        }

        let result = module
            .create_booking(create_dto(hostel, room, vec![date!(2024 - 03 - 01)]))
            .await;
        assert!(matches!(
            result.unwrap_err().current_context(),
            KernelError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn create_defaults_to_processing_status() {
        let module = TestModule::new();
        let hostel = Uuid::new_v4();
        let room = Uuid::new_v4();
        {
            let mut state = module.database().state();
            state
                .hostels
                .insert(hostel, sample_hostel(hostel, "Pune", vec![room], vec![]));
            state
                .rooms
                .insert(room, sample_room(room, hostel, 1, RoomType::Double, vec![], vec![]));
        }

        let id = module
            .create_booking(create_dto(hostel, room, vec![date!(2024 - 03 - 01)]))
            .await
            .unwrap();

        let booking = module.get_booking(GetBookingDto { id }).await.unwrap();
        assert_eq!(booking.status, BookingStatus::Processing);
        assert_eq!(booking.hostel, hostel);
        assert_eq!(booking.room, room);
    }

    #[tokio::test]
    async fn get_missing_booking_is_not_found() {
        let module = TestModule::new();
        let result = module.get_booking(GetBookingDto { id: Uuid::new_v4() }).await;
        assert!(matches!(
            result.unwrap_err().current_context(),
            KernelError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn list_returns_every_booking() {
        let module = TestModule::new();
        let hostel = Uuid::new_v4();
        let room = Uuid::new_v4();
        {
            let mut state = module.database().state();
            state
                .hostels
                .insert(hostel, sample_hostel(hostel, "Pune", vec![room], vec![]));
            state
                .rooms
                .insert(room, sample_room(room, hostel, 1, RoomType::Double, vec![], vec![]));
        }
        module
            .create_booking(create_dto(hostel, room, vec![date!(2024 - 03 - 01)]))
            .await
            .unwrap();
        module
            .create_booking(create_dto(hostel, room, vec![date!(2024 - 03 - 02)]))
            .await
            .unwrap();

        let all = module.get_all_bookings().await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
