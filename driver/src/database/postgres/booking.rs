use sqlx::pool::PoolConnection;
use sqlx::{PgConnection, Postgres};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use kernel::interface::query::BookingQuery;
use kernel::interface::update::BookingModifier;
use kernel::prelude::entity::{
    Booking, BookingDates, BookingId, BookingStatus, HostelId, PaidAt, PaymentInfo, Phone, RoomId,
    TotalPricePerDay, UserId,
};
use kernel::KernelError;

use crate::error::{ConvertError, DriverError};

pub struct PostgresBookingRepository;

#[async_trait::async_trait]
impl BookingQuery for PostgresBookingRepository {
    type Connection = PoolConnection<Postgres>;

    async fn find_by_id(
        &self,
        con: &mut PoolConnection<Postgres>,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        PgBookingInternal::find_by_id(con, id).await.convert_error()
    }

    async fn find_by_hostel_id(
        &self,
        con: &mut PoolConnection<Postgres>,
        hostel_id: &HostelId,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        PgBookingInternal::find_by_hostel_id(con, hostel_id)
            .await
            .convert_error()
    }

    async fn find_by_room_id(
        &self,
        con: &mut PoolConnection<Postgres>,
        room_id: &RoomId,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        PgBookingInternal::find_by_room_id(con, room_id)
            .await
            .convert_error()
    }

    async fn find_all(
        &self,
        con: &mut PoolConnection<Postgres>,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        PgBookingInternal::find_all(con).await.convert_error()
    }
}

#[async_trait::async_trait]
impl BookingModifier for PostgresBookingRepository {
    type Connection = PoolConnection<Postgres>;

    async fn create(
        &self,
        con: &mut PoolConnection<Postgres>,
        booking: &Booking,
    ) -> error_stack::Result<(), KernelError> {
        PgBookingInternal::create(con, booking).await.convert_error()
    }

    async fn delete(
        &self,
        con: &mut PoolConnection<Postgres>,
        booking_id: &BookingId,
    ) -> error_stack::Result<(), KernelError> {
        PgBookingInternal::delete(con, booking_id)
            .await
            .convert_error()
    }
}

#[derive(sqlx::FromRow)]
struct BookingRow {
    id: Uuid,
    user_id: Uuid,
    hostel_id: Uuid,
    room_id: Uuid,
    dates: Vec<Date>,
    total_price_per_day: i64,
    phone: String,
    paid_at: OffsetDateTime,
    payment_id: Option<String>,
    payment_status: Option<String>,
    status: String,
}

impl TryFrom<BookingRow> for Booking {
    type Error = DriverError;
    fn try_from(value: BookingRow) -> Result<Self, Self::Error> {
        let status = BookingStatus::parse(&value.status)
            .ok_or_else(|| DriverError::Decode(value.status.clone()))?;
        let payment_info = value
            .payment_id
            .zip(value.payment_status)
            .map(|(id, payment_status)| PaymentInfo::new(id, payment_status));
        Ok(Booking::new(
            BookingId::new(value.id),
            UserId::new(value.user_id),
            HostelId::new(value.hostel_id),
            RoomId::new(value.room_id),
            BookingDates::new(value.dates),
            TotalPricePerDay::new(value.total_price_per_day),
            Phone::new(value.phone),
            PaidAt::new(value.paid_at),
            payment_info,
            status,
        ))
    }
}

pub(in crate::database) struct PgBookingInternal;

impl PgBookingInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &BookingId,
    ) -> Result<Option<Booking>, DriverError> {
        let row = sqlx::query_as::<_, BookingRow>(
            // language=postgresql
            r#"
            SELECT id, user_id, hostel_id, room_id, dates, total_price_per_day, phone, paid_at, payment_id, payment_status, status
            FROM bookings
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await?;
        row.map(Booking::try_from).transpose()
    }

    async fn find_by_hostel_id(
        con: &mut PgConnection,
        hostel_id: &HostelId,
    ) -> Result<Vec<Booking>, DriverError> {
        let rows = sqlx::query_as::<_, BookingRow>(
            // language=postgresql
            r#"
            SELECT id, user_id, hostel_id, room_id, dates, total_price_per_day, phone, paid_at, payment_id, payment_status, status
            FROM bookings
            WHERE hostel_id = $1
            "#,
        )
        .bind(hostel_id.as_ref())
        .fetch_all(con)
        .await?;
        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn find_by_room_id(
        con: &mut PgConnection,
        room_id: &RoomId,
    ) -> Result<Vec<Booking>, DriverError> {
        let rows = sqlx::query_as::<_, BookingRow>(
            // language=postgresql
            r#"
            SELECT id, user_id, hostel_id, room_id, dates, total_price_per_day, phone, paid_at, payment_id, payment_status, status
            FROM bookings
            WHERE room_id = $1
            "#,
        )
        .bind(room_id.as_ref())
        .fetch_all(con)
        .await?;
        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn find_all(con: &mut PgConnection) -> Result<Vec<Booking>, DriverError> {
        let rows = sqlx::query_as::<_, BookingRow>(
            // language=postgresql
            r#"
            SELECT id, user_id, hostel_id, room_id, dates, total_price_per_day, phone, paid_at, payment_id, payment_status, status
            FROM bookings
            "#,
        )
        .fetch_all(con)
        .await?;
        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn create(con: &mut PgConnection, booking: &Booking) -> Result<(), DriverError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO bookings (id, user_id, hostel_id, room_id, dates, total_price_per_day, phone, paid_at, payment_id, payment_status, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(booking.id().as_ref())
        .bind(booking.user().as_ref())
        .bind(booking.hostel().as_ref())
        .bind(booking.room().as_ref())
        .bind(booking.dates().as_ref())
        .bind(booking.total_price_per_day().as_ref())
        .bind(booking.phone().as_ref())
        .bind(booking.paid_at().as_ref())
        .bind(booking.payment_info().as_ref().map(|info| info.id().clone()))
        .bind(
            booking
                .payment_info()
                .as_ref()
                .map(|info| info.status().clone()),
        )
        .bind(booking.status().as_str())
        .execute(con)
        .await?;
        Ok(())
    }

    async fn delete(con: &mut PgConnection, booking_id: &BookingId) -> Result<(), DriverError> {
        // language=postgresql
        sqlx::query(
            r#"
            DELETE FROM bookings
            WHERE id = $1
            "#,
        )
        .bind(booking_id.as_ref())
        .execute(con)
        .await?;
        Ok(())
    }
}
