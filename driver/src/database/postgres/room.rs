use sqlx::pool::PoolConnection;
use sqlx::types::Json;
use sqlx::{PgConnection, Postgres};
use time::Date;
use uuid::Uuid;

use kernel::interface::query::RoomQuery;
use kernel::interface::update::RoomModifier;
use kernel::prelude::entity::{
    HostelId, Picture, Pictures, PricePerDay, Room, RoomId, RoomName, RoomNumber, RoomType,
    Specification, UnavailableDates,
};
use kernel::KernelError;

use crate::error::{ConvertError, DriverError};

pub struct PostgresRoomRepository;

#[async_trait::async_trait]
impl RoomQuery for PostgresRoomRepository {
    type Connection = PoolConnection<Postgres>;

    async fn find_by_id(
        &self,
        con: &mut PoolConnection<Postgres>,
        id: &RoomId,
    ) -> error_stack::Result<Option<Room>, KernelError> {
        PgRoomInternal::find_by_id(con, id).await.convert_error()
    }

    async fn find_by_hostel_id(
        &self,
        con: &mut PoolConnection<Postgres>,
        hostel_id: &HostelId,
    ) -> error_stack::Result<Vec<Room>, KernelError> {
        PgRoomInternal::find_by_hostel_id(con, hostel_id)
            .await
            .convert_error()
    }

    async fn find_by_number(
        &self,
        con: &mut PoolConnection<Postgres>,
        hostel_id: &HostelId,
        number: &RoomNumber,
    ) -> error_stack::Result<Option<Room>, KernelError> {
        PgRoomInternal::find_by_number(con, hostel_id, number)
            .await
            .convert_error()
    }
}

#[async_trait::async_trait]
impl RoomModifier for PostgresRoomRepository {
    type Connection = PoolConnection<Postgres>;

    async fn create(
        &self,
        con: &mut PoolConnection<Postgres>,
        room: &Room,
    ) -> error_stack::Result<(), KernelError> {
        PgRoomInternal::create(con, room).await.convert_error()
    }

    async fn update(
        &self,
        con: &mut PoolConnection<Postgres>,
        room: &Room,
    ) -> error_stack::Result<(), KernelError> {
        PgRoomInternal::update(con, room).await.convert_error()
    }

    async fn delete(
        &self,
        con: &mut PoolConnection<Postgres>,
        room_id: &RoomId,
    ) -> error_stack::Result<(), KernelError> {
        PgRoomInternal::delete(con, room_id).await.convert_error()
    }
}

#[derive(sqlx::FromRow)]
struct RoomRow {
    id: Uuid,
    number: i32,
    name: String,
    room_type: String,
    price_per_day: i64,
    specification: Vec<String>,
    not_available: Vec<Date>,
    pictures: Json<Vec<Picture>>,
    hostel_id: Uuid,
}

impl TryFrom<RoomRow> for Room {
    type Error = DriverError;
    fn try_from(value: RoomRow) -> Result<Self, Self::Error> {
        let room_type = RoomType::parse(&value.room_type)
            .ok_or_else(|| DriverError::Decode(value.room_type.clone()))?;
        Ok(Room::new(
            RoomId::new(value.id),
            RoomNumber::new(value.number),
            RoomName::new(value.name),
            room_type,
            PricePerDay::new(value.price_per_day),
            Specification::new(value.specification),
            UnavailableDates::new(value.not_available),
            Pictures::new(value.pictures.0),
            HostelId::new(value.hostel_id),
        ))
    }
}

pub(in crate::database) struct PgRoomInternal;

impl PgRoomInternal {
    async fn find_by_id(con: &mut PgConnection, id: &RoomId) -> Result<Option<Room>, DriverError> {
        let row = sqlx::query_as::<_, RoomRow>(
            // language=postgresql
            r#"
            SELECT id, number, name, room_type, price_per_day, specification, not_available, pictures, hostel_id
            FROM rooms
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await?;
        row.map(Room::try_from).transpose()
    }

    async fn find_by_hostel_id(
        con: &mut PgConnection,
        hostel_id: &HostelId,
    ) -> Result<Vec<Room>, DriverError> {
        let rows = sqlx::query_as::<_, RoomRow>(
            // language=postgresql
            r#"
            SELECT id, number, name, room_type, price_per_day, specification, not_available, pictures, hostel_id
            FROM rooms
            WHERE hostel_id = $1
            "#,
        )
        .bind(hostel_id.as_ref())
        .fetch_all(con)
        .await?;
        rows.into_iter().map(Room::try_from).collect()
    }

    async fn find_by_number(
        con: &mut PgConnection,
        hostel_id: &HostelId,
        number: &RoomNumber,
    ) -> Result<Option<Room>, DriverError> {
        let row = sqlx::query_as::<_, RoomRow>(
            // language=postgresql
            r#"
            SELECT id, number, name, room_type, price_per_day, specification, not_available, pictures, hostel_id
            FROM rooms
            WHERE hostel_id = $1 AND number = $2
            "#,
        )
        .bind(hostel_id.as_ref())
        .bind(number.as_ref())
        .fetch_optional(con)
        .await?;
        row.map(Room::try_from).transpose()
    }

    async fn create(con: &mut PgConnection, room: &Room) -> Result<(), DriverError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO rooms (id, number, name, room_type, price_per_day, specification, not_available, pictures, hostel_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(room.id().as_ref())
        .bind(room.number().as_ref())
        .bind(room.room_type().as_str())
        .bind(room.price_per_day().as_ref())
        .bind(room.specification().as_ref())
        .bind(room.not_available().as_ref())
        .bind(Json(room.pictures().as_ref()))
        .bind(room.hostel().as_ref())
        .execute(con)
        .await?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, room: &Room) -> Result<(), DriverError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE rooms
            SET name = $2,
                room_type = $3,
                price_per_day = $4,
                specification = $5,
                not_available = $6,
                pictures = $7
            WHERE id = $1
            "#,
        )
        .bind(room.id().as_ref())
        .bind(room.name().as_ref())
        .bind(room.room_type().as_str())
        .bind(room.price_per_day().as_ref())
        .bind(room.specification().as_ref())
        .bind(room.not_available().as_ref())
        .bind(Json(room.pictures().as_ref()))
        .execute(con)
        .await?;
        Ok(())
    }

    async fn delete(con: &mut PgConnection, room_id: &RoomId) -> Result<(), DriverError> {
        // language=postgresql
        sqlx::query(
            r#"
            DELETE FROM rooms
            WHERE id = $1
            "#,
        )
        .bind(room_id.as_ref())
        .execute(con)
        .await?;
        Ok(())
    }
}
