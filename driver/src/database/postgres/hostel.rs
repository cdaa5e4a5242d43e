use sqlx::pool::PoolConnection;
use sqlx::types::Json;
use sqlx::{PgConnection, Postgres};
use uuid::Uuid;

use kernel::interface::query::HostelQuery;
use kernel::interface::update::HostelModifier;
use kernel::prelude::entity::{
    Hostel, HostelDescription, HostelDistance, HostelId, HostelLocation, HostelName, HostelRooms,
    Picture, Pictures, RoomId, Specification,
};
use kernel::KernelError;

use crate::error::{ConvertError, DriverError};

pub struct PostgresHostelRepository;

#[async_trait::async_trait]
impl HostelQuery for PostgresHostelRepository {
    type Connection = PoolConnection<Postgres>;

    async fn find_by_id(
        &self,
        con: &mut PoolConnection<Postgres>,
        id: &HostelId,
    ) -> error_stack::Result<Option<Hostel>, KernelError> {
        PgHostelInternal::find_by_id(con, id).await.convert_error()
    }

    async fn find_all(
        &self,
        con: &mut PoolConnection<Postgres>,
    ) -> error_stack::Result<Vec<Hostel>, KernelError> {
        PgHostelInternal::find_all(con).await.convert_error()
    }

    async fn find_by_location(
        &self,
        con: &mut PoolConnection<Postgres>,
        keyword: &str,
        min_rooms: i32,
    ) -> error_stack::Result<Vec<Hostel>, KernelError> {
        PgHostelInternal::find_by_location(con, keyword, min_rooms)
            .await
            .convert_error()
    }
}

#[async_trait::async_trait]
impl HostelModifier for PostgresHostelRepository {
    type Connection = PoolConnection<Postgres>;

    async fn create(
        &self,
        con: &mut PoolConnection<Postgres>,
        hostel: &Hostel,
    ) -> error_stack::Result<(), KernelError> {
        PgHostelInternal::create(con, hostel).await.convert_error()
    }

    async fn update(
        &self,
        con: &mut PoolConnection<Postgres>,
        hostel: &Hostel,
    ) -> error_stack::Result<(), KernelError> {
        PgHostelInternal::update(con, hostel).await.convert_error()
    }

    async fn delete(
        &self,
        con: &mut PoolConnection<Postgres>,
        hostel_id: &HostelId,
    ) -> error_stack::Result<(), KernelError> {
        PgHostelInternal::delete(con, hostel_id).await.convert_error()
    }
}

#[derive(sqlx::FromRow)]
struct HostelRow {
    id: Uuid,
    name: String,
    location: String,
    distance: f64,
    specification: Vec<String>,
    description: String,
    pictures: Json<Vec<Picture>>,
    rooms: Vec<Uuid>,
}

impl From<HostelRow> for Hostel {
    fn from(value: HostelRow) -> Self {
        Hostel::new(
            HostelId::new(value.id),
            HostelName::new(value.name),
            HostelLocation::new(value.location),
            HostelDistance::new(value.distance),
            Specification::new(value.specification),
            HostelDescription::new(value.description),
            Pictures::new(value.pictures.0),
            HostelRooms::new(value.rooms.into_iter().map(RoomId::new).collect::<Vec<_>>()),
        )
    }
}

fn room_ids(hostel: &Hostel) -> Vec<Uuid> {
    hostel
        .rooms()
        .as_ref()
        .iter()
        .map(|id| *id.as_ref())
        .collect()
}

pub(in crate::database) struct PgHostelInternal;

impl PgHostelInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &HostelId,
    ) -> Result<Option<Hostel>, DriverError> {
        let row = sqlx::query_as::<_, HostelRow>(
            // language=postgresql
            r#"
            SELECT id, name, location, distance, specification, description, pictures, rooms
            FROM hostels
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await?;
        Ok(row.map(Hostel::from))
    }

    async fn find_all(con: &mut PgConnection) -> Result<Vec<Hostel>, DriverError> {
        let rows = sqlx::query_as::<_, HostelRow>(
            // language=postgresql
            r#"
            SELECT id, name, location, distance, specification, description, pictures, rooms
            FROM hostels
            "#,
        )
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(Hostel::from).collect())
    }

    async fn find_by_location(
        con: &mut PgConnection,
        keyword: &str,
        min_rooms: i32,
    ) -> Result<Vec<Hostel>, DriverError> {
        let rows = sqlx::query_as::<_, HostelRow>(
            // language=postgresql
            r#"
            SELECT id, name, location, distance, specification, description, pictures, rooms
            FROM hostels
            WHERE location ILIKE '%' || $1 || '%'
              AND cardinality(rooms) >= $2
            "#,
        )
        .bind(keyword)
        .bind(min_rooms)
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(Hostel::from).collect())
    }

    async fn create(con: &mut PgConnection, hostel: &Hostel) -> Result<(), DriverError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO hostels (id, name, location, distance, specification, description, pictures, rooms)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(hostel.id().as_ref())
        .bind(hostel.name().as_ref())
        .bind(hostel.location().as_ref())
        .bind(hostel.distance().as_ref())
        .bind(hostel.specification().as_ref())
        .bind(hostel.description().as_ref())
        .bind(Json(hostel.pictures().as_ref()))
        .bind(room_ids(hostel))
        .execute(con)
        .await?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, hostel: &Hostel) -> Result<(), DriverError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE hostels
            SET name = $2,
                location = $3,
                distance = $4,
                specification = $5,
                description = $6,
                pictures = $7,
                rooms = $8
            WHERE id = $1
            "#,
        )
        .bind(hostel.id().as_ref())
        .bind(hostel.name().as_ref())
        .bind(hostel.location().as_ref())
        .bind(hostel.distance().as_ref())
        .bind(hostel.specification().as_ref())
        .bind(hostel.description().as_ref())
        .bind(Json(hostel.pictures().as_ref()))
        .bind(room_ids(hostel))
        .execute(con)
        .await?;
        Ok(())
    }

    async fn delete(con: &mut PgConnection, hostel_id: &HostelId) -> Result<(), DriverError> {
        // language=postgresql
        sqlx::query(
            r#"
            DELETE FROM hostels
            WHERE id = $1
            "#,
        )
        .bind(hostel_id.as_ref())
        .execute(con)
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::HostelQuery;
    use kernel::interface::update::HostelModifier;
    use kernel::prelude::entity::{
        Hostel, HostelDescription, HostelDistance, HostelId, HostelLocation, HostelName,
        HostelRooms, Pictures, Specification,
    };
    use kernel::KernelError;

    use crate::database::postgres::{PostgresDatabase, PostgresHostelRepository};

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::from_env().await?;
        let mut con = db.transact().await?;
        let id = HostelId::new(uuid::Uuid::new_v4());

        let hostel = Hostel::new(
            id.clone(),
            HostelName::new("test".to_string()),
            HostelLocation::new("Pune".to_string()),
            HostelDistance::new(2.5),
            Specification::new(vec!["wifi".to_string()]),
            HostelDescription::new("test hostel".to_string()),
            Pictures::default(),
            HostelRooms::default(),
        );
        PostgresHostelRepository.create(&mut con, &hostel).await?;

        let found = PostgresHostelRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(hostel.clone()));

        let found = PostgresHostelRepository
            .find_by_location(&mut con, "pun", 0)
            .await?;
        assert!(found.iter().any(|h| h.id() == &id));

        let hostel = hostel.reconstruct(|h| h.name = HostelName::new("test2".to_string()));
        PostgresHostelRepository.update(&mut con, &hostel).await?;

        let found = PostgresHostelRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(hostel));

        PostgresHostelRepository.delete(&mut con, &id).await?;
        let found = PostgresHostelRepository.find_by_id(&mut con, &id).await?;
        assert!(found.is_none());

        Ok(())
    }
}
