use error_stack::Report;
use futures::future::try_join_all;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::image::{DependOnImageStorage, ImageStorage};
use kernel::interface::query::{
    BookingQuery, DependOnBookingQuery, DependOnHostelQuery, DependOnRoomQuery, HostelQuery,
    RoomQuery,
};
use kernel::interface::update::{
    BookingModifier, DependOnBookingModifier, DependOnHostelModifier, DependOnRoomModifier,
    HostelModifier, RoomModifier,
};
use kernel::prelude::entity::{
    HostelId, HostelRooms, Pictures, PricePerDay, Room, RoomId, RoomName, RoomNumber,
    Specification, UnavailableDates,
};
use kernel::KernelError;

use crate::transfer::{
    CreateRoomDto, DeleteRoomDto, GetHostelRoomsDto, GetRoomDto, HostelDto, ReplaceRoomPicturesDto,
    RoomDetailDto, RoomDto, UpdateRoomDto,
};

pub(crate) const ROOM_PICTURES_FOLDER: &str = "Hostelites/rooms";

#[async_trait::async_trait]
pub trait GetRoomService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnHostelQuery + DependOnRoomQuery
{
    async fn get_room(&self, dto: GetRoomDto) -> error_stack::Result<RoomDetailDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = RoomId::new(dto.id);
        let room = self
            .room_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound("Room")))?;

        let hostel = match self
            .hostel_query()
            .find_by_id(&mut connection, room.hostel())
            .await?
        {
            Some(hostel) => {
                let rooms = self
                    .room_query()
                    .find_by_hostel_id(&mut connection, hostel.id())
                    .await?;
                Some(HostelDto::from_parts(hostel, rooms))
            }
            None => None,
        };

        Ok(RoomDetailDto {
            room: RoomDto::from(room),
            hostel,
        })
    }
}

impl<T> GetRoomService for T where
    T: DependOnDatabaseConnection + DependOnHostelQuery + DependOnRoomQuery
{
}

#[async_trait::async_trait]
pub trait GetHostelRoomsService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnHostelQuery + DependOnRoomQuery
{
    async fn get_hostel_rooms(
        &self,
        dto: GetHostelRoomsDto,
    ) -> error_stack::Result<Vec<RoomDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let hostel_id = HostelId::new(dto.hostel_id);
        self.hostel_query()
            .find_by_id(&mut connection, &hostel_id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound("Hostel")))?;

        let rooms = self
            .room_query()
            .find_by_hostel_id(&mut connection, &hostel_id)
            .await?;
        Ok(rooms.into_iter().map(RoomDto::from).collect())
    }
}

impl<T> GetHostelRoomsService for T where
    T: DependOnDatabaseConnection + DependOnHostelQuery + DependOnRoomQuery
{
}

#[async_trait::async_trait]
pub trait CreateRoomService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnHostelQuery
    + DependOnRoomQuery
    + DependOnHostelModifier
    + DependOnRoomModifier
{
    /// Creates a room under its hostel and appends the new id to the
    /// hostel's reference set. The number must be free within the hostel.
    async fn create_room(&self, dto: CreateRoomDto) -> error_stack::Result<RoomDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let hostel_id = HostelId::new(dto.hostel_id);
        let hostel = self
            .hostel_query()
            .find_by_id(&mut connection, &hostel_id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound("Hostel")))?;

        let number = RoomNumber::new(dto.number);
        let duplicate = self
            .room_query()
            .find_by_number(&mut connection, &hostel_id, &number)
            .await?;
        if duplicate.is_some() {
            return Err(Report::new(KernelError::DuplicateRoomNumber));
        }

        let uuid = Uuid::new_v4();
        let room = Room::new(
            RoomId::new(uuid),
            number,
            RoomName::new(dto.name),
            dto.room_type,
            PricePerDay::new(dto.price_per_day),
            Specification::new(dto.specification),
            UnavailableDates::default(),
            Pictures::default(),
            hostel_id,
        );
        self.room_modifier().create(&mut connection, &room).await?;

        let mut rooms = hostel.rooms().as_ref().clone();
        rooms.push(RoomId::new(uuid));
        let hostel = hostel.reconstruct(|h| h.rooms = HostelRooms::new(rooms));
        self.hostel_modifier().update(&mut connection, &hostel).await?;

        Ok(RoomDto::from(room))
    }
}

impl<T> CreateRoomService for T where
    T: DependOnDatabaseConnection
        + DependOnHostelQuery
        + DependOnRoomQuery
        + DependOnHostelModifier
        + DependOnRoomModifier
{
}

#[async_trait::async_trait]
pub trait UpdateRoomService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnRoomQuery + DependOnRoomModifier
{
    async fn update_room(&self, dto: UpdateRoomDto) -> error_stack::Result<RoomDto, KernelError> {
        if dto.number.is_some() {
            return Err(Report::new(KernelError::ImmutableRoomNumber));
        }

        let mut connection = self.database_connection().transact().await?;

        let id = RoomId::new(dto.id);
        let room = self
            .room_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound("Room")))?;

        let room = room.reconstruct(|r| {
            if let Some(name) = dto.name {
                r.name = RoomName::new(name);
            }
            if let Some(room_type) = dto.room_type {
                r.room_type = room_type;
            }
            if let Some(price_per_day) = dto.price_per_day {
                r.price_per_day = PricePerDay::new(price_per_day);
            }
            if let Some(specification) = dto.specification {
                r.specification = Specification::new(specification);
            }
        });
        self.room_modifier().update(&mut connection, &room).await?;

        Ok(RoomDto::from(room))
    }
}

impl<T> UpdateRoomService for T where
    T: DependOnDatabaseConnection + DependOnRoomQuery + DependOnRoomModifier
{
}

#[async_trait::async_trait]
pub trait ReplaceRoomPicturesService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnRoomQuery
    + DependOnRoomModifier
    + DependOnImageStorage
{
    /// Same swap discipline as the hostel path: persist the new set before
    /// destroying what it replaced.
    async fn replace_room_pictures(
        &self,
        dto: ReplaceRoomPicturesDto,
    ) -> error_stack::Result<RoomDto, KernelError> {
        if dto.images.is_empty() {
            return Err(Report::new(KernelError::Validation(
                "Please upload room pictures".to_string(),
            )));
        }

        let mut connection = self.database_connection().transact().await?;

        let id = RoomId::new(dto.id);
        let room = self
            .room_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound("Room")))?;

        let uploaded = try_join_all(
            dto.images
                .into_iter()
                .map(|image| self.image_storage().upload(image, ROOM_PICTURES_FOLDER)),
        )
        .await?;

        let previous = room.pictures().as_ref().clone();
        let room = room.reconstruct(|r| r.pictures = Pictures::new(uploaded));
        self.room_modifier().update(&mut connection, &room).await?;

        try_join_all(
            previous
                .iter()
                .map(|picture| self.image_storage().destroy(picture.asset_id())),
        )
        .await?;

        Ok(RoomDto::from(room))
    }
}

impl<T> ReplaceRoomPicturesService for T where
    T: DependOnDatabaseConnection + DependOnRoomQuery + DependOnRoomModifier + DependOnImageStorage
{
}

#[async_trait::async_trait]
pub trait DeleteRoomService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnHostelQuery
    + DependOnRoomQuery
    + DependOnBookingQuery
    + DependOnHostelModifier
    + DependOnRoomModifier
    + DependOnBookingModifier
    + DependOnImageStorage
{
    /// Detaches the room from its hostel, destroys its picture assets,
    /// deletes its bookings and finally the room itself. A hostel that
    /// vanished mid-cascade is treated as already deleted.
    async fn delete_room(&self, dto: DeleteRoomDto) -> error_stack::Result<HostelDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = RoomId::new(dto.id);
        let room = self
            .room_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound("Room")))?;
        let hostel_id = room.hostel().clone();

        if let Some(hostel) = self
            .hostel_query()
            .find_by_id(&mut connection, &hostel_id)
            .await?
        {
            let rooms = hostel
                .rooms()
                .as_ref()
                .iter()
                .filter(|room_id| *room_id != &id)
                .cloned()
                .collect::<Vec<_>>();
            let hostel = hostel.reconstruct(|h| h.rooms = HostelRooms::new(rooms));
            self.hostel_modifier().update(&mut connection, &hostel).await?;
        }

        try_join_all(
            room.pictures()
                .as_ref()
                .iter()
                .map(|picture| self.image_storage().destroy(picture.asset_id())),
        )
        .await?;

        let bookings = self
            .booking_query()
            .find_by_room_id(&mut connection, &id)
            .await?;
        for booking in &bookings {
            self.booking_modifier()
                .delete(&mut connection, booking.id())
                .await?;
        }

        self.room_modifier().delete(&mut connection, &id).await?;

        let hostel = self
            .hostel_query()
            .find_by_id(&mut connection, &hostel_id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound("Hostel")))?;
        let rooms = self
            .room_query()
            .find_by_hostel_id(&mut connection, &hostel_id)
            .await?;
        Ok(HostelDto::from_parts(hostel, rooms))
    }
}

impl<T> DeleteRoomService for T where
    T: DependOnDatabaseConnection
        + DependOnHostelQuery
        + DependOnRoomQuery
        + DependOnBookingQuery
        + DependOnHostelModifier
        + DependOnRoomModifier
        + DependOnBookingModifier
        + DependOnImageStorage
{
}
