//! In-memory store and gateway doubles for exercising the services without
//! Postgres or a CDN.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;

use kernel::interface::database::DatabaseConnection;
use kernel::interface::image::{DependOnImageStorage, DestructUploadImage, ImageStorage, UploadImage};
use kernel::interface::query::{
    BookingQuery, DependOnBookingQuery, DependOnHostelQuery, DependOnRoomQuery, HostelQuery,
    RoomQuery,
};
use kernel::interface::update::{
    BookingModifier, DependOnBookingModifier, DependOnHostelModifier, DependOnRoomModifier,
    HostelModifier, RoomModifier,
};
use kernel::prelude::entity::{
    AssetId, Booking, BookingDates, BookingId, BookingStatus, Hostel, HostelDescription,
    HostelDistance, HostelId, HostelLocation, HostelName, HostelRooms, PaidAt, Phone, Picture,
    Pictures, PricePerDay, Room, RoomId, RoomName, RoomNumber, RoomType, Specification,
    TotalPricePerDay, UnavailableDates, UserId,
};
use kernel::KernelError;
use time::macros::{date, datetime};
use time::Date;

#[derive(Debug, Default)]
pub struct StoreInner {
    pub hostels: HashMap<Uuid, Hostel>,
    pub rooms: HashMap<Uuid, Room>,
    pub bookings: HashMap<Uuid, Booking>,
}

#[derive(Clone, Default)]
pub struct MemoryDatabase(Arc<Mutex<StoreInner>>);

impl MemoryDatabase {
    pub fn state(&self) -> MutexGuard<'_, StoreInner> {
        self.0.lock().expect("store lock poisoned")
    }
}

pub struct MemoryConnection(Arc<Mutex<StoreInner>>);

impl MemoryConnection {
    fn state(&self) -> MutexGuard<'_, StoreInner> {
        self.0.lock().expect("store lock poisoned")
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for MemoryDatabase {
    type Connection = MemoryConnection;
    async fn transact(&self) -> error_stack::Result<MemoryConnection, KernelError> {
        Ok(MemoryConnection(Arc::clone(&self.0)))
    }
}

pub struct MemoryHostelRepository;

#[async_trait::async_trait]
impl HostelQuery for MemoryHostelRepository {
    type Connection = MemoryConnection;

    async fn find_by_id(
        &self,
        con: &mut MemoryConnection,
        id: &HostelId,
    ) -> error_stack::Result<Option<Hostel>, KernelError> {
        Ok(con.state().hostels.get(id.as_ref()).cloned())
    }

    async fn find_all(
        &self,
        con: &mut MemoryConnection,
    ) -> error_stack::Result<Vec<Hostel>, KernelError> {
        Ok(con.state().hostels.values().cloned().collect())
    }

    async fn find_by_location(
        &self,
        con: &mut MemoryConnection,
        keyword: &str,
        min_rooms: i32,
    ) -> error_stack::Result<Vec<Hostel>, KernelError> {
        let keyword = keyword.to_lowercase();
        Ok(con
            .state()
            .hostels
            .values()
            .filter(|hostel| hostel.location().as_ref().to_lowercase().contains(&keyword))
            .filter(|hostel| hostel.rooms().len() >= min_rooms as usize)
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl HostelModifier for MemoryHostelRepository {
    type Connection = MemoryConnection;

    async fn create(
        &self,
        con: &mut MemoryConnection,
        hostel: &Hostel,
    ) -> error_stack::Result<(), KernelError> {
        con.state()
            .hostels
            .insert(*hostel.id().as_ref(), hostel.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut MemoryConnection,
        hostel: &Hostel,
    ) -> error_stack::Result<(), KernelError> {
        con.state()
            .hostels
            .insert(*hostel.id().as_ref(), hostel.clone());
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut MemoryConnection,
        hostel_id: &HostelId,
    ) -> error_stack::Result<(), KernelError> {
        con.state().hostels.remove(hostel_id.as_ref());
        Ok(())
    }
}

pub struct MemoryRoomRepository;

#[async_trait::async_trait]
impl RoomQuery for MemoryRoomRepository {
    type Connection = MemoryConnection;

    async fn find_by_id(
        &self,
        con: &mut MemoryConnection,
        id: &RoomId,
    ) -> error_stack::Result<Option<Room>, KernelError> {
        Ok(con.state().rooms.get(id.as_ref()).cloned())
    }

    async fn find_by_hostel_id(
        &self,
        con: &mut MemoryConnection,
        hostel_id: &HostelId,
    ) -> error_stack::Result<Vec<Room>, KernelError> {
        Ok(con
            .state()
            .rooms
            .values()
            .filter(|room| room.hostel() == hostel_id)
            .cloned()
            .collect())
    }

    async fn find_by_number(
        &self,
        con: &mut MemoryConnection,
        hostel_id: &HostelId,
        number: &RoomNumber,
    ) -> error_stack::Result<Option<Room>, KernelError> {
        Ok(con
            .state()
            .rooms
            .values()
            .find(|room| room.hostel() == hostel_id && room.number() == number)
            .cloned())
    }
}

#[async_trait::async_trait]
impl RoomModifier for MemoryRoomRepository {
    type Connection = MemoryConnection;

    async fn create(
        &self,
        con: &mut MemoryConnection,
        room: &Room,
    ) -> error_stack::Result<(), KernelError> {
        con.state().rooms.insert(*room.id().as_ref(), room.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut MemoryConnection,
        room: &Room,
    ) -> error_stack::Result<(), KernelError> {
        con.state().rooms.insert(*room.id().as_ref(), room.clone());
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut MemoryConnection,
        room_id: &RoomId,
    ) -> error_stack::Result<(), KernelError> {
        con.state().rooms.remove(room_id.as_ref());
        Ok(())
    }
}

pub struct MemoryBookingRepository;

#[async_trait::async_trait]
impl BookingQuery for MemoryBookingRepository {
    type Connection = MemoryConnection;

    async fn find_by_id(
        &self,
        con: &mut MemoryConnection,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        Ok(con.state().bookings.get(id.as_ref()).cloned())
    }

    async fn find_by_hostel_id(
        &self,
        con: &mut MemoryConnection,
        hostel_id: &HostelId,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        Ok(con
            .state()
            .bookings
            .values()
            .filter(|booking| booking.hostel() == hostel_id)
            .cloned()
            .collect())
    }

    async fn find_by_room_id(
        &self,
        con: &mut MemoryConnection,
        room_id: &RoomId,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        Ok(con
            .state()
            .bookings
            .values()
            .filter(|booking| booking.room() == room_id)
            .cloned()
            .collect())
    }

    async fn find_all(
        &self,
        con: &mut MemoryConnection,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        Ok(con.state().bookings.values().cloned().collect())
    }
}

#[async_trait::async_trait]
impl BookingModifier for MemoryBookingRepository {
    type Connection = MemoryConnection;

    async fn create(
        &self,
        con: &mut MemoryConnection,
        booking: &Booking,
    ) -> error_stack::Result<(), KernelError> {
        con.state()
            .bookings
            .insert(*booking.id().as_ref(), booking.clone());
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut MemoryConnection,
        booking_id: &BookingId,
    ) -> error_stack::Result<(), KernelError> {
        con.state().bookings.remove(booking_id.as_ref());
        Ok(())
    }
}

/// Records every gateway call so tests can assert cascade and swap order.
#[derive(Clone, Default)]
pub struct MemoryImageStorage {
    log: Arc<Mutex<Vec<String>>>,
}

impl MemoryImageStorage {
    pub fn calls(&self) -> Vec<String> {
        self.log.lock().expect("log lock poisoned").clone()
    }
}

#[async_trait::async_trait]
impl ImageStorage for MemoryImageStorage {
    async fn upload(
        &self,
        image: UploadImage,
        folder: &str,
    ) -> error_stack::Result<Picture, KernelError> {
        let DestructUploadImage { file_name, .. } = image.into_destruct();
        let asset = format!("{folder}/{file_name}");
        self.log
            .lock()
            .expect("log lock poisoned")
            .push(format!("upload:{asset}"));
        Ok(Picture::new(
            AssetId::new(asset.clone()),
            format!("https://cdn.invalid/{asset}"),
        ))
    }

    async fn destroy(&self, asset_id: &AssetId) -> error_stack::Result<(), KernelError> {
        self.log
            .lock()
            .expect("log lock poisoned")
            .push(format!("destroy:{}", asset_id.as_ref()));
        Ok(())
    }
}

/// Assembles the doubles into a module the service traits blanket onto.
#[derive(Clone, Default)]
pub struct TestModule {
    database: MemoryDatabase,
    images: MemoryImageStorage,
}

impl TestModule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn database(&self) -> &MemoryDatabase {
        &self.database
    }

    pub fn images(&self) -> &MemoryImageStorage {
        &self.images
    }
}

impl kernel::interface::database::DependOnDatabaseConnection for TestModule {
    type DatabaseConnection = MemoryDatabase;
    fn database_connection(&self) -> &MemoryDatabase {
        &self.database
    }
}

impl DependOnHostelQuery for TestModule {
    type HostelQuery = MemoryHostelRepository;
    fn hostel_query(&self) -> &MemoryHostelRepository {
        &MemoryHostelRepository
    }
}

impl DependOnHostelModifier for TestModule {
    type HostelModifier = MemoryHostelRepository;
    fn hostel_modifier(&self) -> &MemoryHostelRepository {
        &MemoryHostelRepository
    }
}

impl DependOnRoomQuery for TestModule {
    type RoomQuery = MemoryRoomRepository;
    fn room_query(&self) -> &MemoryRoomRepository {
        &MemoryRoomRepository
    }
}

impl DependOnRoomModifier for TestModule {
    type RoomModifier = MemoryRoomRepository;
    fn room_modifier(&self) -> &MemoryRoomRepository {
        &MemoryRoomRepository
    }
}

impl DependOnBookingQuery for TestModule {
    type BookingQuery = MemoryBookingRepository;
    fn booking_query(&self) -> &MemoryBookingRepository {
        &MemoryBookingRepository
    }
}

impl DependOnBookingModifier for TestModule {
    type BookingModifier = MemoryBookingRepository;
    fn booking_modifier(&self) -> &MemoryBookingRepository {
        &MemoryBookingRepository
    }
}

impl DependOnImageStorage for TestModule {
    type ImageStorage = MemoryImageStorage;
    fn image_storage(&self) -> &MemoryImageStorage {
        &self.images
    }
}

pub fn sample_hostel(id: Uuid, location: &str, rooms: Vec<Uuid>, pictures: Vec<Picture>) -> Hostel {
    Hostel::new(
        HostelId::new(id),
        HostelName::new("Backpackers Rest"),
        HostelLocation::new(location),
        HostelDistance::new(1.2),
        Specification::new(vec!["wifi".to_string()]),
        HostelDescription::new("dorms and doubles near the station"),
        Pictures::new(pictures),
        HostelRooms::new(rooms.into_iter().map(RoomId::new).collect::<Vec<_>>()),
    )
}

pub fn sample_room(
    id: Uuid,
    hostel: Uuid,
    number: i32,
    room_type: RoomType,
    not_available: Vec<Date>,
    pictures: Vec<Picture>,
) -> Room {
    Room::new(
        RoomId::new(id),
        RoomNumber::new(number),
        RoomName::new(format!("room {number}")),
        room_type,
        PricePerDay::new(700),
        Specification::new(vec!["fan".to_string()]),
        UnavailableDates::new(not_available),
        Pictures::new(pictures),
        HostelId::new(hostel),
    )
}

pub fn sample_booking(id: Uuid, hostel: Uuid, room: Uuid) -> Booking {
    Booking::new(
        BookingId::new(id),
        UserId::new(Uuid::new_v4()),
        HostelId::new(hostel),
        RoomId::new(room),
        BookingDates::new(vec![date!(2024 - 03 - 01)]),
        TotalPricePerDay::new(700),
        Phone::new("9876543210"),
        PaidAt::new(datetime!(2024-02-01 0:00 UTC)),
        None,
        BookingStatus::default(),
    )
}

pub fn picture(asset: &str) -> Picture {
    Picture::new(AssetId::new(asset), format!("https://cdn.invalid/{asset}"))
}
