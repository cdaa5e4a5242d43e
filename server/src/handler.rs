use error_stack::Report;
use std::ops::Deref;
use std::sync::Arc;
use vodca::References;

use driver::database::{
    PostgresBookingRepository, PostgresDatabase, PostgresHostelRepository, PostgresRoomRepository,
};
use driver::image::{CloudinaryConfig, CloudinaryImageStorage};
use kernel::interface::database::DependOnDatabaseConnection;
use kernel::interface::image::DependOnImageStorage;
use kernel::interface::query::{DependOnBookingQuery, DependOnHostelQuery, DependOnRoomQuery};
use kernel::interface::update::{
    DependOnBookingModifier, DependOnHostelModifier, DependOnRoomModifier,
};
use kernel::KernelError;

use crate::chat::ChatHub;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init().await?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    pgpool: PostgresDatabase,
    images: CloudinaryImageStorage,
    chat: ChatHub,
    admin_token: String,
}

impl Handler {
    pub async fn init() -> error_stack::Result<Self, KernelError> {
        let pgpool = PostgresDatabase::from_env().await?;
        let config = CloudinaryConfig::from_env()
            .map_err(|error| Report::from(error).change_context(KernelError::Internal))?;
        let images = CloudinaryImageStorage::new(config);
        let admin_token = dotenvy::var("ADMIN_TOKEN")
            .map_err(|error| Report::from(error).change_context(KernelError::Internal))?;

        Ok(Self {
            pgpool,
            images,
            chat: ChatHub::default(),
            admin_token,
        })
    }
}

impl DependOnDatabaseConnection for Handler {
    type DatabaseConnection = PostgresDatabase;
    fn database_connection(&self) -> &PostgresDatabase {
        &self.pgpool
    }
}

impl DependOnHostelQuery for Handler {
    type HostelQuery = PostgresHostelRepository;
    fn hostel_query(&self) -> &PostgresHostelRepository {
        &PostgresHostelRepository
    }
}

impl DependOnHostelModifier for Handler {
    type HostelModifier = PostgresHostelRepository;
    fn hostel_modifier(&self) -> &PostgresHostelRepository {
        &PostgresHostelRepository
    }
}

impl DependOnRoomQuery for Handler {
    type RoomQuery = PostgresRoomRepository;
    fn room_query(&self) -> &PostgresRoomRepository {
        &PostgresRoomRepository
    }
}

impl DependOnRoomModifier for Handler {
    type RoomModifier = PostgresRoomRepository;
    fn room_modifier(&self) -> &PostgresRoomRepository {
        &PostgresRoomRepository
    }
}

impl DependOnBookingQuery for Handler {
    type BookingQuery = PostgresBookingRepository;
    fn booking_query(&self) -> &PostgresBookingRepository {
        &PostgresBookingRepository
    }
}

impl DependOnBookingModifier for Handler {
    type BookingModifier = PostgresBookingRepository;
    fn booking_modifier(&self) -> &PostgresBookingRepository {
        &PostgresBookingRepository
    }
}

impl DependOnImageStorage for Handler {
    type ImageStorage = CloudinaryImageStorage;
    fn image_storage(&self) -> &CloudinaryImageStorage {
        &self.images
    }
}
