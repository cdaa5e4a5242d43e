use crate::database::{DatabaseConnection, DependOnDatabaseConnection};
use crate::entity::{HostelId, Room, RoomId, RoomNumber};
use crate::KernelError;

#[async_trait::async_trait]
pub trait RoomQuery: 'static + Sync + Send {
    type Connection: Send;
    async fn find_by_id(
        &self,
        con: &mut Self::Connection,
        id: &RoomId,
    ) -> error_stack::Result<Option<Room>, KernelError>;
    async fn find_by_hostel_id(
        &self,
        con: &mut Self::Connection,
        hostel_id: &HostelId,
    ) -> error_stack::Result<Vec<Room>, KernelError>;
    /// Duplicate-number probe used before insert.
    async fn find_by_number(
        &self,
        con: &mut Self::Connection,
        hostel_id: &HostelId,
        number: &RoomNumber,
    ) -> error_stack::Result<Option<Room>, KernelError>;
}

pub trait DependOnRoomQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type RoomQuery: RoomQuery<
        Connection = <Self::DatabaseConnection as DatabaseConnection>::Connection,
    >;
    fn room_query(&self) -> &Self::RoomQuery;
}
