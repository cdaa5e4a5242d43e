use crate::database::{DatabaseConnection, DependOnDatabaseConnection};
use crate::entity::{Room, RoomId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait RoomModifier: 'static + Sync + Send {
    type Connection: Send;
    async fn create(
        &self,
        con: &mut Self::Connection,
        room: &Room,
    ) -> error_stack::Result<(), KernelError>;
    async fn update(
        &self,
        con: &mut Self::Connection,
        room: &Room,
    ) -> error_stack::Result<(), KernelError>;
    async fn delete(
        &self,
        con: &mut Self::Connection,
        room_id: &RoomId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnRoomModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type RoomModifier: RoomModifier<
        Connection = <Self::DatabaseConnection as DatabaseConnection>::Connection,
    >;
    fn room_modifier(&self) -> &Self::RoomModifier;
}
