use crate::database::{DatabaseConnection, DependOnDatabaseConnection};
use crate::entity::{Booking, BookingId, HostelId, RoomId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookingQuery: 'static + Sync + Send {
    type Connection: Send;
    async fn find_by_id(
        &self,
        con: &mut Self::Connection,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError>;
    async fn find_by_hostel_id(
        &self,
        con: &mut Self::Connection,
        hostel_id: &HostelId,
    ) -> error_stack::Result<Vec<Booking>, KernelError>;
    async fn find_by_room_id(
        &self,
        con: &mut Self::Connection,
        room_id: &RoomId,
    ) -> error_stack::Result<Vec<Booking>, KernelError>;
    async fn find_all(
        &self,
        con: &mut Self::Connection,
    ) -> error_stack::Result<Vec<Booking>, KernelError>;
}

pub trait DependOnBookingQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type BookingQuery: BookingQuery<
        Connection = <Self::DatabaseConnection as DatabaseConnection>::Connection,
    >;
    fn booking_query(&self) -> &Self::BookingQuery;
}
