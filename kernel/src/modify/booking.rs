use crate::database::{DatabaseConnection, DependOnDatabaseConnection};
use crate::entity::{Booking, BookingId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookingModifier: 'static + Sync + Send {
    type Connection: Send;
    async fn create(
        &self,
        con: &mut Self::Connection,
        booking: &Booking,
    ) -> error_stack::Result<(), KernelError>;
    async fn delete(
        &self,
        con: &mut Self::Connection,
        booking_id: &BookingId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookingModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type BookingModifier: BookingModifier<
        Connection = <Self::DatabaseConnection as DatabaseConnection>::Connection,
    >;
    fn booking_modifier(&self) -> &Self::BookingModifier;
}
