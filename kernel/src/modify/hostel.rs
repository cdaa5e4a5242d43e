use crate::database::{DatabaseConnection, DependOnDatabaseConnection};
use crate::entity::{Hostel, HostelId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait HostelModifier: 'static + Sync + Send {
    type Connection: Send;
    async fn create(
        &self,
        con: &mut Self::Connection,
        hostel: &Hostel,
    ) -> error_stack::Result<(), KernelError>;
    /// Full-record replace; callers build the new state explicitly.
    async fn update(
        &self,
        con: &mut Self::Connection,
        hostel: &Hostel,
    ) -> error_stack::Result<(), KernelError>;
    async fn delete(
        &self,
        con: &mut Self::Connection,
        hostel_id: &HostelId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnHostelModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type HostelModifier: HostelModifier<
        Connection = <Self::DatabaseConnection as DatabaseConnection>::Connection,
    >;
    fn hostel_modifier(&self) -> &Self::HostelModifier;
}
