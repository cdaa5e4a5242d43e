use crate::database::{DatabaseConnection, DependOnDatabaseConnection};
use crate::entity::{Hostel, HostelId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait HostelQuery: 'static + Sync + Send {
    type Connection: Send;
    async fn find_by_id(
        &self,
        con: &mut Self::Connection,
        id: &HostelId,
    ) -> error_stack::Result<Option<Hostel>, KernelError>;
    async fn find_all(
        &self,
        con: &mut Self::Connection,
    ) -> error_stack::Result<Vec<Hostel>, KernelError>;
    /// Store-side half of the availability search: case-insensitive substring
    /// on location (empty matches all) plus a minimum room-reference count.
    async fn find_by_location(
        &self,
        con: &mut Self::Connection,
        keyword: &str,
        min_rooms: i32,
    ) -> error_stack::Result<Vec<Hostel>, KernelError>;
}

pub trait DependOnHostelQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type HostelQuery: HostelQuery<
        Connection = <Self::DatabaseConnection as DatabaseConnection>::Connection,
    >;
    fn hostel_query(&self) -> &Self::HostelQuery;
}
