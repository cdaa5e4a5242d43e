use error_stack::Report;
use sqlx::pool::PoolConnection;
use sqlx::{Error, Pool, Postgres};

use kernel::interface::database::DatabaseConnection;
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::{booking::*, hostel::*, room::*};

mod booking;
mod hostel;
mod room;

static POSTGRES_URL: &str = "POSTGRES_URL";

pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    /// Connects and brings the schema up to date.
    pub async fn new(url: &str) -> error_stack::Result<Self, KernelError> {
        let pool = Pool::connect(url).await.convert_error()?;
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|error| Report::from(error).change_context(KernelError::Internal))?;
        tracing::info!("database schema up to date");
        Ok(Self { pool })
    }

    pub async fn from_env() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL)
            .map_err(|error| Report::from(error).change_context(KernelError::Internal))?;
        Self::new(&url).await
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for PostgresDatabase {
    type Connection = PoolConnection<Postgres>;
    async fn transact(&self) -> error_stack::Result<PoolConnection<Postgres>, KernelError> {
        let con = self.pool.acquire().await.convert_error()?;
        Ok(con)
    }
}

impl<T> ConvertError for Result<T, Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| match error {
            Error::PoolTimedOut => Report::from(error).change_context(KernelError::Timeout),
            _ => Report::from(error).change_context(KernelError::Internal),
        })
    }
}
