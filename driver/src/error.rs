use error_stack::Report;

use kernel::KernelError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    SqlX(sqlx::Error),
    #[error(transparent)]
    Migration(sqlx::migrate::MigrateError),
    #[error(transparent)]
    Http(reqwest::Error),
    #[error(transparent)]
    Env(dotenvy::Error),
    #[error("unrecognized stored value: {0}")]
    Decode(String),
}

impl From<sqlx::Error> for DriverError {
    fn from(value: sqlx::Error) -> Self {
        Self::SqlX(value)
    }
}

impl From<sqlx::migrate::MigrateError> for DriverError {
    fn from(value: sqlx::migrate::MigrateError) -> Self {
        Self::Migration(value)
    }
}

impl From<reqwest::Error> for DriverError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

impl From<dotenvy::Error> for DriverError {
    fn from(value: dotenvy::Error) -> Self {
        Self::Env(value)
    }
}

pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T> ConvertError for Result<T, DriverError> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| match &error {
            DriverError::SqlX(sqlx::Error::PoolTimedOut) => {
                Report::from(error).change_context(KernelError::Timeout)
            }
            _ => Report::from(error).change_context(KernelError::Internal),
        })
    }
}
