use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    Validation(String),
    NotFound(&'static str),
    DuplicateRoomNumber,
    ImmutableRoomNumber,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation(message) => write!(f, "{message}"),
            KernelError::NotFound(entity) => write!(f, "{entity} not found"),
            KernelError::DuplicateRoomNumber => write!(f, "Duplicate room number"),
            KernelError::ImmutableRoomNumber => write!(f, "Room number can't be changed"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal server error"),
        }
    }
}

impl Context for KernelError {}
