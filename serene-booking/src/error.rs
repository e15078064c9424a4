//! Error types for the booking core

use thiserror::Error;

/// Custom error type for booking-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// A referenced booking, customer, service, or specialist is absent.
    #[error("{0}")]
    NotFound(String),

    /// An unrecognized status token or malformed input field.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Reserved for availability checking. The in-memory customer store
    /// also raises it on a unique-email violation, which the identity
    /// resolver absorbs by re-reading.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Storage or environment failure. Never shown verbatim to clients.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        Error::NotFound(format!("{} not found with id: {}", entity, id))
    }
}

/// Result type for booking-core operations
pub type Result<T> = std::result::Result<T, Error>;
