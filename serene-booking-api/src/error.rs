//! Error mapping for the service surface

use serene_booking::Error;

/// Client-facing error categories. NotFound, InvalidArgument, and Conflict
/// carry the offending detail; Internal is always opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NotFound,
    InvalidArgument,
    Conflict,
    Internal,
}

/// Map a core error to its client-facing category.
pub fn error_code(error: &Error) -> ErrorCode {
    match error {
        Error::NotFound(_) => ErrorCode::NotFound,
        Error::InvalidArgument(_) => ErrorCode::InvalidArgument,
        Error::Conflict(_) => ErrorCode::Conflict,
        Error::Internal(_) => ErrorCode::Internal,
    }
}

/// Message safe to surface to a client. Internal failures are reduced to a
/// generic message so storage detail never leaks.
pub fn client_message(error: &Error) -> String {
    match error {
        Error::Internal(_) => "Internal server error".to_string(),
        other => other.to_string(),
    }
}
