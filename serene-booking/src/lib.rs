//! Serene Booking Core - appointment lifecycle and reporting engine
//!
//! This library provides the domain types and decision logic for the Serene
//! spa platform: the booking status state machine, customer identities
//! (registered and guest-provisioned), the catalog entities the booking
//! engine reads, and the pure aggregation pipeline that turns booking and
//! transaction records into report summaries.

pub mod booking;
pub mod catalog;
pub mod customer;
pub mod error;
pub mod report;
pub mod transaction;

// Re-export commonly used types for convenience
pub use error::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
