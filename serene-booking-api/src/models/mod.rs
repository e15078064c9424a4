//! Repository traits and in-memory implementations
//!
//! These traits are the storage boundary: the services only ever see them,
//! so a database-backed implementation can replace the in-memory ones
//! without touching the lifecycle or reporting logic.

pub mod bookings;
pub mod catalog;
pub mod customers;
pub mod transactions;

pub use bookings::{BookingRepository, InMemoryBookingRepository};
pub use catalog::{CatalogRepository, InMemoryCatalogRepository};
pub use customers::{CustomerRepository, InMemoryCustomerRepository};
pub use transactions::{InMemoryTransactionRepository, TransactionRepository};
