//! Application state shared across services

use std::sync::Arc;

use crate::models::{
    BookingRepository, CatalogRepository, CustomerRepository, InMemoryBookingRepository,
    InMemoryCatalogRepository, InMemoryCustomerRepository, InMemoryTransactionRepository,
    TransactionRepository,
};

/// Shared repository handles for the booking services.
///
/// Requests are handled independently and concurrently; nothing here
/// serializes across bookings. The only cross-request invariant is the
/// unique-email constraint inside the customer repository.
pub struct AppState {
    /// Customer repository for identity resolution and guest provisioning
    pub customers: Arc<dyn CustomerRepository>,
    /// Catalog repository for service and specialist lookups
    pub catalog: Arc<dyn CatalogRepository>,
    /// Booking repository for lifecycle storage
    pub bookings: Arc<dyn BookingRepository>,
    /// Transaction repository read by report aggregation
    pub transactions: Arc<dyn TransactionRepository>,
}

impl AppState {
    /// Wire the in-memory repositories.
    pub fn new() -> Self {
        Self {
            customers: Arc::new(InMemoryCustomerRepository::new()),
            catalog: Arc::new(InMemoryCatalogRepository::new()),
            bookings: Arc::new(InMemoryBookingRepository::new()),
            transactions: Arc::new(InMemoryTransactionRepository::new()),
        }
    }

    /// Build state over caller-supplied repository implementations.
    pub fn with_repositories(
        customers: Arc<dyn CustomerRepository>,
        catalog: Arc<dyn CatalogRepository>,
        bookings: Arc<dyn BookingRepository>,
        transactions: Arc<dyn TransactionRepository>,
    ) -> Self {
        Self {
            customers,
            catalog,
            bookings,
            transactions,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
