//! Booking storage

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::NaiveDate;
use serene_booking::booking::{Booking, BookingStatus};
use serene_booking::{Error, Result};
use uuid::Uuid;

/// Booking repository trait for lifecycle storage.
///
/// Bookings are never hard-deleted; cancellation is a terminal status, not
/// a removal, so there is no delete operation here.
#[async_trait::async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: &Booking) -> Result<Booking>;

    async fn get(&self, id: Uuid) -> Result<Option<Booking>>;

    /// Replace a stored booking. Fails with `NotFound` when absent.
    async fn update(&self, booking: &Booking) -> Result<Booking>;

    async fn list_all(&self) -> Result<Vec<Booking>>;

    async fn find_by_customer(&self, customer_id: Uuid) -> Result<Vec<Booking>>;

    /// Bookings whose date falls within the inclusive range.
    async fn find_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Booking>>;

    async fn find_by_status(&self, status: BookingStatus) -> Result<Vec<Booking>>;
}

/// In-memory booking repository implementation
pub struct InMemoryBookingRepository {
    bookings: RwLock<HashMap<Uuid, Booking>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self {
            bookings: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryBookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn create(&self, booking: &Booking) -> Result<Booking> {
        let mut bookings = self.bookings.write().unwrap();
        bookings.insert(booking.id, booking.clone());
        Ok(booking.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Booking>> {
        let bookings = self.bookings.read().unwrap();
        Ok(bookings.get(&id).cloned())
    }

    async fn update(&self, booking: &Booking) -> Result<Booking> {
        let mut bookings = self.bookings.write().unwrap();
        if !bookings.contains_key(&booking.id) {
            return Err(Error::not_found("Booking", booking.id));
        }
        bookings.insert(booking.id, booking.clone());
        Ok(booking.clone())
    }

    async fn list_all(&self) -> Result<Vec<Booking>> {
        let bookings = self.bookings.read().unwrap();
        Ok(bookings.values().cloned().collect())
    }

    async fn find_by_customer(&self, customer_id: Uuid) -> Result<Vec<Booking>> {
        let bookings = self.bookings.read().unwrap();
        Ok(bookings
            .values()
            .filter(|b| b.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn find_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Booking>> {
        let bookings = self.bookings.read().unwrap();
        Ok(bookings
            .values()
            .filter(|b| b.date >= start && b.date <= end)
            .cloned()
            .collect())
    }

    async fn find_by_status(&self, status: BookingStatus) -> Result<Vec<Booking>> {
        let bookings = self.bookings.read().unwrap();
        Ok(bookings
            .values()
            .filter(|b| b.status == status)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn booking_on(date: NaiveDate) -> Booking {
        Booking::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            date,
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            None,
        )
    }

    #[tokio::test]
    async fn date_range_bounds_are_inclusive() {
        let repo = InMemoryBookingRepository::new();
        let start = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 5, 3).unwrap();

        repo.create(&booking_on(start)).await.unwrap();
        repo.create(&booking_on(end)).await.unwrap();
        repo.create(&booking_on(NaiveDate::from_ymd_opt(2026, 5, 4).unwrap()))
            .await
            .unwrap();

        let in_range = repo.find_by_date_range(start, end).await.unwrap();
        assert_eq!(in_range.len(), 2);
    }

    #[tokio::test]
    async fn update_of_missing_booking_is_not_found() {
        let repo = InMemoryBookingRepository::new();
        let stray = booking_on(NaiveDate::from_ymd_opt(2026, 5, 1).unwrap());
        let err = repo.update(&stray).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn inverted_range_is_simply_empty() {
        let repo = InMemoryBookingRepository::new();
        let day = NaiveDate::from_ymd_opt(2026, 5, 2).unwrap();
        repo.create(&booking_on(day)).await.unwrap();

        let end_before_start = repo
            .find_by_date_range(
                NaiveDate::from_ymd_opt(2026, 5, 3).unwrap(),
                NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            )
            .await
            .unwrap();
        assert!(end_before_start.is_empty());
    }
}
