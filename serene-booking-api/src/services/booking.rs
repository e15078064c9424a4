//! Booking lifecycle manager

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serene_booking::booking::{Booking, BookingStatus, BookingView};
use serene_booking::{Error, Result};
use tracing::info;
use uuid::Uuid;

use super::identity::IdentityService;
use super::{project_booking, project_bookings};
use crate::state::AppState;

/// Booking creation request for an authenticated customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub customer_id: Uuid,
    pub service_id: Uuid,
    pub specialist_id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(default)]
    pub note: Option<String>,
    /// Ignored. New bookings always start pending, whatever the client
    /// asks for.
    #[serde(default)]
    pub status: Option<String>,
}

/// Booking creation request for a guest without an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestBookingRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub service_id: Uuid,
    pub specialist_id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(default)]
    pub note: Option<String>,
}

/// Owns booking creation, status changes, and the read-time projections.
pub struct BookingService {
    state: Arc<AppState>,
    identity: IdentityService,
}

impl BookingService {
    pub fn new(state: Arc<AppState>) -> Self {
        let identity = IdentityService::new(state.clone());
        Self { state, identity }
    }

    /// Create a booking for a known customer.
    ///
    /// All three references are resolved up front, so the booking is either
    /// fully created or not created at all. No availability check is made
    /// against the specialist's schedule; their free-text availability
    /// windows are carried as data only.
    pub async fn create(&self, req: CreateBookingRequest) -> Result<BookingView> {
        let customer = self.identity.resolve(req.customer_id).await?;
        let service = self
            .state
            .catalog
            .service(req.service_id)
            .await?
            .ok_or_else(|| Error::not_found("Service", req.service_id))?;
        let specialist = self
            .state
            .catalog
            .specialist(req.specialist_id)
            .await?
            .ok_or_else(|| Error::not_found("Specialist", req.specialist_id))?;

        let booking = Booking::new(
            customer.id,
            service.id,
            specialist.id,
            req.date,
            req.time,
            req.note,
        );
        let created = self.state.bookings.create(&booking).await?;
        info!(booking_id = %created.id, customer_id = %customer.id, "created booking");
        project_booking(&self.state, created).await
    }

    /// Create a booking for a guest, provisioning their identity first.
    pub async fn create_guest(&self, req: GuestBookingRequest) -> Result<BookingView> {
        let customer = self
            .identity
            .resolve_or_provision(&req.customer_name, &req.customer_email, &req.customer_phone)
            .await?;

        self.create(CreateBookingRequest {
            customer_id: customer.id,
            service_id: req.service_id,
            specialist_id: req.specialist_id,
            date: req.date,
            time: req.time,
            note: req.note,
            status: None,
        })
        .await
    }

    pub async fn get(&self, id: Uuid) -> Result<BookingView> {
        let booking = self
            .state
            .bookings
            .get(id)
            .await?
            .ok_or_else(|| Error::not_found("Booking", id))?;
        project_booking(&self.state, booking).await
    }

    pub async fn list_all(&self) -> Result<Vec<BookingView>> {
        let bookings = self.state.bookings.list_all().await?;
        project_bookings(&self.state, bookings).await
    }

    /// Bookings held by one customer. The customer must exist.
    pub async fn list_by_customer(&self, customer_id: Uuid) -> Result<Vec<BookingView>> {
        self.identity.resolve(customer_id).await?;
        let bookings = self.state.bookings.find_by_customer(customer_id).await?;
        project_bookings(&self.state, bookings).await
    }

    pub async fn list_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<BookingView>> {
        let bookings = self.state.bookings.find_by_date_range(start, end).await?;
        project_bookings(&self.state, bookings).await
    }

    /// Bookings holding one status. The token is matched case-insensitively.
    pub async fn list_by_status(&self, status: &str) -> Result<Vec<BookingView>> {
        let status: BookingStatus = status.parse()?;
        let bookings = self.state.bookings.find_by_status(status).await?;
        project_bookings(&self.state, bookings).await
    }

    /// Apply a status token to a booking.
    ///
    /// The token is parsed before anything is touched, so an unrecognized
    /// token leaves the booking unchanged. Any recognized status may be
    /// applied from any current status; `cancel` is the only one-way
    /// operation. Two concurrent updates resolve last-write-wins.
    pub async fn set_status(&self, id: Uuid, status: &str) -> Result<BookingView> {
        let mut booking = self
            .state
            .bookings
            .get(id)
            .await?
            .ok_or_else(|| Error::not_found("Booking", id))?;
        let target: BookingStatus = status.parse()?;

        booking.transition(target);
        let updated = self.state.bookings.update(&booking).await?;
        info!(booking_id = %id, status = %target, "updated booking status");
        project_booking(&self.state, updated).await
    }

    /// Cancel a booking unconditionally.
    ///
    /// Idempotent: cancelling an already-cancelled (or even completed)
    /// booking lands on the same terminal status without error.
    pub async fn cancel(&self, id: Uuid) -> Result<BookingView> {
        let mut booking = self
            .state
            .bookings
            .get(id)
            .await?
            .ok_or_else(|| Error::not_found("Booking", id))?;

        booking.transition(BookingStatus::Cancelled);
        let updated = self.state.bookings.update(&booking).await?;
        info!(booking_id = %id, "cancelled booking");
        project_booking(&self.state, updated).await
    }
}
