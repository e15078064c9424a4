//! Booking entity and status state machine

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Uppercase wire token for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Completed => "COMPLETED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }

    /// Terminal statuses admit no further modeled transition.
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }

    /// The modeled one-way transition table: Pending -> Confirmed ->
    /// Completed, with cancellation possible from any non-terminal state.
    ///
    /// Status updates through the lifecycle manager are unrestricted and do
    /// not consult this table; `cancel` is the only enforced one-way
    /// operation. The table is exposed so callers that want strict
    /// transitions can opt in.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        match (self, next) {
            (BookingStatus::Pending, BookingStatus::Confirmed) => true,
            (BookingStatus::Pending, BookingStatus::Cancelled) => true,
            (BookingStatus::Confirmed, BookingStatus::Completed) => true,
            (BookingStatus::Confirmed, BookingStatus::Cancelled) => true,
            _ => false,
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = Error;

    /// Status tokens are accepted case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PENDING" => Ok(BookingStatus::Pending),
            "CONFIRMED" => Ok(BookingStatus::Confirmed),
            "COMPLETED" => Ok(BookingStatus::Completed),
            "CANCELLED" => Ok(BookingStatus::Cancelled),
            _ => Err(Error::InvalidArgument(format!("Invalid status: {}", s))),
        }
    }
}

/// One scheduled appointment linking a customer, specialist, and service
/// at a date/time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub specialist_id: Uuid,
    pub service_id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: BookingStatus,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// New bookings always start out pending.
    pub fn new(
        customer_id: Uuid,
        service_id: Uuid,
        specialist_id: Uuid,
        date: NaiveDate,
        time: NaiveTime,
        note: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            customer_id,
            specialist_id,
            service_id,
            date,
            time,
            status: BookingStatus::Pending,
            note,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a status and touch the update timestamp. `created_at` is
    /// immutable after construction.
    pub fn transition(&mut self, status: BookingStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

/// Flattened read-time projection of a booking.
///
/// Customer, service, and specialist fields are resolved when the view is
/// built, never cached. A reference that no longer resolves leaves the
/// denormalized fields empty instead of failing the listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingView {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub service_id: Uuid,
    pub service_name: Option<String>,
    pub service_price: Option<Decimal>,
    pub specialist_id: Uuid,
    pub specialist_name: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: BookingStatus,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
