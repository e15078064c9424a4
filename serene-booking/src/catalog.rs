//! Catalog entities the booking engine reads
//!
//! Catalog management lives elsewhere; the booking engine only resolves
//! services and specialists by id and copies their display fields into
//! booking views.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable service with its list price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    /// Duration in minutes.
    pub duration: Option<u32>,
    pub active: bool,
}

impl Service {
    pub fn new(name: &str, price: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            price,
            duration: None,
            active: true,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration = Some(minutes);
        self
    }
}

/// A staff member who can be booked.
///
/// Availability is carried as free-text windows ("Monday: 9:00-17:00") and
/// is not consulted when bookings are created; slot-conflict checking is a
/// known gap in the lifecycle manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specialist {
    pub id: Uuid,
    pub display_name: String,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub rating: Option<f64>,
    pub availability: Vec<String>,
}

impl Specialist {
    pub fn new(display_name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name: display_name.to_string(),
            title: None,
            bio: None,
            rating: None,
            availability: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_availability(mut self, windows: Vec<String>) -> Self {
        self.availability = windows;
        self
    }
}
