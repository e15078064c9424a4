//! Customer identities: registered accounts and guest-provisioned records

use bcrypt::{hash, DEFAULT_COST};
use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Hash a credential for storage.
pub fn hash_password(plain: &str) -> Result<String> {
    hash(plain, DEFAULT_COST)
        .map_err(|e| Error::Internal(format!("Failed to hash credential: {}", e)))
}

/// Account roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Staff,
    Customer,
}

/// A person who can hold bookings.
///
/// Email is the unique key: guest provisioning deduplicates on it, so one
/// email maps to at most one identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub username: String,
    /// Bcrypt hash. Never serialized and never exposed to callers.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub role: Role,
    pub profile_image: Option<String>,
    pub active: bool,
    /// True for identities auto-provisioned by a guest booking.
    pub guest: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Build a registered account with a pre-hashed credential.
    pub fn registered(
        username: String,
        password_hash: String,
        email: String,
        full_name: String,
        phone: Option<String>,
        role: Role,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
            email,
            full_name,
            phone,
            address: None,
            role,
            profile_image: None,
            active: true,
            guest: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Provision a guest identity for a booking made without an account.
    ///
    /// The email doubles as the username. The credential is a random
    /// placeholder, hashed before storage; it is unusable for login
    /// without a separate reset flow.
    pub fn provision_guest(full_name: &str, email: &str, phone: &str) -> Result<Self> {
        let placeholder: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();
        let password_hash = hash_password(&placeholder)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            username: email.to_string(),
            password_hash,
            email: email.to_string(),
            full_name: full_name.to_string(),
            phone: Some(phone.to_string()),
            address: None,
            role: Role::Customer,
            profile_image: None,
            active: true,
            guest: true,
            created_at: now,
            updated_at: now,
        })
    }
}
