//! Identity resolver: canonical customer identities for booking flows

use std::sync::Arc;

use serene_booking::customer::Customer;
use serene_booking::{Error, Result};
use tracing::{debug, info};
use uuid::Uuid;

use crate::state::AppState;

/// Resolves customer identifiers and provisions guest identities.
pub struct IdentityService {
    state: Arc<AppState>,
}

impl IdentityService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Resolve an authenticated customer's identity.
    pub async fn resolve(&self, customer_id: Uuid) -> Result<Customer> {
        self.state
            .customers
            .get(customer_id)
            .await?
            .ok_or_else(|| Error::not_found("Customer", customer_id))
    }

    /// Resolve a guest's identity by email, provisioning one if absent.
    ///
    /// An existing identity is returned unchanged: guest-supplied name and
    /// phone never overwrite the stored record. Provisioning is idempotent
    /// under concurrent identical-email requests because the storage-level
    /// unique-email constraint turns the losing insert into a re-read.
    pub async fn resolve_or_provision(
        &self,
        full_name: &str,
        email: &str,
        phone: &str,
    ) -> Result<Customer> {
        if let Some(existing) = self.state.customers.find_by_email(email).await? {
            debug!(customer_id = %existing.id, "guest email already resolves to an identity");
            return Ok(existing);
        }

        let guest = Customer::provision_guest(full_name, email, phone)?;
        match self.state.customers.create(&guest).await {
            Ok(created) => {
                info!(customer_id = %created.id, "provisioned guest identity");
                Ok(created)
            }
            Err(Error::Conflict(_)) => {
                // Lost the provisioning race; the identity exists now.
                self.state
                    .customers
                    .find_by_email(email)
                    .await?
                    .ok_or_else(|| {
                        Error::Internal(format!(
                            "Identity for {} vanished after unique-email conflict",
                            email
                        ))
                    })
            }
            Err(e) => Err(e),
        }
    }
}
