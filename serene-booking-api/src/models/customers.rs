//! Customer identity storage

use std::collections::HashMap;
use std::sync::RwLock;

use serene_booking::customer::Customer;
use serene_booking::{Error, Result};
use uuid::Uuid;

/// Customer repository trait for identity access.
///
/// Email uniqueness is enforced here, at the storage boundary, not by
/// application-level locking: `create` must reject a duplicate email with
/// `Conflict` so that a concurrent guest provisioning race resolves to a
/// single identity.
#[async_trait::async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Look up an identity by id.
    async fn get(&self, id: Uuid) -> Result<Option<Customer>>;

    /// Look up an identity by email. Case-sensitive exact match, as
    /// persisted.
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>>;

    /// Store a new identity. Fails with `Conflict` when the email is
    /// already registered.
    async fn create(&self, customer: &Customer) -> Result<Customer>;
}

/// In-memory customer repository implementation
pub struct InMemoryCustomerRepository {
    customers: RwLock<HashMap<Uuid, Customer>>,
    email_index: RwLock<HashMap<String, Uuid>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self {
            customers: RwLock::new(HashMap::new()),
            email_index: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn get(&self, id: Uuid) -> Result<Option<Customer>> {
        let customers = self.customers.read().unwrap();
        Ok(customers.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>> {
        let email_index = self.email_index.read().unwrap();
        let customers = self.customers.read().unwrap();
        Ok(email_index.get(email).and_then(|id| customers.get(id)).cloned())
    }

    async fn create(&self, customer: &Customer) -> Result<Customer> {
        // Both maps are updated under the index write lock so two inserts
        // with the same email cannot interleave.
        let mut email_index = self.email_index.write().unwrap();
        if email_index.contains_key(&customer.email) {
            return Err(Error::Conflict(format!(
                "Email already registered: {}",
                customer.email
            )));
        }
        email_index.insert(customer.email.clone(), customer.id);

        let mut customers = self.customers.write().unwrap();
        customers.insert(customer.id, customer.clone());
        Ok(customer.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serene_booking::customer::Role;

    fn registered(email: &str) -> Customer {
        Customer::registered(
            email.to_string(),
            "$2b$12$test".to_string(),
            email.to_string(),
            "Regular User".to_string(),
            None,
            Role::Customer,
        )
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let repo = InMemoryCustomerRepository::new();
        repo.create(&registered("user@example.com")).await.unwrap();

        let err = repo.create(&registered("user@example.com")).await.unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
    }

    #[tokio::test]
    async fn email_lookup_is_case_sensitive() {
        let repo = InMemoryCustomerRepository::new();
        repo.create(&registered("user@example.com")).await.unwrap();

        assert!(repo.find_by_email("user@example.com").await.unwrap().is_some());
        assert!(repo.find_by_email("User@Example.com").await.unwrap().is_none());
    }
}
