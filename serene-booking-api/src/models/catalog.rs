//! Catalog storage read by the booking engine
//!
//! Catalog management proper (creation workflows, categories, imagery) is
//! out of scope; this boundary carries what booking validation and
//! projection need, plus removal so dangling references are testable.

use std::collections::HashMap;
use std::sync::RwLock;

use serene_booking::catalog::{Service, Specialist};
use serene_booking::Result;
use uuid::Uuid;

/// Catalog repository trait for service and specialist lookups.
#[async_trait::async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn service(&self, id: Uuid) -> Result<Option<Service>>;

    async fn specialist(&self, id: Uuid) -> Result<Option<Specialist>>;

    async fn add_service(&self, service: &Service) -> Result<()>;

    async fn add_specialist(&self, specialist: &Specialist) -> Result<()>;

    /// Remove a service; returns whether it existed.
    async fn remove_service(&self, id: Uuid) -> Result<bool>;

    /// Remove a specialist; returns whether it existed.
    async fn remove_specialist(&self, id: Uuid) -> Result<bool>;
}

/// In-memory catalog repository implementation
pub struct InMemoryCatalogRepository {
    services: RwLock<HashMap<Uuid, Service>>,
    specialists: RwLock<HashMap<Uuid, Specialist>>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self {
            services: RwLock::new(HashMap::new()),
            specialists: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCatalogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn service(&self, id: Uuid) -> Result<Option<Service>> {
        let services = self.services.read().unwrap();
        Ok(services.get(&id).cloned())
    }

    async fn specialist(&self, id: Uuid) -> Result<Option<Specialist>> {
        let specialists = self.specialists.read().unwrap();
        Ok(specialists.get(&id).cloned())
    }

    async fn add_service(&self, service: &Service) -> Result<()> {
        let mut services = self.services.write().unwrap();
        services.insert(service.id, service.clone());
        Ok(())
    }

    async fn add_specialist(&self, specialist: &Specialist) -> Result<()> {
        let mut specialists = self.specialists.write().unwrap();
        specialists.insert(specialist.id, specialist.clone());
        Ok(())
    }

    async fn remove_service(&self, id: Uuid) -> Result<bool> {
        let mut services = self.services.write().unwrap();
        Ok(services.remove(&id).is_some())
    }

    async fn remove_specialist(&self, id: Uuid) -> Result<bool> {
        let mut specialists = self.specialists.write().unwrap();
        Ok(specialists.remove(&id).is_some())
    }
}
