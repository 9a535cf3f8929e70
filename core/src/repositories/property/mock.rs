//! In-memory implementation of PropertyRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::property::Property;
use crate::errors::DomainError;

use super::trait_::PropertyRepository;

/// Mock property repository for testing
pub struct MockPropertyRepository {
    properties: Arc<RwLock<HashMap<Uuid, Property>>>,
}

impl MockPropertyRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            properties: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the repository with a property
    pub async fn insert(&self, property: Property) {
        self.properties.write().await.insert(property.id, property);
    }
}

impl Default for MockPropertyRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PropertyRepository for MockPropertyRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, DomainError> {
        let properties = self.properties.read().await;
        Ok(properties.get(&id).cloned())
    }

    async fn list_available(&self) -> Result<Vec<Property>, DomainError> {
        let properties = self.properties.read().await;
        Ok(properties
            .values()
            .filter(|p| p.is_available)
            .cloned()
            .collect())
    }
}
