//! In-memory implementation of UserDirectory for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::UserSummary;
use crate::errors::DomainError;

use super::trait_::UserDirectory;

/// Mock user directory for testing
pub struct MockUserDirectory {
    users: Arc<RwLock<HashMap<Uuid, UserSummary>>>,
}

impl MockUserDirectory {
    /// Create a new empty mock directory
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the directory with a user
    pub async fn insert(&self, user: UserSummary) {
        self.users.write().await.insert(user.id, user);
    }
}

impl Default for MockUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDirectory for MockUserDirectory {
    async fn find_summary(&self, id: Uuid) -> Result<Option<UserSummary>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }
}
