//! User directory trait for reservation projections.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::UserSummary;
use crate::errors::DomainError;

/// Read-only lookup of user display fields
///
/// User accounts are managed by the identity service; the reservation core
/// only denormalizes name and email into its projections.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find a user's display fields by their unique identifier
    async fn find_summary(&self, id: Uuid) -> Result<Option<UserSummary>, DomainError>;
}
