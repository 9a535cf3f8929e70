//! Property lookup trait used by the reservation domain.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::property::Property;
use crate::errors::DomainError;

/// Read-only property lookup
///
/// The reservation core never mutates properties; it only reads the fields
/// that drive availability, capacity and pricing decisions.
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Find a property by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Property))` - Property found
    /// * `Ok(None)` - No property with the given ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, DomainError>;

    /// List properties whose availability flag is set
    ///
    /// Date-range filtering is applied on top of this by the reservation
    /// service, so search results and booking outcomes share one overlap
    /// predicate.
    async fn list_available(&self) -> Result<Vec<Property>, DomainError>;
}
