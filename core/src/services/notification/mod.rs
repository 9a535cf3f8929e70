//! Notification dispatch interface.
//!
//! Dispatch is best-effort relative to the caller's transaction: the service
//! layer logs and swallows dispatch failures, they never roll back a state
//! transition.

pub mod mock;

pub use mock::{FailingNotificationDispatcher, RecordingNotificationDispatcher};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DomainError;

/// Kind of notification shown in the user's feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    /// A new pending request landed on one of the owner's properties
    ReservationRequest,
    /// The owner confirmed the requester's reservation
    ReservationConfirmed,
    /// The owner rejected the requester's reservation
    ReservationRejected,
}

impl NotificationType {
    /// Wire representation of the notification type
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::ReservationRequest => "reservation_request",
            NotificationType::ReservationConfirmed => "reservation_confirmed",
            NotificationType::ReservationRejected => "reservation_rejected",
        }
    }
}

/// Dispatches a notification to a user
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    /// Deliver a notification
    ///
    /// # Arguments
    /// * `user_id` - Recipient
    /// * `message` - Human-readable notification text
    /// * `kind` - Notification kind for the frontend's feed
    /// * `related_entity_id` - Entity the notification refers to, if any
    /// * `related_entity_type` - Type tag of the related entity ("Reservation", ...)
    async fn notify(
        &self,
        user_id: Uuid,
        message: &str,
        kind: NotificationType,
        related_entity_id: Option<Uuid>,
        related_entity_type: &str,
    ) -> Result<(), DomainError>;
}
