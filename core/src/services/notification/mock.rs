//! Mock notification dispatchers for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::errors::DomainError;

use super::{NotificationDispatcher, NotificationType};

/// A notification captured by the recording dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentNotification {
    pub user_id: Uuid,
    pub message: String,
    pub kind: NotificationType,
    pub related_entity_id: Option<Uuid>,
    pub related_entity_type: String,
}

/// Dispatcher that records every notification instead of delivering it
pub struct RecordingNotificationDispatcher {
    sent: Arc<Mutex<Vec<SentNotification>>>,
}

impl RecordingNotificationDispatcher {
    /// Create a new recording dispatcher
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Notifications recorded so far
    pub async fn sent(&self) -> Vec<SentNotification> {
        self.sent.lock().await.clone()
    }
}

impl Default for RecordingNotificationDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationDispatcher for RecordingNotificationDispatcher {
    async fn notify(
        &self,
        user_id: Uuid,
        message: &str,
        kind: NotificationType,
        related_entity_id: Option<Uuid>,
        related_entity_type: &str,
    ) -> Result<(), DomainError> {
        self.sent.lock().await.push(SentNotification {
            user_id,
            message: message.to_string(),
            kind,
            related_entity_id,
            related_entity_type: related_entity_type.to_string(),
        });
        Ok(())
    }
}

/// Dispatcher that always fails, for exercising the fire-and-forget contract
pub struct FailingNotificationDispatcher;

#[async_trait]
impl NotificationDispatcher for FailingNotificationDispatcher {
    async fn notify(
        &self,
        _user_id: Uuid,
        _message: &str,
        _kind: NotificationType,
        _related_entity_id: Option<Uuid>,
        _related_entity_type: &str,
    ) -> Result<(), DomainError> {
        Err(DomainError::Internal {
            message: "notification channel unavailable".to_string(),
        })
    }
}
