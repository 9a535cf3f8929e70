//! MySQL-backed notification dispatcher.
//!
//! Persists notification rows for the frontend's notification feed. Email
//! delivery is handled by a separate service; this dispatcher only records
//! the in-app notification. Callers treat dispatch as best-effort, so a
//! failed insert surfaces as an error here and is logged and swallowed by
//! the service layer.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::MySqlPool;
use uuid::Uuid;

use rp_core::errors::DomainError;
use rp_core::services::notification::{NotificationDispatcher, NotificationType};

use super::db_err;

/// Notification dispatcher writing to the notifications table
pub struct MySqlNotificationDispatcher {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlNotificationDispatcher {
    /// Create a new MySQL notification dispatcher
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationDispatcher for MySqlNotificationDispatcher {
    async fn notify(
        &self,
        user_id: Uuid,
        message: &str,
        kind: NotificationType,
        related_entity_id: Option<Uuid>,
        related_entity_type: &str,
    ) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO notifications
                (id, user_id, message, type, is_read,
                 related_entity_id, related_entity_type, created_at)
            VALUES (?, ?, ?, ?, FALSE, ?, ?, ?)
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(user_id.to_string())
        .bind(message)
        .bind(kind.as_str())
        .bind(related_entity_id.map(|id| id.to_string()))
        .bind(related_entity_type)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        tracing::debug!(user_id = %user_id, kind = kind.as_str(), "notification recorded");
        Ok(())
    }
}
