//! MySQL implementation of the UserDirectory trait.

use async_trait::async_trait;
use sqlx::MySqlPool;
use uuid::Uuid;

use rp_core::domain::entities::user::UserSummary;
use rp_core::errors::DomainError;
use rp_core::repositories::UserDirectory;

use super::{column, db_err, uuid_column};

/// MySQL implementation of UserDirectory
pub struct MySqlUserDirectory {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserDirectory {
    /// Create a new MySQL user directory
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for MySqlUserDirectory {
    async fn find_summary(&self, id: Uuid) -> Result<Option<UserSummary>, DomainError> {
        let query = r#"
            SELECT id, name, email
            FROM users
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        match result {
            Some(row) => Ok(Some(UserSummary {
                id: uuid_column(&row, "id")?,
                name: column(&row, "name")?,
                email: column(&row, "email")?,
            })),
            None => Ok(None),
        }
    }
}
