//! MySQL implementation of the PropertyRepository trait.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::MySqlPool;
use uuid::Uuid;

use rp_core::domain::entities::property::Property;
use rp_core::errors::DomainError;
use rp_core::repositories::PropertyRepository;

use super::{column, db_err, uuid_column};

/// MySQL implementation of PropertyRepository
pub struct MySqlPropertyRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlPropertyRepository {
    /// Create a new MySQL property repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_property(row: &sqlx::mysql::MySqlRow) -> Result<Property, DomainError> {
        Ok(Property {
            id: uuid_column(row, "id")?,
            owner_id: uuid_column(row, "owner_id")?,
            title: column(row, "title")?,
            location: column(row, "location")?,
            price_per_night: column::<Decimal>(row, "price_per_night")?,
            max_guests: column(row, "max_guests")?,
            is_available: column(row, "is_available")?,
        })
    }
}

#[async_trait]
impl PropertyRepository for MySqlPropertyRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, DomainError> {
        let query = r#"
            SELECT id, owner_id, title, location, price_per_night,
                   max_guests, is_available
            FROM properties
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_property(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_available(&self) -> Result<Vec<Property>, DomainError> {
        let query = r#"
            SELECT id, owner_id, title, location, price_per_night,
                   max_guests, is_available
            FROM properties
            WHERE is_available = TRUE
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;

        rows.iter().map(Self::row_to_property).collect()
    }
}
