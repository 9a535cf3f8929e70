//! MySQL implementations of the core collaborator interfaces.

pub mod notification_dispatcher_impl;
pub mod property_repository_impl;
pub mod reservation_repository_impl;
pub mod user_directory_impl;

pub use notification_dispatcher_impl::MySqlNotificationDispatcher;
pub use property_repository_impl::MySqlPropertyRepository;
pub use reservation_repository_impl::MySqlReservationRepository;
pub use user_directory_impl::MySqlUserDirectory;

use rp_core::errors::DomainError;
use sqlx::mysql::MySqlRow;
use sqlx::Row;
use uuid::Uuid;

/// Read a column, mapping SQLx failures into a `DomainError::Database`
pub(crate) fn column<'r, T>(row: &'r MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
{
    row.try_get(name).map_err(|e| DomainError::Database {
        message: format!("Failed to get {}: {}", name, e),
    })
}

/// Read a UUID stored as a CHAR(36) column
pub(crate) fn uuid_column(row: &MySqlRow, name: &str) -> Result<Uuid, DomainError> {
    let raw: String = column(row, name)?;
    Uuid::parse_str(&raw).map_err(|e| DomainError::Database {
        message: format!("Invalid UUID in {}: {}", name, e),
    })
}

/// Map a SQLx error into a `DomainError::Database`
pub(crate) fn db_err(e: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: format!("Database query failed: {}", e),
    }
}
