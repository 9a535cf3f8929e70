//! MySQL implementation of the ReservationRepository trait.
//!
//! Upholds the two atomicity contracts of the trait: `insert` runs a
//! check-then-insert inside a transaction with the property's confirmed rows
//! locked, and `transition_status` is a conditional UPDATE keyed on the
//! expected current status.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::MySqlPool;
use uuid::Uuid;

use rp_core::domain::entities::reservation::{Reservation, ReservationStatus};
use rp_core::domain::value_objects::StayRange;
use rp_core::errors::{DomainError, ReservationError};
use rp_core::repositories::ReservationRepository;

use super::{column, db_err, uuid_column};

const RESERVATION_COLUMNS: &str = r#"
    r.id, r.user_id, r.property_id, r.check_in, r.check_out,
    r.guest_count, r.total_amount, r.status, r.special_requests,
    r.created_at, r.confirmed_at
"#;

/// MySQL implementation of ReservationRepository
pub struct MySqlReservationRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlReservationRepository {
    /// Create a new MySQL reservation repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Reservation entity
    fn row_to_reservation(row: &sqlx::mysql::MySqlRow) -> Result<Reservation, DomainError> {
        let status_raw: String = column(row, "status")?;
        let status = ReservationStatus::parse(&status_raw).map_err(|_| DomainError::Database {
            message: format!("Invalid reservation status in row: {}", status_raw),
        })?;

        let check_in: NaiveDate = column(row, "check_in")?;
        let check_out: NaiveDate = column(row, "check_out")?;

        Ok(Reservation {
            id: uuid_column(row, "id")?,
            user_id: uuid_column(row, "user_id")?,
            property_id: uuid_column(row, "property_id")?,
            stay: StayRange {
                check_in,
                check_out,
            },
            guest_count: column(row, "guest_count")?,
            total_amount: column::<Decimal>(row, "total_amount")?,
            status,
            special_requests: column(row, "special_requests")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            confirmed_at: column(row, "confirmed_at")?,
        })
    }
}

#[async_trait]
impl ReservationRepository for MySqlReservationRepository {
    async fn insert(&self, reservation: Reservation) -> Result<Reservation, DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_err)?;

        // Lock the property's confirmed rows for the requested range so two
        // concurrent creations serialize on the overlap check. Half-open
        // interval test: existing.check_in < new.check_out AND
        // existing.check_out > new.check_in.
        let conflicts: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM reservations
            WHERE property_id = ?
              AND status = 'confirmed'
              AND check_in < ?
              AND check_out > ?
            FOR UPDATE
            "#,
        )
        .bind(reservation.property_id.to_string())
        .bind(reservation.stay.check_out)
        .bind(reservation.stay.check_in)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_err)?;

        if conflicts > 0 {
            // Dropping the transaction rolls it back
            return Err(ReservationError::DateConflict.into());
        }

        sqlx::query(
            r#"
            INSERT INTO reservations
                (id, user_id, property_id, check_in, check_out,
                 guest_count, total_amount, status, special_requests,
                 created_at, confirmed_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(reservation.id.to_string())
        .bind(reservation.user_id.to_string())
        .bind(reservation.property_id.to_string())
        .bind(reservation.stay.check_in)
        .bind(reservation.stay.check_out)
        .bind(reservation.guest_count)
        .bind(reservation.total_amount)
        .bind(reservation.status.as_str())
        .bind(&reservation.special_requests)
        .bind(reservation.created_at)
        .bind(reservation.confirmed_at)
        .execute(&mut *tx)
        .await
        .map_err(db_err)?;

        tx.commit().await.map_err(db_err)?;
        Ok(reservation)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Reservation>, DomainError> {
        let query = format!(
            "SELECT {} FROM reservations r WHERE r.id = ? LIMIT 1",
            RESERVATION_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_reservation(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_confirmed_overlapping(
        &self,
        property_id: Uuid,
        stay: &StayRange,
    ) -> Result<Vec<Reservation>, DomainError> {
        let query = format!(
            r#"
            SELECT {}
            FROM reservations r
            WHERE r.property_id = ?
              AND r.status = 'confirmed'
              AND r.check_in < ?
              AND r.check_out > ?
            "#,
            RESERVATION_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(property_id.to_string())
            .bind(stay.check_out)
            .bind(stay.check_in)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;

        rows.iter().map(Self::row_to_reservation).collect()
    }

    async fn find_for_user(&self, user_id: Uuid) -> Result<Vec<Reservation>, DomainError> {
        let query = format!(
            r#"
            SELECT {}
            FROM reservations r
            WHERE r.user_id = ?
            ORDER BY r.created_at DESC
            "#,
            RESERVATION_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;

        rows.iter().map(Self::row_to_reservation).collect()
    }

    async fn find_for_property_owner(
        &self,
        owner_id: Uuid,
    ) -> Result<Vec<Reservation>, DomainError> {
        let query = format!(
            r#"
            SELECT {}
            FROM reservations r
            INNER JOIN properties p ON p.id = r.property_id
            WHERE p.owner_id = ?
            ORDER BY r.created_at DESC
            "#,
            RESERVATION_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(owner_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;

        rows.iter().map(Self::row_to_reservation).collect()
    }

    async fn transition_status(
        &self,
        id: Uuid,
        from: ReservationStatus,
        to: ReservationStatus,
        confirmed_at: Option<DateTime<Utc>>,
    ) -> Result<bool, DomainError> {
        // Compare-and-set on the status column; a concurrent transition that
        // got there first leaves rows_affected at zero.
        let result = sqlx::query(
            r#"
            UPDATE reservations
            SET status = ?, confirmed_at = COALESCE(?, confirmed_at)
            WHERE id = ? AND status = ?
            "#,
        )
        .bind(to.as_str())
        .bind(confirmed_at)
        .bind(id.to_string())
        .bind(from.as_str())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(result.rows_affected() == 1)
    }
}
