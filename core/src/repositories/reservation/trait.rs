//! Reservation store trait defining the interface for reservation
//! persistence.
//!
//! Besides plain reads, the trait carries the two atomicity guarantees the
//! reservation lifecycle depends on: a serialized check-then-insert for new
//! bookings and a compare-and-set for status transitions. Implementations
//! must uphold both; the service layer assumes them when reasoning about
//! concurrent requests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::reservation::{Reservation, ReservationStatus};
use crate::domain::value_objects::StayRange;
use crate::errors::DomainError;

/// Repository trait for reservation persistence operations
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Persist a new reservation
    ///
    /// The insert must be a serialized check-then-insert: within one unit of
    /// isolation it re-checks that no confirmed reservation for the same
    /// property overlaps the new stay, then inserts. Two concurrent inserts
    /// for overlapping ranges must not both succeed; the loser fails with
    /// `ReservationError::DateConflict`.
    ///
    /// # Returns
    /// * `Ok(Reservation)` - The persisted reservation
    /// * `Err(DomainError)` - Conflict detected or database error
    async fn insert(&self, reservation: Reservation) -> Result<Reservation, DomainError>;

    /// Find a reservation by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Reservation>, DomainError>;

    /// Find confirmed reservations for a property that overlap the given stay
    ///
    /// Only confirmed reservations block dates; pending, rejected, cancelled
    /// and completed ones never appear in the result.
    async fn find_confirmed_overlapping(
        &self,
        property_id: Uuid,
        stay: &StayRange,
    ) -> Result<Vec<Reservation>, DomainError>;

    /// List a user's own reservations, newest first
    async fn find_for_user(&self, user_id: Uuid) -> Result<Vec<Reservation>, DomainError>;

    /// List reservations on properties owned by the given user, newest first
    async fn find_for_property_owner(
        &self,
        owner_id: Uuid,
    ) -> Result<Vec<Reservation>, DomainError>;

    /// Atomically transition a reservation's status
    ///
    /// The write applies only if the stored status still equals `from`,
    /// resolving races between concurrent transitions on the same
    /// reservation.
    ///
    /// # Returns
    /// * `Ok(true)` - Status was `from` and is now `to`
    /// * `Ok(false)` - Stored status no longer matches `from`; nothing changed
    /// * `Err(DomainError)` - Database error occurred
    async fn transition_status(
        &self,
        id: Uuid,
        from: ReservationStatus,
        to: ReservationStatus,
        confirmed_at: Option<DateTime<Utc>>,
    ) -> Result<bool, DomainError>;
}
