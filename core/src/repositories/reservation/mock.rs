//! In-memory implementation of ReservationRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::reservation::{Reservation, ReservationStatus};
use crate::domain::value_objects::StayRange;
use crate::errors::{DomainError, ReservationError};

use super::trait_::ReservationRepository;

/// Mock reservation repository for testing
///
/// A single `RwLock` over the whole map serializes writers, which is enough
/// to honor the check-then-insert and compare-and-set contracts of the trait.
pub struct MockReservationRepository {
    reservations: Arc<RwLock<HashMap<Uuid, Reservation>>>,
    /// Owner per property, needed to answer `find_for_property_owner`
    property_owners: Arc<RwLock<HashMap<Uuid, Uuid>>>,
}

impl MockReservationRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            reservations: Arc::new(RwLock::new(HashMap::new())),
            property_owners: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Record which user owns a property, for owner-side listings
    pub async fn set_property_owner(&self, property_id: Uuid, owner_id: Uuid) {
        self.property_owners
            .write()
            .await
            .insert(property_id, owner_id);
    }

    /// Seed the repository with a reservation, bypassing the conflict check
    pub async fn seed(&self, reservation: Reservation) {
        self.reservations
            .write()
            .await
            .insert(reservation.id, reservation);
    }
}

impl Default for MockReservationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReservationRepository for MockReservationRepository {
    async fn insert(&self, reservation: Reservation) -> Result<Reservation, DomainError> {
        let mut reservations = self.reservations.write().await;

        // Re-check under the write lock, mirroring the serialized
        // check-then-insert the real store performs in a transaction.
        let conflict = reservations.values().any(|existing| {
            existing.property_id == reservation.property_id
                && existing.status.blocks_dates()
                && existing.stay.overlaps(&reservation.stay)
        });
        if conflict {
            return Err(ReservationError::DateConflict.into());
        }

        reservations.insert(reservation.id, reservation.clone());
        Ok(reservation)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Reservation>, DomainError> {
        let reservations = self.reservations.read().await;
        Ok(reservations.get(&id).cloned())
    }

    async fn find_confirmed_overlapping(
        &self,
        property_id: Uuid,
        stay: &StayRange,
    ) -> Result<Vec<Reservation>, DomainError> {
        let reservations = self.reservations.read().await;
        Ok(reservations
            .values()
            .filter(|r| {
                r.property_id == property_id
                    && r.status.blocks_dates()
                    && r.stay.overlaps(stay)
            })
            .cloned()
            .collect())
    }

    async fn find_for_user(&self, user_id: Uuid) -> Result<Vec<Reservation>, DomainError> {
        let reservations = self.reservations.read().await;
        let mut found: Vec<Reservation> = reservations
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }

    async fn find_for_property_owner(
        &self,
        owner_id: Uuid,
    ) -> Result<Vec<Reservation>, DomainError> {
        let owners = self.property_owners.read().await;
        let reservations = self.reservations.read().await;
        let mut found: Vec<Reservation> = reservations
            .values()
            .filter(|r| owners.get(&r.property_id) == Some(&owner_id))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }

    async fn transition_status(
        &self,
        id: Uuid,
        from: ReservationStatus,
        to: ReservationStatus,
        confirmed_at: Option<DateTime<Utc>>,
    ) -> Result<bool, DomainError> {
        let mut reservations = self.reservations.write().await;
        match reservations.get_mut(&id) {
            Some(reservation) if reservation.status == from => {
                reservation.status = to;
                if confirmed_at.is_some() {
                    reservation.confirmed_at = confirmed_at;
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
