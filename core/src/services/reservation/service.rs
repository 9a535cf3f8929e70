//! Reservation lifecycle manager.
//!
//! Validates booking requests against property availability and existing
//! confirmed bookings, computes pricing, and drives the status state machine
//! from creation through confirmation, rejection, cancellation and
//! completion.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::entities::property::Property;
use crate::domain::entities::reservation::{Reservation, ReservationStatus};
use crate::domain::entities::user::UserRole;
use crate::domain::value_objects::{ReservationView, StayRange};
use crate::errors::{DomainError, DomainResult, ReservationError};
use crate::repositories::{PropertyRepository, ReservationRepository, UserDirectory};
use crate::services::notification::{NotificationDispatcher, NotificationType};

/// A validated booking request, before pricing and persistence
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub property_id: Uuid,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guest_count: u32,
    pub special_requests: Option<String>,
}

/// Reservation lifecycle service
///
/// Generic over its collaborators so tests can swap in the in-memory mocks
/// and the API layer can wire the MySQL implementations.
pub struct ReservationService<P, R, U, N>
where
    P: PropertyRepository,
    R: ReservationRepository,
    U: UserDirectory,
    N: NotificationDispatcher,
{
    /// Read-only property lookup
    properties: Arc<P>,
    /// Reservation store with atomic insert/transition guarantees
    reservations: Arc<R>,
    /// User display-field lookup for projections
    users: Arc<U>,
    /// Best-effort notification dispatch
    notifier: Arc<N>,
}

impl<P, R, U, N> ReservationService<P, R, U, N>
where
    P: PropertyRepository,
    R: ReservationRepository,
    U: UserDirectory,
    N: NotificationDispatcher,
{
    /// Create a new reservation service
    pub fn new(
        properties: Arc<P>,
        reservations: Arc<R>,
        users: Arc<U>,
        notifier: Arc<N>,
    ) -> Self {
        Self {
            properties,
            reservations,
            users,
            notifier,
        }
    }

    /// Create a reservation for a property over a date range
    ///
    /// Validation runs in a fixed order, each step with its own failure:
    /// caller role, property existence, availability flag, guest capacity,
    /// date-range sanity, then the conflict check against confirmed
    /// reservations. The store's insert re-runs the conflict check under
    /// serialized isolation, so two concurrent requests for overlapping
    /// ranges cannot both succeed.
    ///
    /// On success the property owner is notified of the pending request;
    /// notification failures are logged and swallowed.
    pub async fn create_reservation(
        &self,
        requester_id: Uuid,
        requester_role: UserRole,
        request: NewReservation,
    ) -> DomainResult<ReservationView> {
        if !requester_role.may_book() {
            return Err(ReservationError::RoleViolation.into());
        }

        let property = self
            .properties
            .find_by_id(request.property_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Property"))?;

        if !property.is_available {
            return Err(ReservationError::PropertyUnavailable.into());
        }

        if !property.accommodates(request.guest_count) {
            return Err(ReservationError::CapacityExceeded {
                max_guests: property.max_guests,
            }
            .into());
        }

        let stay = StayRange::new(request.check_in, request.check_out)?;

        let conflicts = self
            .reservations
            .find_confirmed_overlapping(property.id, &stay)
            .await?;
        if conflicts.iter().any(|r| r.stay.overlaps(&stay)) {
            return Err(ReservationError::DateConflict.into());
        }

        let total_amount = property.price_per_night * Decimal::from(stay.nights());
        let reservation = Reservation::new(
            requester_id,
            property.id,
            stay,
            request.guest_count,
            total_amount,
            request.special_requests,
        );

        // The store re-checks for conflicts under serialized isolation and
        // fails with DateConflict if a concurrent creation won the race.
        let created = self.reservations.insert(reservation).await?;

        tracing::info!(
            reservation_id = %created.id,
            property_id = %property.id,
            user_id = %requester_id,
            "reservation created"
        );

        self.dispatch(
            property.owner_id,
            format!(
                "New reservation request for {} from {} to {}",
                property.title,
                stay.check_in.format("%b %d"),
                stay.check_out.format("%b %d"),
            ),
            NotificationType::ReservationRequest,
            created.id,
        )
        .await;

        let user = self
            .users
            .find_summary(requester_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;
        Ok(ReservationView::assemble(&created, &user, &property))
    }

    /// Owner decision on a pending reservation
    ///
    /// Only the owner of the booked property may decide, only while the
    /// reservation is still pending, and only to Confirmed or Rejected.
    /// The requester is notified of the outcome.
    pub async fn update_status(
        &self,
        reservation_id: Uuid,
        acting_owner_id: Uuid,
        new_status: ReservationStatus,
    ) -> DomainResult<()> {
        let mut reservation = self.require_reservation(reservation_id).await?;
        let property = self
            .properties
            .find_by_id(reservation.property_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Property"))?;

        if property.owner_id != acting_owner_id {
            return Err(DomainError::forbidden(
                "You can only update reservations for your properties",
            ));
        }

        match new_status {
            ReservationStatus::Confirmed => reservation.confirm()?,
            ReservationStatus::Rejected => reservation.reject()?,
            other => {
                return Err(ReservationError::InvalidTransition {
                    current: reservation.status,
                    requested: other,
                }
                .into())
            }
        }

        let applied = self
            .reservations
            .transition_status(
                reservation_id,
                ReservationStatus::Pending,
                new_status,
                reservation.confirmed_at,
            )
            .await?;
        if !applied {
            // Lost a race with another transition; report the status that won
            return Err(self
                .stale_transition_error(reservation_id, new_status)
                .await?);
        }

        tracing::info!(
            reservation_id = %reservation_id,
            status = %new_status,
            owner_id = %acting_owner_id,
            "reservation status updated"
        );

        let kind = if new_status == ReservationStatus::Confirmed {
            NotificationType::ReservationConfirmed
        } else {
            NotificationType::ReservationRejected
        };
        self.dispatch(
            reservation.user_id,
            format!(
                "Your reservation for {} has been {}",
                property.title, new_status
            ),
            kind,
            reservation_id,
        )
        .await;

        Ok(())
    }

    /// Requester withdraws a reservation
    ///
    /// Allowed from Pending and Confirmed; cancelling twice reports
    /// `AlreadyCancelled` without changing state.
    pub async fn cancel(&self, reservation_id: Uuid, acting_user_id: Uuid) -> DomainResult<()> {
        let mut reservation = self.require_reservation(reservation_id).await?;

        if reservation.user_id != acting_user_id {
            return Err(DomainError::forbidden(
                "You can only cancel your own reservations",
            ));
        }

        let previous = reservation.status;
        reservation.cancel()?;

        let applied = self
            .reservations
            .transition_status(
                reservation_id,
                previous,
                ReservationStatus::Cancelled,
                None,
            )
            .await?;
        if !applied {
            return Err(self
                .stale_transition_error(reservation_id, ReservationStatus::Cancelled)
                .await?);
        }

        tracing::info!(
            reservation_id = %reservation_id,
            user_id = %acting_user_id,
            "reservation cancelled"
        );
        Ok(())
    }

    /// Fetch a single reservation projection
    ///
    /// Renters may view their own reservations; owners may view reservations
    /// on their own properties.
    pub async fn get_reservation(
        &self,
        reservation_id: Uuid,
        acting_user_id: Uuid,
        acting_role: UserRole,
    ) -> DomainResult<ReservationView> {
        let reservation = self.require_reservation(reservation_id).await?;
        let property = self
            .properties
            .find_by_id(reservation.property_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Property"))?;

        match acting_role {
            UserRole::Renter if reservation.user_id != acting_user_id => {
                return Err(DomainError::forbidden(
                    "You can only view your own reservations",
                ));
            }
            UserRole::Owner if property.owner_id != acting_user_id => {
                return Err(DomainError::forbidden(
                    "You can only view reservations for your properties",
                ));
            }
            _ => {}
        }

        let user = self
            .users
            .find_summary(reservation.user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;
        Ok(ReservationView::assemble(&reservation, &user, &property))
    }

    /// List reservation projections for the acting user, newest first
    ///
    /// Renters see their own bookings; owners see bookings on their
    /// properties.
    pub async fn list_for_user(
        &self,
        acting_user_id: Uuid,
        acting_role: UserRole,
    ) -> DomainResult<Vec<ReservationView>> {
        let reservations = match acting_role {
            UserRole::Owner => {
                self.reservations
                    .find_for_property_owner(acting_user_id)
                    .await?
            }
            UserRole::Renter => self.reservations.find_for_user(acting_user_id).await?,
        };

        let mut views = Vec::with_capacity(reservations.len());
        for reservation in &reservations {
            // A reservation without its related records indicates data gone
            // missing underneath us; skip it rather than failing the listing.
            let Some(property) = self.properties.find_by_id(reservation.property_id).await?
            else {
                tracing::warn!(
                    reservation_id = %reservation.id,
                    property_id = %reservation.property_id,
                    "skipping reservation with missing property"
                );
                continue;
            };
            let Some(user) = self.users.find_summary(reservation.user_id).await? else {
                tracing::warn!(
                    reservation_id = %reservation.id,
                    user_id = %reservation.user_id,
                    "skipping reservation with missing user"
                );
                continue;
            };
            views.push(ReservationView::assemble(reservation, &user, &property));
        }
        Ok(views)
    }

    /// Whether a property is free over the given stay
    ///
    /// Uses the same confirmed-overlap predicate as `create_reservation`, so
    /// search results and booking outcomes cannot disagree.
    pub async fn is_property_available(
        &self,
        property_id: Uuid,
        stay: &StayRange,
    ) -> DomainResult<bool> {
        let conflicts = self
            .reservations
            .find_confirmed_overlapping(property_id, stay)
            .await?;
        Ok(!conflicts.iter().any(|r| r.stay.overlaps(stay)))
    }

    /// Search-time availability query
    ///
    /// Returns properties whose availability flag is set, excluding those
    /// with a confirmed reservation overlapping the candidate stay.
    pub async fn search_available(
        &self,
        stay: Option<StayRange>,
    ) -> DomainResult<Vec<Property>> {
        let candidates = self.properties.list_available().await?;
        let Some(stay) = stay else {
            return Ok(candidates);
        };

        let mut available = Vec::with_capacity(candidates.len());
        for property in candidates {
            if self.is_property_available(property.id, &stay).await? {
                available.push(property);
            }
        }
        Ok(available)
    }

    async fn require_reservation(&self, id: Uuid) -> DomainResult<Reservation> {
        self.reservations
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Reservation"))
    }

    /// Build the error for a transition that lost a race, naming the status
    /// that actually won
    async fn stale_transition_error(
        &self,
        reservation_id: Uuid,
        requested: ReservationStatus,
    ) -> DomainResult<DomainError> {
        let current = self
            .require_reservation(reservation_id)
            .await
            .map(|r| r.status)?;
        if requested == ReservationStatus::Cancelled && current == ReservationStatus::Cancelled {
            return Ok(ReservationError::AlreadyCancelled.into());
        }
        Ok(ReservationError::InvalidTransition { current, requested }.into())
    }

    async fn dispatch(
        &self,
        user_id: Uuid,
        message: String,
        kind: NotificationType,
        reservation_id: Uuid,
    ) {
        if let Err(err) = self
            .notifier
            .notify(user_id, &message, kind, Some(reservation_id), "Reservation")
            .await
        {
            tracing::warn!(
                reservation_id = %reservation_id,
                error = %err,
                "failed to dispatch reservation notification"
            );
        }
    }
}
