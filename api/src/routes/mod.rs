//! Route handlers, grouped by resource

pub mod properties;
pub mod reservations;

use std::sync::Arc;

use rp_core::repositories::{PropertyRepository, ReservationRepository, UserDirectory};
use rp_core::services::notification::NotificationDispatcher;
use rp_core::services::reservation::ReservationService;

/// Application state holding the shared services
///
/// Generic over the service collaborators so integration tests can run the
/// full HTTP stack against the in-memory mocks.
pub struct AppState<P, R, U, N>
where
    P: PropertyRepository,
    R: ReservationRepository,
    U: UserDirectory,
    N: NotificationDispatcher,
{
    pub reservation_service: Arc<ReservationService<P, R, U, N>>,
}
