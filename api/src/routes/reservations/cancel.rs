//! Handler for DELETE /api/v1/reservations/{id}

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use rp_core::repositories::{PropertyRepository, ReservationRepository, UserDirectory};
use rp_core::services::notification::NotificationDispatcher;

use crate::handlers::error::ApiError;
use crate::middleware::auth::AuthenticatedUser;
use crate::routes::AppState;

/// Cancel the authenticated user's own reservation
///
/// Cancellation is allowed from Pending and Confirmed; a second cancel
/// reports 409 with ALREADY_CANCELLED.
pub async fn cancel_reservation<P, R, U, N>(
    user: AuthenticatedUser,
    state: web::Data<AppState<P, R, U, N>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, actix_web::Error>
where
    P: PropertyRepository + 'static,
    R: ReservationRepository + 'static,
    U: UserDirectory + 'static,
    N: NotificationDispatcher + 'static,
{
    state
        .reservation_service
        .cancel(path.into_inner(), user.id)
        .await
        .map_err(ApiError)?;

    Ok(HttpResponse::NoContent().finish())
}
