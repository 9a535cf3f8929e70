//! Handler for GET /api/v1/reservations/my

use actix_web::{web, HttpResponse};

use rp_core::repositories::{PropertyRepository, ReservationRepository, UserDirectory};
use rp_core::services::notification::NotificationDispatcher;

use crate::handlers::error::ApiError;
use crate::middleware::auth::AuthenticatedUser;
use crate::routes::AppState;

/// List the authenticated user's reservations, newest first
///
/// Renters get their own bookings; owners get the bookings on their
/// properties.
pub async fn list_my_reservations<P, R, U, N>(
    user: AuthenticatedUser,
    state: web::Data<AppState<P, R, U, N>>,
) -> Result<HttpResponse, actix_web::Error>
where
    P: PropertyRepository + 'static,
    R: ReservationRepository + 'static,
    U: UserDirectory + 'static,
    N: NotificationDispatcher + 'static,
{
    let views = state
        .reservation_service
        .list_for_user(user.id, user.role)
        .await
        .map_err(ApiError)?;

    Ok(HttpResponse::Ok().json(views))
}
