//! Handler for GET /api/v1/reservations/{id}

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use rp_core::repositories::{PropertyRepository, ReservationRepository, UserDirectory};
use rp_core::services::notification::NotificationDispatcher;

use crate::handlers::error::ApiError;
use crate::middleware::auth::AuthenticatedUser;
use crate::routes::AppState;

/// Fetch a single reservation
///
/// Renters see their own reservations; owners see reservations on their
/// properties. Anyone else gets 403.
pub async fn get_reservation<P, R, U, N>(
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
    let view = state
        .reservation_service
        .get_reservation(path.into_inner(), user.id, user.role)
        .await
        .map_err(ApiError)?;

    Ok(HttpResponse::Ok().json(view))
}
