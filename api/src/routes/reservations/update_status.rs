//! Handler for PUT /api/v1/reservations/{id}/status

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use rp_core::domain::entities::reservation::ReservationStatus;
use rp_core::repositories::{PropertyRepository, ReservationRepository, UserDirectory};
use rp_core::services::notification::NotificationDispatcher;

use crate::dto::reservation::UpdateReservationStatusRequest;
use crate::handlers::error::{validation_error, ApiError};
use crate::middleware::auth::AuthenticatedUser;
use crate::routes::AppState;

/// Owner decision on a pending reservation
///
/// Accepts "confirmed" or "rejected"; any other status string, or a
/// reservation that already left Pending, maps to 409.
pub async fn update_reservation_status<P, R, U, N>(
    user: AuthenticatedUser,
    state: web::Data<AppState<P, R, U, N>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateReservationStatusRequest>,
) -> Result<HttpResponse, actix_web::Error>
where
    P: PropertyRepository + 'static,
    R: ReservationRepository + 'static,
    U: UserDirectory + 'static,
    N: NotificationDispatcher + 'static,
{
    request.validate().map_err(validation_error)?;
    let status = ReservationStatus::parse(&request.status).map_err(ApiError::from)?;

    state
        .reservation_service
        .update_status(path.into_inner(), user.id, status)
        .await
        .map_err(ApiError)?;

    Ok(HttpResponse::NoContent().finish())
}
