//! Handler for POST /api/v1/reservations

use actix_web::{web, HttpResponse};
use validator::Validate;

use rp_core::repositories::{PropertyRepository, ReservationRepository, UserDirectory};
use rp_core::services::notification::NotificationDispatcher;

use crate::dto::reservation::CreateReservationRequest;
use crate::handlers::error::{validation_error, ApiError};
use crate::middleware::auth::AuthenticatedUser;
use crate::routes::AppState;

/// Create a reservation for the authenticated renter
///
/// Returns 201 with the full reservation projection, or the domain failure
/// mapped to its status: 403 for owners, 404 for a missing property, 400
/// for bad dates or guest counts, 409 for a date conflict.
pub async fn create_reservation<P, R, U, N>(
    user: AuthenticatedUser,
    state: web::Data<AppState<P, R, U, N>>,
    request: web::Json<CreateReservationRequest>,
) -> Result<HttpResponse, actix_web::Error>
where
    P: PropertyRepository + 'static,
    R: ReservationRepository + 'static,
    U: UserDirectory + 'static,
    N: NotificationDispatcher + 'static,
{
    request.validate().map_err(validation_error)?;

    let view = state
        .reservation_service
        .create_reservation(user.id, user.role, request.into_inner().into())
        .await
        .map_err(ApiError)?;

    Ok(HttpResponse::Created().json(view))
}
