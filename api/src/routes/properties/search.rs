//! Handler for GET /api/v1/properties/search

use actix_web::{web, HttpResponse};

use rp_core::repositories::{PropertyRepository, ReservationRepository, UserDirectory};
use rp_core::services::notification::NotificationDispatcher;

use crate::dto::property::AvailabilityQuery;
use crate::handlers::error::ApiError;
use crate::routes::AppState;

/// Search available properties, optionally filtered by a candidate stay
///
/// Without dates this lists every property whose availability flag is set.
/// With dates it additionally excludes properties that have a confirmed
/// reservation overlapping the stay, using the same predicate the booking
/// path uses. The search is public; no authentication required.
pub async fn search_properties<P, R, U, N>(
    state: web::Data<AppState<P, R, U, N>>,
    query: web::Query<AvailabilityQuery>,
) -> Result<HttpResponse, actix_web::Error>
where
    P: PropertyRepository + 'static,
    R: ReservationRepository + 'static,
    U: UserDirectory + 'static,
    N: NotificationDispatcher + 'static,
{
    let stay = query.into_inner().into_stay()?;

    let properties = state
        .reservation_service
        .search_available(stay)
        .await
        .map_err(ApiError)?;

    Ok(HttpResponse::Ok().json(properties))
}
