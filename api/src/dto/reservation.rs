//! Reservation request DTOs.
//!
//! Responses reuse the core `ReservationView` projection directly; only
//! inbound payloads need their own shapes here.

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use rp_core::domain::entities::reservation::MAX_SPECIAL_REQUESTS_LEN;
use rp_core::services::reservation::NewReservation;

/// Body of POST /api/v1/reservations
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReservationRequest {
    pub property_id: Uuid,

    pub check_in: NaiveDate,

    pub check_out: NaiveDate,

    #[validate(range(min = 1, message = "At least one guest is required"))]
    pub guest_count: u32,

    #[validate(custom = "validate_special_requests")]
    pub special_requests: Option<String>,
}

fn validate_special_requests(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() > MAX_SPECIAL_REQUESTS_LEN {
        let mut error = ValidationError::new("length");
        error.message = Some("Special requests are limited to 500 characters".into());
        return Err(error);
    }
    Ok(())
}

impl From<CreateReservationRequest> for NewReservation {
    fn from(request: CreateReservationRequest) -> Self {
        NewReservation {
            property_id: request.property_id,
            check_in: request.check_in,
            check_out: request.check_out,
            guest_count: request.guest_count,
            special_requests: request.special_requests,
        }
    }
}

/// Body of PUT /api/v1/reservations/{id}/status
///
/// The status arrives as its wire string and is parsed against the closed
/// status set before it reaches the service.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateReservationStatusRequest {
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}
