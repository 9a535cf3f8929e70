//! Property search DTOs.

use actix_web::Error;
use chrono::NaiveDate;
use serde::Deserialize;

use rp_core::domain::value_objects::StayRange;
use rp_core::errors::DomainError;
use rp_shared::types::response::{error_codes, ErrorResponse};

use crate::handlers::error::ApiError;

/// Query string of GET /api/v1/properties/search
///
/// Dates are optional but come as a pair; a lone check-in or check-out is
/// rejected before any lookup runs.
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

impl AvailabilityQuery {
    /// Resolve the query into an optional candidate stay
    pub fn into_stay(self) -> Result<Option<StayRange>, Error> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => {
                let stay = StayRange::new(check_in, check_out)
                    .map_err(|err| Error::from(ApiError(DomainError::from(err))))?;
                Ok(Some(stay))
            }
            (None, None) => Ok(None),
            _ => Err(half_range_error()),
        }
    }
}

fn half_range_error() -> Error {
    let body = ErrorResponse::new(
        error_codes::VALIDATION_ERROR,
        "check_in and check_out must be provided together",
    );
    actix_web::error::InternalError::from_response(
        "check_in and check_out must be provided together".to_string(),
        actix_web::HttpResponse::BadRequest().json(body),
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_both_dates_resolve_to_stay() {
        let query = AvailabilityQuery {
            check_in: Some(date(2025, 6, 1)),
            check_out: Some(date(2025, 6, 4)),
        };
        let stay = query.into_stay().unwrap().unwrap();
        assert_eq!(stay.nights(), 3);
    }

    #[test]
    fn test_no_dates_resolve_to_none() {
        let query = AvailabilityQuery {
            check_in: None,
            check_out: None,
        };
        assert!(query.into_stay().unwrap().is_none());
    }

    #[test]
    fn test_lone_date_is_rejected() {
        let query = AvailabilityQuery {
            check_in: Some(date(2025, 6, 1)),
            check_out: None,
        };
        assert!(query.into_stay().is_err());
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let query = AvailabilityQuery {
            check_in: Some(date(2025, 6, 4)),
            check_out: Some(date(2025, 6, 1)),
        };
        assert!(query.into_stay().is_err());
    }
}
