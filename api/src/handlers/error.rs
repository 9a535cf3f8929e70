//! Mapping from domain errors to HTTP responses.
//!
//! Every domain failure keeps its own error code in the response body so
//! the frontend can branch on it; the HTTP status groups them into the
//! usual classes (404/403/409/400/500).

use std::collections::HashMap;
use std::fmt;

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use validator::ValidationErrors;

use rp_core::errors::{DomainError, ReservationError};
use rp_shared::types::response::{error_codes, ErrorResponse};

/// Wrapper turning a `DomainError` into an actix-web response
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError(err)
    }
}

impl From<ReservationError> for ApiError {
    fn from(err: ReservationError) -> Self {
        ApiError(DomainError::from(err))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Forbidden { .. } => StatusCode::FORBIDDEN,
            DomainError::Database { .. } | DomainError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            DomainError::Reservation(err) => match err {
                ReservationError::RoleViolation => StatusCode::FORBIDDEN,
                ReservationError::DateConflict
                | ReservationError::InvalidTransition { .. }
                | ReservationError::UnknownStatus { .. }
                | ReservationError::AlreadyCancelled => StatusCode::CONFLICT,
                ReservationError::PropertyUnavailable
                | ReservationError::CapacityExceeded { .. }
                | ReservationError::InvalidDateRange => StatusCode::BAD_REQUEST,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = match &self.0 {
            // Internal failures keep their detail in the logs, not the body
            DomainError::Database { message } | DomainError::Internal { message } => {
                tracing::error!(error = %message, "internal error serving request");
                ErrorResponse::new(self.0.error_code(), "An internal error occurred")
            }
            DomainError::Reservation(ReservationError::CapacityExceeded { max_guests }) => {
                ErrorResponse::new(self.0.error_code(), self.0.to_string())
                    .add_detail("max_guests", max_guests)
            }
            other => ErrorResponse::new(other.error_code(), other.to_string()),
        };
        HttpResponse::build(status).json(body)
    }
}

/// 401 response with the standard error body
pub fn unauthorized(message: &str) -> actix_web::Error {
    let response = HttpResponse::Unauthorized()
        .json(ErrorResponse::new(error_codes::UNAUTHORIZED, message));
    InternalError::from_response(message.to_owned(), response).into()
}

/// 400 response carrying per-field validation messages
pub fn validation_error(errors: ValidationErrors) -> actix_web::Error {
    let mut field_errors: HashMap<String, Vec<String>> = HashMap::new();
    for (field, errors) in errors.field_errors() {
        let messages = errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        field_errors.insert(field.to_string(), messages);
    }

    let body = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Request validation failed")
        .add_detail("fields", field_errors);
    let response = HttpResponse::BadRequest().json(body);
    InternalError::from_response("Request validation failed".to_string(), response).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (DomainError::not_found("Reservation"), StatusCode::NOT_FOUND),
            (
                DomainError::forbidden("nope"),
                StatusCode::FORBIDDEN,
            ),
            (
                ReservationError::RoleViolation.into(),
                StatusCode::FORBIDDEN,
            ),
            (ReservationError::DateConflict.into(), StatusCode::CONFLICT),
            (
                ReservationError::AlreadyCancelled.into(),
                StatusCode::CONFLICT,
            ),
            (
                ReservationError::InvalidDateRange.into(),
                StatusCode::BAD_REQUEST,
            ),
            (
                ReservationError::CapacityExceeded { max_guests: 2 }.into(),
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::Database {
                    message: "gone".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError(err).status_code(), expected);
        }
    }

    #[test]
    fn test_internal_errors_do_not_leak_detail() {
        let err = ApiError(DomainError::Database {
            message: "connection refused to db-host:3306".to_string(),
        });
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
