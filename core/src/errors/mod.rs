//! Domain-specific error types and error handling.
//!
//! Every failure in the reservation flow keeps its own variant and error
//! code; the frontend branches on them, so none may collapse into a generic
//! failure.

use rp_shared::types::response::{error_codes, ErrorResponse};
use thiserror::Error;

use crate::domain::entities::reservation::ReservationStatus;

/// Reservation lifecycle errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    #[error("Owners cannot make reservations")]
    RoleViolation,

    #[error("Property is not available")]
    PropertyUnavailable,

    #[error("Property can only accommodate {max_guests} guests")]
    CapacityExceeded { max_guests: u32 },

    #[error("Property is not available for the selected dates")]
    DateConflict,

    #[error("Check-out date must be after check-in date")]
    InvalidDateRange,

    #[error("Cannot transition reservation from {current} to {requested}")]
    InvalidTransition {
        current: ReservationStatus,
        requested: ReservationStatus,
    },

    #[error("Invalid reservation status: {value}")]
    UnknownStatus { value: String },

    #[error("Reservation is already cancelled")]
    AlreadyCancelled,
}

impl ReservationError {
    /// Stable error code for API clients
    pub fn error_code(&self) -> &'static str {
        match self {
            ReservationError::RoleViolation => error_codes::ROLE_VIOLATION,
            ReservationError::PropertyUnavailable => error_codes::PROPERTY_UNAVAILABLE,
            ReservationError::CapacityExceeded { .. } => error_codes::CAPACITY_EXCEEDED,
            ReservationError::DateConflict => error_codes::DATE_CONFLICT,
            ReservationError::InvalidDateRange => error_codes::INVALID_DATE_RANGE,
            // An unparseable status never reaches the state machine; clients
            // see it under the same code as a rejected transition.
            ReservationError::InvalidTransition { .. } | ReservationError::UnknownStatus { .. } => {
                error_codes::INVALID_TRANSITION
            }
            ReservationError::AlreadyCancelled => error_codes::ALREADY_CANCELLED,
        }
    }
}

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to the reservation-specific error taxonomy
    #[error(transparent)]
    Reservation(#[from] ReservationError),
}

impl DomainError {
    /// Shorthand for a `NotFound` error
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    /// Shorthand for a `Forbidden` error
    pub fn forbidden(message: impl Into<String>) -> Self {
        DomainError::Forbidden {
            message: message.into(),
        }
    }

    /// Stable error code for API clients
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::NotFound { .. } => error_codes::NOT_FOUND,
            DomainError::Forbidden { .. } => error_codes::FORBIDDEN,
            DomainError::Database { .. } => error_codes::DATABASE_ERROR,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
            DomainError::Reservation(err) => err.error_code(),
        }
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        let response = ErrorResponse::new(err.error_code(), err.to_string());
        match err {
            DomainError::Reservation(ReservationError::CapacityExceeded { max_guests }) => {
                response.add_detail("max_guests", max_guests)
            }
            _ => response,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            ReservationError::RoleViolation,
            ReservationError::PropertyUnavailable,
            ReservationError::CapacityExceeded { max_guests: 4 },
            ReservationError::DateConflict,
            ReservationError::InvalidDateRange,
            ReservationError::AlreadyCancelled,
        ];
        let codes: std::collections::HashSet<_> =
            errors.iter().map(|e| e.error_code()).collect();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_unknown_status_maps_to_invalid_transition_code() {
        let err = ReservationError::UnknownStatus {
            value: "approved".to_string(),
        };
        assert_eq!(err.error_code(), "INVALID_TRANSITION");
    }

    #[test]
    fn test_capacity_error_response_carries_limit() {
        let err = DomainError::from(ReservationError::CapacityExceeded { max_guests: 4 });
        let response: ErrorResponse = err.into();
        assert_eq!(response.error, "CAPACITY_EXCEEDED");
        assert_eq!(response.details.unwrap()["max_guests"], 4);
    }

    #[test]
    fn test_not_found_message() {
        let err = DomainError::not_found("Reservation");
        assert_eq!(err.to_string(), "Reservation not found");
        assert_eq!(err.error_code(), "NOT_FOUND");
    }
}
