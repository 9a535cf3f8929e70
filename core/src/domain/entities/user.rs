//! User types as seen by the reservation domain.
//!
//! Registration and authentication live in a separate identity service; the
//! reservation core only needs the caller's role and, for projections, a
//! user's display fields.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ReservationError;

/// Role category of a user
///
/// Roles are a closed set validated at the boundary; an unrecognized role
/// claim is rejected before it reaches any operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Lists properties; decides on reservation requests
    Owner,
    /// Books properties
    Renter,
}

impl UserRole {
    /// Parse a role from its wire representation (case-insensitive)
    pub fn parse(value: &str) -> Result<Self, ReservationError> {
        match value.to_lowercase().as_str() {
            "owner" => Ok(UserRole::Owner),
            "renter" => Ok(UserRole::Renter),
            _ => Err(ReservationError::RoleViolation),
        }
    }

    /// Wire representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Owner => "owner",
            UserRole::Renter => "renter",
        }
    }

    /// Whether this role may create reservations
    pub fn may_book(&self) -> bool {
        matches!(self, UserRole::Renter)
    }
}

/// Display fields for a user, denormalized into reservation projections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,
}
