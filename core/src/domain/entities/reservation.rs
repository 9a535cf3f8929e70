//! Reservation entity and its status state machine.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::StayRange;
use crate::errors::ReservationError;

/// Maximum length of the free-text special requests field
pub const MAX_SPECIAL_REQUESTS_LEN: usize = 500;

/// Status of a reservation
///
/// Transitions are monotonic: Pending -> Confirmed | Rejected (owner),
/// Pending | Confirmed -> Cancelled (requester), Confirmed -> Completed
/// (elapsed stay, driven by a scheduled process). Rejected, Cancelled and
/// Completed are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// Awaiting a decision from the property owner
    Pending,
    /// Accepted by the owner; blocks the property's dates
    Confirmed,
    /// Declined by the owner
    Rejected,
    /// Withdrawn by the requesting user
    Cancelled,
    /// Stay elapsed
    Completed,
}

impl ReservationStatus {
    /// Parse a status from its wire representation (case-insensitive)
    pub fn parse(value: &str) -> Result<Self, ReservationError> {
        match value.to_lowercase().as_str() {
            "pending" => Ok(ReservationStatus::Pending),
            "confirmed" => Ok(ReservationStatus::Confirmed),
            "rejected" => Ok(ReservationStatus::Rejected),
            "cancelled" => Ok(ReservationStatus::Cancelled),
            "completed" => Ok(ReservationStatus::Completed),
            _ => Err(ReservationError::UnknownStatus {
                value: value.to_string(),
            }),
        }
    }

    /// Wire representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Rejected => "rejected",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::Completed => "completed",
        }
    }

    /// Whether no further transitions are permitted from this status
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ReservationStatus::Rejected
                | ReservationStatus::Cancelled
                | ReservationStatus::Completed
        )
    }

    /// Whether this status blocks the property's dates
    ///
    /// Confirmed is the only blocking status.
    pub fn blocks_dates(&self) -> bool {
        matches!(self, ReservationStatus::Confirmed)
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A booking request for a property by a user over a date range
///
/// Reservations are never deleted; their lifecycle is expressed purely
/// through status transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique identifier for the reservation
    pub id: Uuid,

    /// Requesting user
    pub user_id: Uuid,

    /// Booked property
    pub property_id: Uuid,

    /// Stay dates, half-open [check_in, check_out)
    pub stay: StayRange,

    /// Number of guests
    pub guest_count: u32,

    /// Total price, nights x nightly rate at time of creation
    pub total_amount: Decimal,

    /// Current lifecycle status
    pub status: ReservationStatus,

    /// Optional free-text request from the guest
    pub special_requests: Option<String>,

    /// Timestamp when the reservation was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the owner confirmed, if ever
    pub confirmed_at: Option<DateTime<Utc>>,
}

impl Reservation {
    /// Creates a new pending reservation
    pub fn new(
        user_id: Uuid,
        property_id: Uuid,
        stay: StayRange,
        guest_count: u32,
        total_amount: Decimal,
        special_requests: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            property_id,
            stay,
            guest_count,
            total_amount,
            status: ReservationStatus::Pending,
            special_requests,
            created_at: Utc::now(),
            confirmed_at: None,
        }
    }

    /// Owner accepts a pending reservation
    pub fn confirm(&mut self) -> Result<(), ReservationError> {
        self.require_pending(ReservationStatus::Confirmed)?;
        self.status = ReservationStatus::Confirmed;
        self.confirmed_at = Some(Utc::now());
        Ok(())
    }

    /// Owner declines a pending reservation
    pub fn reject(&mut self) -> Result<(), ReservationError> {
        self.require_pending(ReservationStatus::Rejected)?;
        self.status = ReservationStatus::Rejected;
        Ok(())
    }

    /// Requester withdraws the reservation
    ///
    /// Allowed from Pending and Confirmed. A second cancel reports
    /// `AlreadyCancelled`; a completed stay cannot be cancelled.
    pub fn cancel(&mut self) -> Result<(), ReservationError> {
        match self.status {
            ReservationStatus::Cancelled => Err(ReservationError::AlreadyCancelled),
            ReservationStatus::Completed | ReservationStatus::Rejected => {
                Err(ReservationError::InvalidTransition {
                    current: self.status,
                    requested: ReservationStatus::Cancelled,
                })
            }
            ReservationStatus::Pending | ReservationStatus::Confirmed => {
                self.status = ReservationStatus::Cancelled;
                Ok(())
            }
        }
    }

    /// Marks an elapsed confirmed stay as completed
    ///
    /// Reserved for the scheduled completion process; no API operation
    /// triggers it.
    pub fn complete(&mut self) -> Result<(), ReservationError> {
        if self.status != ReservationStatus::Confirmed {
            return Err(ReservationError::InvalidTransition {
                current: self.status,
                requested: ReservationStatus::Completed,
            });
        }
        self.status = ReservationStatus::Completed;
        Ok(())
    }

    fn require_pending(&self, requested: ReservationStatus) -> Result<(), ReservationError> {
        if self.status != ReservationStatus::Pending {
            return Err(ReservationError::InvalidTransition {
                current: self.status,
                requested,
            });
        }
        Ok(())
    }
}
