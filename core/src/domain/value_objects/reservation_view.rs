//! Denormalized reservation projection returned to callers.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::property::Property;
use crate::domain::entities::reservation::{Reservation, ReservationStatus};
use crate::domain::entities::user::UserSummary;

/// Full reservation projection including requester and property display
/// fields supplied by the lookup collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationView {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_email: String,
    pub property_id: Uuid,
    pub property_title: String,
    pub property_location: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guest_count: u32,
    pub total_amount: Decimal,
    pub status: ReservationStatus,
    pub special_requests: Option<String>,
    pub created_at: DateTime<Utc>,
    pub confirmed_at: Option<DateTime<Utc>>,
}

impl ReservationView {
    /// Assemble the projection from a reservation and its related records
    pub fn assemble(reservation: &Reservation, user: &UserSummary, property: &Property) -> Self {
        Self {
            id: reservation.id,
            user_id: reservation.user_id,
            user_name: user.name.clone(),
            user_email: user.email.clone(),
            property_id: reservation.property_id,
            property_title: property.title.clone(),
            property_location: property.location.clone(),
            check_in: reservation.stay.check_in,
            check_out: reservation.stay.check_out,
            guest_count: reservation.guest_count,
            total_amount: reservation.total_amount,
            status: reservation.status,
            special_requests: reservation.special_requests.clone(),
            created_at: reservation.created_at,
            confirmed_at: reservation.confirmed_at,
        }
    }
}
