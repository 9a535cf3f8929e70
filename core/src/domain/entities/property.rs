//! Property entity as seen by the reservation domain.
//!
//! Property CRUD lives elsewhere; the reservation core only reads the fields
//! that drive availability, capacity and pricing decisions, plus the display
//! fields denormalized into reservation projections.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rentable property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Unique identifier for the property
    pub id: Uuid,

    /// Owning user
    pub owner_id: Uuid,

    /// Listing title
    pub title: String,

    /// Human-readable location
    pub location: String,

    /// Nightly rate
    pub price_per_night: Decimal,

    /// Maximum guest capacity
    pub max_guests: u32,

    /// Whether the owner currently accepts bookings at all
    pub is_available: bool,
}

impl Property {
    /// Whether the property can host the requested number of guests
    pub fn accommodates(&self, guest_count: u32) -> bool {
        guest_count <= self.max_guests
    }
}
