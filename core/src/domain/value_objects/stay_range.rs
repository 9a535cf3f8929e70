//! Half-open date range for a stay.
//!
//! A stay covers [check_in, check_out): the check-in night is included, the
//! check-out day is not. This lets one booking's check-out equal another's
//! check-in on the same property without conflict. Both the booking conflict
//! check and the search-time availability query go through the single
//! `overlaps` predicate here, so the two can never disagree on boundaries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ReservationError;

/// A validated half-open [check_in, check_out) date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayRange {
    /// First night of the stay (inclusive)
    pub check_in: NaiveDate,

    /// Departure date (exclusive)
    pub check_out: NaiveDate,
}

impl StayRange {
    /// Create a stay range, requiring at least one night
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, ReservationError> {
        if check_out <= check_in {
            return Err(ReservationError::InvalidDateRange);
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Number of nights covered by the range
    ///
    /// Always >= 1 for a range built through `new`.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Half-open interval overlap test
    ///
    /// [a, b) and [c, d) overlap iff a < d and c < b. Touching boundaries
    /// (one stay's check-out equals another's check-in) do not overlap.
    pub fn overlaps(&self, other: &StayRange) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}
