//! Shift overlap model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The result of comparing two shifts on the same day.
///
/// `has_conflict` is true exactly when `overlap_minutes` is positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftOverlap {
    /// The day both shifts are anchored to.
    pub date: NaiveDate,
    /// The earlier shift of the pair (by start time, then id).
    pub first_shift_id: Uuid,
    /// The workplace of the first shift.
    pub first_workplace_id: Uuid,
    /// The later shift of the pair.
    pub second_shift_id: Uuid,
    /// The workplace of the second shift.
    pub second_workplace_id: Uuid,
    /// Overlapping minutes after travel-time adjustment.
    pub overlap_minutes: i64,
    /// Whether the two shifts conflict.
    pub has_conflict: bool,
}

impl ShiftOverlap {
    /// Returns true if the given shift is one side of this overlap.
    pub fn involves(&self, shift_id: Uuid) -> bool {
        self.first_shift_id == shift_id || self.second_shift_id == shift_id
    }
}
