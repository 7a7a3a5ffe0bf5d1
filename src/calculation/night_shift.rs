//! Night-shift detection.
//!
//! Two distinct answers are produced here and both are part of the public
//! surface: [`is_night_shift`] is an hour-granularity flag on the shift's
//! endpoints (used for badges and reminder text), while
//! [`night_working_minutes`] is the minute-level figure that drives the night
//! differential. A shift can be flagged without earning night minutes and
//! vice versa.

use chrono::Timelike;

use crate::models::Shift;

use super::time_math::{Interval, clamp_interval, is_night_hour, night_window_for};

/// Returns true if the start hour or the end hour lies in the night window.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::is_night_shift;
/// use shift_engine::models::Shift;
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let shift = Shift::new(
///     Uuid::new_v4(),
///     date,
///     date.and_hms_opt(18, 0, 0).unwrap(),
///     date.and_hms_opt(22, 30, 0).unwrap(),
/// );
/// assert!(is_night_shift(&shift));
/// ```
pub fn is_night_shift(shift: &Shift) -> bool {
    is_night_hour(shift.start_time.hour()) || is_night_hour(shift.end_time.hour())
}

/// Returns the minutes worked inside the night window anchored to the shift's date.
///
/// The break is assumed to fall inside the night window first, so up to
/// `min(break, night overlap)` minutes are deducted.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::night_working_minutes;
/// use shift_engine::models::Shift;
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let shift = Shift::new(
///     Uuid::new_v4(),
///     date,
///     date.and_hms_opt(21, 0, 0).unwrap(),
///     date.and_hms_opt(23, 30, 0).unwrap(),
/// );
/// assert_eq!(night_working_minutes(&shift), 90);
/// ```
pub fn night_working_minutes(shift: &Shift) -> i64 {
    let shift_interval = Interval::new(shift.start_time, shift.end_time);
    let Some(overlap) = clamp_interval(shift_interval, night_window_for(shift.date)) else {
        return 0;
    };

    let night_minutes = overlap.minutes();
    let night_break = i64::from(shift.break_minutes).min(night_minutes);
    (night_minutes - night_break).max(0)
}
