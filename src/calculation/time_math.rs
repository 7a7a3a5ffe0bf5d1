//! Date and interval arithmetic shared by the rest of the engine.
//!
//! All instants are naive local date-times; the engine never converts between
//! time zones.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Hour at which the night window opens (inclusive).
pub const NIGHT_START_HOUR: u32 = 22;

/// Hour at which the night window closes on the following day (exclusive).
pub const NIGHT_END_HOUR: u32 = 5;

/// A half-open `[start, end)` interval between two instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// Inclusive start.
    pub start: NaiveDateTime,
    /// Exclusive end.
    pub end: NaiveDateTime,
}

impl Interval {
    /// Creates an interval. No ordering check is made; see [`Interval::is_empty`].
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Returns true if the interval contains no instant.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns the length in whole minutes, or zero for an empty interval.
    pub fn minutes(&self) -> i64 {
        minutes_between(self.start, self.end).max(0)
    }
}

/// Returns the whole minutes from `a` to `b`, truncated toward zero.
///
/// The result is negative if `b` is before `a`; callers that want a duration
/// clamp it themselves.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::minutes_between;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let nine = day.and_hms_opt(9, 0, 0).unwrap();
/// let five = day.and_hms_opt(17, 0, 0).unwrap();
/// assert_eq!(minutes_between(nine, five), 480);
/// assert_eq!(minutes_between(five, nine), -480);
/// ```
pub fn minutes_between(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    (b - a).num_minutes()
}

/// Returns true if both instants fall on the same calendar day.
pub fn same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

/// Intersects two intervals.
///
/// Returns `None` when the latest start is not before the earliest end.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::{clamp_interval, Interval};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let at = |h| day.and_hms_opt(h, 0, 0).unwrap();
///
/// let overlap = clamp_interval(Interval::new(at(9), at(17)), Interval::new(at(15), at(20)));
/// assert_eq!(overlap, Some(Interval::new(at(15), at(17))));
///
/// assert_eq!(clamp_interval(Interval::new(at(9), at(12)), Interval::new(at(12), at(14))), None);
/// ```
pub fn clamp_interval(a: Interval, b: Interval) -> Option<Interval> {
    let clamped = Interval::new(a.start.max(b.start), a.end.min(b.end));
    if clamped.is_empty() {
        None
    } else {
        Some(clamped)
    }
}

/// Returns the night window anchored to `day`: 22:00 on `day` until 05:00 on the next day.
///
/// On the last day chrono can represent, the window is cut off at
/// [`NaiveDateTime::MAX`].
///
/// # Example
///
/// ```
/// use shift_engine::calculation::night_window_for;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let window = night_window_for(day);
/// assert_eq!(window.start, day.and_hms_opt(22, 0, 0).unwrap());
/// assert_eq!(window.end, NaiveDate::from_ymd_opt(2026, 1, 16).unwrap().and_hms_opt(5, 0, 0).unwrap());
/// ```
pub fn night_window_for(day: NaiveDate) -> Interval {
    let midnight = day.and_time(NaiveTime::MIN);
    let at = |hours: u32| {
        midnight
            .checked_add_signed(Duration::hours(i64::from(hours)))
            .unwrap_or(NaiveDateTime::MAX)
    };
    Interval::new(at(NIGHT_START_HOUR), at(24 + NIGHT_END_HOUR))
}

/// Returns true if the given hour of day lies in `[22, 24) ∪ [0, 5)`.
pub fn is_night_hour(hour: u32) -> bool {
    hour >= NIGHT_START_HOUR || hour < NIGHT_END_HOUR
}
