//! Day-type detection for the holiday differential.
//!
//! Holidays are approximated as weekends: a shift anchored to a Saturday or
//! Sunday earns the holiday differential, every other day does not.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::Shift;

/// The type of day a shift is anchored to.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{}", day_type), "Saturday");
/// assert!(day_type.is_holiday());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl DayType {
    /// Returns true for the day types that earn the holiday differential.
    pub fn is_holiday(self) -> bool {
        matches!(self, DayType::Saturday | DayType::Sunday)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type of a calendar date.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2026-01-17 is a Saturday
/// assert_eq!(get_day_type(NaiveDate::from_ymd_opt(2026, 1, 17).unwrap()), DayType::Saturday);
/// // 2026-01-14 is a Wednesday
/// assert_eq!(get_day_type(NaiveDate::from_ymd_opt(2026, 1, 14).unwrap()), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Returns true if the shift's anchor date is a Saturday or Sunday.
///
/// Only the anchor date matters: a Friday night shift running into Saturday
/// morning is not a holiday shift.
pub fn is_holiday(shift: &Shift) -> bool {
    get_day_type(shift.date).is_holiday()
}
