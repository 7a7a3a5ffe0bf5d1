//! Working-time calculation for planned and actual shift times.

use crate::models::Shift;

use super::time_math::minutes_between;

/// Returns the planned working minutes: gross duration minus the break, never negative.
///
/// # Examples
///
/// ```
/// use shift_engine::calculation::working_minutes;
/// use shift_engine::models::Shift;
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// let shift = Shift::new(
///     Uuid::new_v4(),
///     date,
///     date.and_hms_opt(9, 0, 0).unwrap(),
///     date.and_hms_opt(17, 0, 0).unwrap(),
/// )
/// .with_break(60);
/// assert_eq!(working_minutes(&shift), 420);
/// ```
pub fn working_minutes(shift: &Shift) -> i64 {
    let gross = minutes_between(shift.start_time, shift.end_time);
    (gross - i64::from(shift.break_minutes)).max(0)
}

/// Returns the working minutes from the recorded actuals.
///
/// Falls back to [`working_minutes`] unless both actual instants are present.
pub fn actual_working_minutes(shift: &Shift) -> i64 {
    match (shift.actual_start_time, shift.actual_end_time) {
        (Some(start), Some(end)) => {
            let gross = minutes_between(start, end);
            (gross - i64::from(shift.actual_break_minutes)).max(0)
        }
        _ => working_minutes(shift),
    }
}
