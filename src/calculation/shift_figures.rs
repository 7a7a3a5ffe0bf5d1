//! Assembly of every derived figure for a shift.

use tracing::warn;

use crate::models::{
    Shift, ShiftFigures, UNKNOWN_WORKPLACE_NAME, Workplace, find_workplace,
};

use super::day_detection::is_holiday;
use super::earnings::calculate_earnings;
use super::night_shift::{is_night_shift, night_working_minutes};
use super::working_time::{actual_working_minutes, working_minutes};

/// Formats the planned start and end as `HH:MM-HH:MM`.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::format_time_range;
/// use shift_engine::models::Shift;
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let shift = Shift::new(
///     Uuid::new_v4(),
///     date,
///     date.and_hms_opt(9, 0, 0).unwrap(),
///     date.and_hms_opt(17, 30, 0).unwrap(),
/// );
/// assert_eq!(format_time_range(&shift), "09:00-17:30");
/// ```
pub fn format_time_range(shift: &Shift) -> String {
    format!(
        "{}-{}",
        shift.start_time.format("%H:%M"),
        shift.end_time.format("%H:%M")
    )
}

/// Derives all figures for a shift, resolving its workplace from `workplaces`.
///
/// A dangling workplace reference is not an error: durations are still
/// computed from the shift itself while earnings fall back to zero.
pub fn derive_shift_figures(shift: &Shift, workplaces: &[Workplace]) -> ShiftFigures {
    let workplace = find_workplace(workplaces, shift.workplace_id);
    if workplace.is_none() {
        warn!(
            shift_id = %shift.id,
            workplace_id = %shift.workplace_id,
            "Shift references an unknown workplace"
        );
    }

    let earnings = calculate_earnings(shift, workplace, 1).breakdown;

    ShiftFigures {
        shift_id: shift.id,
        workplace_id: shift.workplace_id,
        workplace_name: workplace
            .map(|w| w.name.clone())
            .unwrap_or_else(|| UNKNOWN_WORKPLACE_NAME.to_string()),
        workplace_resolved: workplace.is_some(),
        date: shift.date,
        time_range: format_time_range(shift),
        working_minutes: working_minutes(shift),
        actual_working_minutes: actual_working_minutes(shift),
        night_working_minutes: night_working_minutes(shift),
        is_night_shift: is_night_shift(shift),
        is_holiday: is_holiday(shift),
        earnings,
    }
}

/// Derives figures for every shift, ordered by start time.
pub fn derive_all(shifts: &[Shift], workplaces: &[Workplace]) -> Vec<ShiftFigures> {
    let mut ordered: Vec<&Shift> = shifts.iter().collect();
    ordered.sort_by_key(|s| (s.start_time, s.id));
    ordered
        .into_iter()
        .map(|shift| derive_shift_figures(shift, workplaces))
        .collect()
}
