//! Period aggregation of shift figures.
//!
//! Only shifts whose workplace resolves are aggregated. A shift with a
//! dangling workplace reference is skipped outright: it adds nothing to the
//! totals, the shift count or the work-pattern rates.
//!
//! Earnings totals saturate at `Decimal::MAX` rather than overflowing.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::models::{
    DateRange, PeriodStats, Shift, WeeklyStats, WorkPattern, Workplace, WorkplaceStats,
    YearlyStats, find_workplace,
};

use super::day_detection::is_holiday;
use super::earnings::calculate_earnings;
use super::night_shift::is_night_shift;
use super::periods::{month_range, year_range};
use super::working_time::working_minutes;

/// Returns the shifts in `range` whose workplace resolves, paired with it.
fn resolved_in_range<'a>(
    range: DateRange,
    shifts: &'a [Shift],
    workplaces: &'a [Workplace],
) -> Vec<(&'a Shift, &'a Workplace)> {
    let mut skipped = 0usize;
    let mut resolved = Vec::new();
    for shift in shifts.iter().filter(|s| range.contains(s.date)) {
        match find_workplace(workplaces, shift.workplace_id) {
            Some(workplace) => resolved.push((shift, workplace)),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        debug!(
            start = %range.start,
            end = %range.end,
            skipped,
            "Skipped shifts with unknown workplace"
        );
    }
    resolved
}

/// Aggregates shifts anchored inside `range` into period statistics.
///
/// Per-workplace entries are sorted by earnings (highest first), then by
/// workplace priority and name.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::aggregate_stats;
/// use shift_engine::models::{DateRange, Shift, Workplace};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let cafe = Workplace::new("Cafe", Decimal::new(1000, 0));
/// let date = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// let shift = Shift::new(cafe.id, date, date.and_hms_opt(9, 0, 0).unwrap(), date.and_hms_opt(12, 0, 0).unwrap());
///
/// let range = DateRange::new(date, date.succ_opt().unwrap());
/// let stats = aggregate_stats(range, &[shift], &[cafe]);
/// assert_eq!(stats.total_shifts, 1);
/// assert_eq!(stats.total_working_minutes, 180);
/// assert_eq!(stats.total_earnings, Decimal::new(3000, 0));
/// ```
pub fn aggregate_stats(range: DateRange, shifts: &[Shift], workplaces: &[Workplace]) -> PeriodStats {
    let mut stats = PeriodStats::empty(range);
    let mut per_workplace: HashMap<Uuid, WorkplaceStats> = HashMap::new();

    for (shift, workplace) in resolved_in_range(range, shifts, workplaces) {
        let minutes = working_minutes(shift);
        let earnings = calculate_earnings(shift, Some(workplace), 1).breakdown.total;

        stats.total_shifts += 1;
        stats.total_working_minutes += minutes;
        stats.total_earnings = stats.total_earnings.saturating_add(earnings);

        let entry = per_workplace
            .entry(workplace.id)
            .or_insert_with(|| WorkplaceStats {
                workplace: workplace.clone(),
                shift_count: 0,
                working_minutes: 0,
                earnings: Decimal::ZERO,
            });
        entry.shift_count += 1;
        entry.working_minutes += minutes;
        entry.earnings = entry.earnings.saturating_add(earnings);
    }

    let mut per_workplace: Vec<WorkplaceStats> = per_workplace.into_values().collect();
    per_workplace.sort_by(|a, b| {
        b.earnings
            .cmp(&a.earnings)
            .then_with(|| a.workplace.priority.cmp(&b.workplace.priority))
            .then_with(|| a.workplace.name.cmp(&b.workplace.name))
    });
    stats.per_workplace = per_workplace;

    debug!(
        start = %range.start,
        end = %range.end,
        total_shifts = stats.total_shifts,
        total_earnings = %stats.total_earnings,
        "Aggregated period statistics"
    );
    stats
}

/// Analyzes when and how the user works within `range`.
///
/// Rates are percentages of the shift count, not of minutes. The busiest
/// weekday is the first weekday with the highest shift count, scanning the
/// week from `week_start`.
pub fn analyze_work_pattern(
    range: DateRange,
    shifts: &[Shift],
    workplaces: &[Workplace],
    week_start: Weekday,
) -> WorkPattern {
    let resolved = resolved_in_range(range, shifts, workplaces);
    if resolved.is_empty() {
        return WorkPattern {
            busiest_weekday: None,
            average_hours_per_day: Decimal::ZERO,
            night_shift_rate: Decimal::ZERO,
            holiday_work_rate: Decimal::ZERO,
        };
    }

    let mut weekday_counts = [0u32; 7];
    let mut night_shifts = 0u32;
    let mut holiday_shifts = 0u32;
    let mut total_minutes = 0i64;

    for (shift, _) in &resolved {
        weekday_counts[shift.date.weekday().num_days_from_monday() as usize] += 1;
        if is_night_shift(shift) {
            night_shifts += 1;
        }
        if is_holiday(shift) {
            holiday_shifts += 1;
        }
        total_minutes += working_minutes(shift);
    }

    let count_for = |weekday: Weekday| weekday_counts[weekday.num_days_from_monday() as usize];
    let mut busiest = week_start;
    let mut weekday = week_start.succ();
    while weekday != week_start {
        if count_for(weekday) > count_for(busiest) {
            busiest = weekday;
        }
        weekday = weekday.succ();
    }

    let shift_count = Decimal::from(resolved.len());
    let days = Decimal::from(range.days().max(1));
    let total_hours = Decimal::from(total_minutes) / Decimal::from(60);

    WorkPattern {
        busiest_weekday: Some(busiest),
        average_hours_per_day: total_hours / days,
        night_shift_rate: Decimal::from(night_shifts) * Decimal::ONE_HUNDRED / shift_count,
        holiday_work_rate: Decimal::from(holiday_shifts) * Decimal::ONE_HUNDRED / shift_count,
    }
}

/// Totals for the seven days starting at `week_start`.
pub fn weekly_stats(week_start: NaiveDate, shifts: &[Shift], workplaces: &[Workplace]) -> WeeklyStats {
    let mut resolved = resolved_in_range(DateRange::week_from(week_start), shifts, workplaces);
    resolved.sort_by_key(|(s, _)| (s.start_time, s.id));

    let mut total_working_minutes = 0;
    let mut total_earnings = Decimal::ZERO;
    for (shift, workplace) in &resolved {
        total_working_minutes += working_minutes(shift);
        let earnings = calculate_earnings(shift, Some(workplace), 1).breakdown.total;
        total_earnings = total_earnings.saturating_add(earnings);
    }

    WeeklyStats {
        week_start,
        shift_ids: resolved.iter().map(|(s, _)| s.id).collect(),
        total_working_minutes,
        total_earnings,
    }
}

/// Totals for a calendar year, with one [`PeriodStats`] per month.
///
/// Returns `None` only for years chrono cannot represent.
pub fn yearly_stats(year: i32, shifts: &[Shift], workplaces: &[Workplace]) -> Option<YearlyStats> {
    let range = year_range(year)?;

    let monthly: Vec<PeriodStats> = (1..=12)
        .filter_map(|month| NaiveDate::from_ymd_opt(year, month, 1))
        .map(|first| aggregate_stats(month_range(first), shifts, workplaces))
        .collect();

    let total_shifts: u32 = monthly.iter().map(|m| m.total_shifts).sum();
    let total_working_minutes: i64 = monthly.iter().map(|m| m.total_working_minutes).sum();
    let total_earnings = monthly
        .iter()
        .fold(Decimal::ZERO, |total, m| total.saturating_add(m.total_earnings));

    debug!(year, start = %range.start, total_shifts, "Aggregated yearly statistics");

    Some(YearlyStats {
        year,
        monthly,
        total_shifts,
        total_working_minutes,
        total_earnings,
    })
}
