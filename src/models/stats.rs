//! Period statistics models.
//!
//! These are the outputs of the aggregation functions in
//! [`crate::calculation`]; like every derived value they are recomputed from
//! the current records whenever needed.

use chrono::{Duration, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Workplace;

const MINUTES_PER_HOUR: i64 = 60;

fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::from(minutes) / Decimal::from(MINUTES_PER_HOUR)
}

/// A half-open `[start, end)` range of calendar days.
///
/// # Example
///
/// ```
/// use shift_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
/// );
/// assert_eq!(range.days(), 31);
/// assert!(range.contains(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()));
/// assert!(!range.contains(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day in the range.
    pub start: NaiveDate,
    /// First day after the range.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range from `start` (inclusive) to `end` (exclusive).
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A seven-day range starting at `start`, cut off at the last
    /// representable day.
    pub fn week_from(start: NaiveDate) -> Self {
        let end = start
            .checked_add_signed(Duration::days(7))
            .unwrap_or(NaiveDate::MAX);
        Self::new(start, end)
    }

    /// Returns true if `date` falls inside the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Returns the number of calendar days in the range, zero if inverted.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days().max(0)
    }
}

/// Totals for a single workplace within a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkplaceStats {
    /// The workplace these totals belong to.
    pub workplace: Workplace,
    /// Number of shifts worked there.
    pub shift_count: u32,
    /// Total planned working minutes.
    pub working_minutes: i64,
    /// Total projected earnings.
    pub earnings: Decimal,
}

impl WorkplaceStats {
    /// Total working time in hours.
    pub fn working_hours(&self) -> Decimal {
        minutes_to_hours(self.working_minutes)
    }

    /// Average shift length in hours, zero when there are no shifts.
    pub fn average_shift_hours(&self) -> Decimal {
        if self.shift_count == 0 {
            return Decimal::ZERO;
        }
        self.working_hours() / Decimal::from(self.shift_count)
    }

    /// This workplace's share of `total_earnings` as a percentage.
    pub fn earnings_share(&self, total_earnings: Decimal) -> Decimal {
        if total_earnings <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        self.earnings
            .checked_div(total_earnings)
            .and_then(|share| share.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::ZERO)
    }
}

/// Totals for an arbitrary period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodStats {
    /// The period covered.
    pub range: DateRange,
    /// Number of shifts with a resolved workplace.
    pub total_shifts: u32,
    /// Total planned working minutes.
    pub total_working_minutes: i64,
    /// Total projected earnings.
    pub total_earnings: Decimal,
    /// Per-workplace totals, highest earnings first.
    pub per_workplace: Vec<WorkplaceStats>,
}

impl PeriodStats {
    /// Statistics for a period without any shifts.
    pub fn empty(range: DateRange) -> Self {
        Self {
            range,
            total_shifts: 0,
            total_working_minutes: 0,
            total_earnings: Decimal::ZERO,
            per_workplace: Vec::new(),
        }
    }

    /// Total working time in hours.
    pub fn total_working_hours(&self) -> Decimal {
        minutes_to_hours(self.total_working_minutes)
    }

    /// Average earnings per working hour, zero when nothing was worked or the
    /// quotient does not fit in a `Decimal`.
    pub fn average_hourly_earnings(&self) -> Decimal {
        if self.total_working_minutes == 0 {
            return Decimal::ZERO;
        }
        self.total_earnings
            .checked_div(self.total_working_hours())
            .unwrap_or(Decimal::ZERO)
    }
}

/// Work-pattern analytics for a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkPattern {
    /// The weekday with the most shifts, `None` when there are no shifts.
    pub busiest_weekday: Option<Weekday>,
    /// Working hours divided by the number of calendar days in the period.
    pub average_hours_per_day: Decimal,
    /// Percentage of shifts flagged as night shifts.
    pub night_shift_rate: Decimal,
    /// Percentage of shifts on a holiday.
    pub holiday_work_rate: Decimal,
}

/// Totals for one week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyStats {
    /// First day of the week.
    pub week_start: NaiveDate,
    /// The counted shifts, ordered by start time.
    pub shift_ids: Vec<Uuid>,
    /// Total planned working minutes.
    pub total_working_minutes: i64,
    /// Total projected earnings.
    pub total_earnings: Decimal,
}

impl WeeklyStats {
    /// Total working time in hours.
    pub fn total_working_hours(&self) -> Decimal {
        minutes_to_hours(self.total_working_minutes)
    }
}

/// Totals for one calendar year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyStats {
    /// The calendar year.
    pub year: i32,
    /// One entry per month, January first.
    pub monthly: Vec<PeriodStats>,
    /// Number of shifts with a resolved workplace.
    pub total_shifts: u32,
    /// Total planned working minutes.
    pub total_working_minutes: i64,
    /// Total projected earnings.
    pub total_earnings: Decimal,
}

impl YearlyStats {
    /// Total working time in hours.
    pub fn total_working_hours(&self) -> Decimal {
        minutes_to_hours(self.total_working_minutes)
    }

    /// Average earnings over the months that had at least one shift.
    pub fn average_monthly_earnings(&self) -> Decimal {
        let worked_months = self.monthly.iter().filter(|m| m.total_shifts > 0).count();
        if worked_months == 0 {
            return Decimal::ZERO;
        }
        self.total_earnings / Decimal::from(worked_months)
    }
}
