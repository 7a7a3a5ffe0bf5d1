//! Calendar period helpers for statistics.

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::DateRange;

/// Returns the first day of the week containing `date`, or the first
/// representable day when that week starts before it.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::start_of_week;
/// use chrono::{NaiveDate, Weekday};
///
/// // 2026-01-14 is a Wednesday
/// let date = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// assert_eq!(start_of_week(date, Weekday::Sun), NaiveDate::from_ymd_opt(2026, 1, 11).unwrap());
/// assert_eq!(start_of_week(date, Weekday::Mon), NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
/// ```
pub fn start_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset =
        (date.weekday().num_days_from_monday() + 7 - week_start.num_days_from_monday()) % 7;
    date.checked_sub_signed(Duration::days(i64::from(offset)))
        .unwrap_or(NaiveDate::MIN)
}

/// Returns the first day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Returns the whole calendar month containing `date`.
pub fn month_range(date: NaiveDate) -> DateRange {
    let start = start_of_month(date);
    let end = start
        .checked_add_months(Months::new(1))
        .unwrap_or(NaiveDate::MAX);
    DateRange::new(start, end)
}

/// Returns the whole calendar year, or `None` outside chrono's supported range.
pub fn year_range(year: i32) -> Option<DateRange> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let end = NaiveDate::from_ymd_opt(year + 1, 1, 1)?;
    Some(DateRange::new(start, end))
}

/// Preset reporting periods, resolved relative to "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatsRange {
    /// The current week.
    ThisWeek,
    /// The current calendar month.
    ThisMonth,
    /// The previous calendar month.
    LastMonth,
    /// Three months back from today, through today.
    Last3Months,
    /// Six months back from today, through today.
    Last6Months,
    /// The current calendar year.
    ThisYear,
}

impl StatsRange {
    /// All presets in display order.
    pub const ALL: [StatsRange; 6] = [
        StatsRange::ThisWeek,
        StatsRange::ThisMonth,
        StatsRange::LastMonth,
        StatsRange::Last3Months,
        StatsRange::Last6Months,
        StatsRange::ThisYear,
    ];

    /// Resolves the preset to a concrete `[start, end)` range.
    ///
    /// Rolling ranges include `today`. Near the ends of chrono's calendar the
    /// range is cut off at the last representable day, which may leave it
    /// empty.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_engine::calculation::StatsRange;
    /// use chrono::{NaiveDate, Weekday};
    ///
    /// let today = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap();
    /// let range = StatsRange::LastMonth.date_range(today, Weekday::Sun);
    /// assert_eq!(range.start, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
    /// assert_eq!(range.end, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
    /// ```
    pub fn date_range(self, today: NaiveDate, week_start: Weekday) -> DateRange {
        let tomorrow = today.succ_opt().unwrap_or(NaiveDate::MAX);
        match self {
            StatsRange::ThisWeek => DateRange::week_from(start_of_week(today, week_start)),
            StatsRange::ThisMonth => month_range(today),
            StatsRange::LastMonth => {
                let previous = start_of_month(today)
                    .checked_sub_months(Months::new(1))
                    .unwrap_or(today);
                month_range(previous)
            }
            StatsRange::Last3Months => DateRange::new(
                today.checked_sub_months(Months::new(3)).unwrap_or(today),
                tomorrow,
            ),
            StatsRange::Last6Months => DateRange::new(
                today.checked_sub_months(Months::new(6)).unwrap_or(today),
                tomorrow,
            ),
            StatsRange::ThisYear => year_range(today.year()).unwrap_or_else(|| {
                let new_year = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
                DateRange::new(new_year, tomorrow)
            }),
        }
    }
}
