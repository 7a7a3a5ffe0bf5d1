//! Tabular export of shifts with their derived figures.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::derive_shift_figures;
use crate::models::{Shift, Workplace};

/// One exported shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    /// Shift id.
    pub shift_id: Uuid,
    /// Anchor date.
    pub date: NaiveDate,
    /// Workplace name, or the unknown-workplace placeholder.
    pub workplace_name: String,
    /// Planned start.
    pub start_time: NaiveDateTime,
    /// Planned end.
    pub end_time: NaiveDateTime,
    /// `HH:MM-HH:MM`.
    pub time_range: String,
    /// Break length in minutes.
    pub break_minutes: u32,
    /// Planned working minutes.
    pub working_minutes: i64,
    /// Working minutes from actuals when recorded.
    pub actual_working_minutes: i64,
    /// Night working minutes.
    pub night_working_minutes: i64,
    /// Night flag.
    pub is_night_shift: bool,
    /// Weekend flag.
    pub is_holiday: bool,
    /// Base pay.
    pub base_pay: Decimal,
    /// Night differential.
    pub night_differential: Decimal,
    /// Holiday differential.
    pub holiday_differential: Decimal,
    /// Transportation allowance.
    pub transportation_allowance: Decimal,
    /// Total projected earnings.
    pub total_earnings: Decimal,
    /// Confirmation flag.
    pub is_confirmed: bool,
    /// Memo text, empty when none.
    pub memo: String,
}

/// Builds one export row per shift, ordered by start time.
///
/// # Example
///
/// ```
/// use shift_engine::export::{export_rows, to_json};
/// use shift_engine::models::{Shift, Workplace};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let cafe = Workplace::new("Cafe", Decimal::new(1000, 0));
/// let date = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// let shift = Shift::new(
///     cafe.id,
///     date,
///     date.and_hms_opt(9, 0, 0).unwrap(),
///     date.and_hms_opt(17, 0, 0).unwrap(),
/// )
/// .with_break(60);
///
/// let rows = export_rows(&[shift], &[cafe]);
/// assert_eq!(rows[0].total_earnings, Decimal::new(7000, 0));
/// assert!(to_json(&rows).unwrap().contains("\"workplace_name\": \"Cafe\""));
/// ```
pub fn export_rows(shifts: &[Shift], workplaces: &[Workplace]) -> Vec<ExportRow> {
    let mut ordered: Vec<&Shift> = shifts.iter().collect();
    ordered.sort_by_key(|s| (s.start_time, s.id));

    ordered
        .into_iter()
        .map(|shift| {
            let figures = derive_shift_figures(shift, workplaces);
            ExportRow {
                shift_id: shift.id,
                date: shift.date,
                workplace_name: figures.workplace_name,
                start_time: shift.start_time,
                end_time: shift.end_time,
                time_range: figures.time_range,
                break_minutes: shift.break_minutes,
                working_minutes: figures.working_minutes,
                actual_working_minutes: figures.actual_working_minutes,
                night_working_minutes: figures.night_working_minutes,
                is_night_shift: figures.is_night_shift,
                is_holiday: figures.is_holiday,
                base_pay: figures.earnings.base,
                night_differential: figures.earnings.night_differential,
                holiday_differential: figures.earnings.holiday_differential,
                transportation_allowance: figures.earnings.transportation_allowance,
                total_earnings: figures.earnings.total,
                is_confirmed: shift.is_confirmed,
                memo: shift.memo.clone().unwrap_or_default(),
            }
        })
        .collect()
}

/// Renders export rows as a pretty-printed JSON array.
pub fn to_json(rows: &[ExportRow]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}
