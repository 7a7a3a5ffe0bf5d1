//! Shift model and related types.
//!
//! This module defines the [`Shift`] record and its optional [`Recurrence`]
//! rule. A shift only ever carries already-materialized dates; recurrence
//! expansion happens in the store.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How often a recurring shift repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceKind {
    /// Every day.
    Daily,
    /// Every seven days.
    Weekly,
    /// Every fourteen days.
    BiWeekly,
    /// Same day of every month, clamped to the month's last day.
    Monthly,
}

impl std::fmt::Display for RecurrenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecurrenceKind::Daily => write!(f, "daily"),
            RecurrenceKind::Weekly => write!(f, "weekly"),
            RecurrenceKind::BiWeekly => write!(f, "bi-weekly"),
            RecurrenceKind::Monthly => write!(f, "monthly"),
        }
    }
}

/// A repetition rule attached to a shift at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurrence {
    /// The repetition interval.
    pub kind: RecurrenceKind,
    /// The last date (inclusive) an occurrence may fall on.
    pub end_date: NaiveDate,
}

/// A work shift at a single workplace.
///
/// Start and end are full date-times, so a shift crossing midnight simply has
/// an `end_time` on the following calendar day. The `date` field is the day
/// the shift is anchored to for grouping, holiday and night-window purposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: Uuid,
    /// The workplace this shift belongs to. Not guaranteed to resolve.
    pub workplace_id: Uuid,
    /// The calendar day the shift is anchored to.
    pub date: NaiveDate,
    /// Planned start of the shift.
    pub start_time: NaiveDateTime,
    /// Planned end of the shift.
    pub end_time: NaiveDateTime,
    /// Unpaid break minutes deducted from the gross duration.
    #[serde(default)]
    pub break_minutes: u32,
    /// Free text note.
    #[serde(default)]
    pub memo: Option<String>,
    /// Bookkeeping flag set by the user once the shift is confirmed.
    #[serde(default)]
    pub is_confirmed: bool,
    /// Repetition rule the shift was created with, if any.
    #[serde(default)]
    pub recurrence: Option<Recurrence>,
    /// Recorded start, if the shift has been worked.
    #[serde(default)]
    pub actual_start_time: Option<NaiveDateTime>,
    /// Recorded end, if the shift has been worked.
    #[serde(default)]
    pub actual_end_time: Option<NaiveDateTime>,
    /// Recorded break minutes.
    #[serde(default)]
    pub actual_break_minutes: u32,
}

impl Shift {
    /// Creates a planned shift with a fresh id and no break, memo or actuals.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_engine::models::Shift;
    /// use chrono::NaiveDate;
    /// use uuid::Uuid;
    ///
    /// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
    /// let shift = Shift::new(
    ///     Uuid::new_v4(),
    ///     date,
    ///     date.and_hms_opt(9, 0, 0).unwrap(),
    ///     date.and_hms_opt(17, 0, 0).unwrap(),
    /// );
    /// assert_eq!(shift.break_minutes, 0);
    /// assert!(!shift.has_actuals());
    /// ```
    pub fn new(
        workplace_id: Uuid,
        date: NaiveDate,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            workplace_id,
            date,
            start_time,
            end_time,
            break_minutes: 0,
            memo: None,
            is_confirmed: false,
            recurrence: None,
            actual_start_time: None,
            actual_end_time: None,
            actual_break_minutes: 0,
        }
    }

    /// Returns the same shift with the given break length.
    pub fn with_break(mut self, break_minutes: u32) -> Self {
        self.break_minutes = break_minutes;
        self
    }

    /// Returns the day of the week of the anchor date.
    pub fn day_of_week(&self) -> Weekday {
        self.date.weekday()
    }

    /// Returns true if both actual instants have been recorded.
    pub fn has_actuals(&self) -> bool {
        self.actual_start_time.is_some() && self.actual_end_time.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_day_of_week() {
        // 2026-01-15 is a Thursday
        let shift = Shift::new(
            Uuid::from_u128(1),
            make_date("2026-01-15"),
            make_datetime("2026-01-15", "09:00:00"),
            make_datetime("2026-01-15", "17:00:00"),
        );
        assert_eq!(shift.day_of_week(), Weekday::Thu);

        // 2026-01-17 is a Saturday
        let saturday_shift = Shift::new(
            Uuid::from_u128(1),
            make_date("2026-01-17"),
            make_datetime("2026-01-17", "09:00:00"),
            make_datetime("2026-01-17", "17:00:00"),
        );
        assert_eq!(saturday_shift.day_of_week(), Weekday::Sat);
    }

    #[test]
    fn test_has_actuals_requires_both_instants() {
        let mut shift = Shift::new(
            Uuid::from_u128(1),
            make_date("2026-01-15"),
            make_datetime("2026-01-15", "09:00:00"),
            make_datetime("2026-01-15", "17:00:00"),
        );
        assert!(!shift.has_actuals());

        shift.actual_start_time = Some(make_datetime("2026-01-15", "09:10:00"));
        assert!(!shift.has_actuals());

        shift.actual_end_time = Some(make_datetime("2026-01-15", "17:05:00"));
        assert!(shift.has_actuals());
    }

    #[test]
    fn test_shift_deserialization_applies_defaults() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000001",
            "workplace_id": "00000000-0000-0000-0000-000000000002",
            "date": "2026-01-15",
            "start_time": "2026-01-15T09:00:00",
            "end_time": "2026-01-15T17:00:00"
        }"#;

        let shift: Shift = serde_json::from_str(json).unwrap();
        assert_eq!(shift.id, Uuid::from_u128(1));
        assert_eq!(shift.break_minutes, 0);
        assert!(shift.memo.is_none());
        assert!(shift.recurrence.is_none());
        assert!(!shift.is_confirmed);
    }

    #[test]
    fn test_recurrence_deserialization() {
        let json = r#"{ "kind": "bi_weekly", "end_date": "2026-03-01" }"#;
        let recurrence: Recurrence = serde_json::from_str(json).unwrap();
        assert_eq!(recurrence.kind, RecurrenceKind::BiWeekly);
        assert_eq!(recurrence.end_date, make_date("2026-03-01"));
    }
}
