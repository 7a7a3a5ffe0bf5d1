//! Shift field validation.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use uuid::Uuid;

use crate::calculation::minutes_between;
use crate::config::Limits;
use crate::models::Shift;

use super::ValidationError;

/// A shift as entered in a form, before every field is known to be set.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ShiftDraft {
    /// Selected workplace.
    #[serde(default)]
    pub workplace_id: Option<Uuid>,
    /// Selected date.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Entered start time.
    #[serde(default)]
    pub start_time: Option<NaiveDateTime>,
    /// Entered end time.
    #[serde(default)]
    pub end_time: Option<NaiveDateTime>,
}

impl From<&Shift> for ShiftDraft {
    fn from(shift: &Shift) -> Self {
        Self {
            workplace_id: Some(shift.workplace_id),
            date: Some(shift.date),
            start_time: Some(shift.start_time),
            end_time: Some(shift.end_time),
        }
    }
}

/// Validates a shift draft, returning the first failing rule.
///
/// Rules, in order: workplace selected, date selected, both times set, end
/// strictly after start, span no longer than `limits.max_shift_hours`.
///
/// # Example
///
/// ```
/// use shift_engine::config::Limits;
/// use shift_engine::validation::{validate_shift, ShiftDraft, ValidationError};
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// let draft = ShiftDraft {
///     workplace_id: Some(Uuid::new_v4()),
///     date: Some(date),
///     start_time: Some(date.and_hms_opt(17, 0, 0).unwrap()),
///     end_time: Some(date.and_hms_opt(9, 0, 0).unwrap()),
/// };
///
/// assert_eq!(
///     validate_shift(&draft, &Limits::default()),
///     Err(ValidationError::EndNotAfterStart)
/// );
/// ```
pub fn validate_shift(draft: &ShiftDraft, limits: &Limits) -> Result<(), ValidationError> {
    if draft.workplace_id.is_none() {
        return Err(ValidationError::MissingWorkplace);
    }
    if draft.date.is_none() {
        return Err(ValidationError::MissingDate);
    }
    let (Some(start), Some(end)) = (draft.start_time, draft.end_time) else {
        return Err(ValidationError::MissingTimes);
    };
    if start >= end {
        return Err(ValidationError::EndNotAfterStart);
    }
    if minutes_between(start, end) > i64::from(limits.max_shift_hours) * 60 {
        return Err(ValidationError::ShiftTooLong {
            max_hours: limits.max_shift_hours,
        });
    }
    Ok(())
}

/// Validates a fully-populated shift record.
pub fn validate_shift_record(shift: &Shift, limits: &Limits) -> Result<(), ValidationError> {
    validate_shift(&ShiftDraft::from(shift), limits)
}
