//! Expansion of recurring shifts into concrete occurrences.

use chrono::{Duration, Months, NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::models::{RecurrenceKind, Shift};

/// Returns the date of the `n`th occurrence after `anchor`, or `None` once the
/// calendar runs out.
fn nth_occurrence(anchor: NaiveDate, kind: RecurrenceKind, n: u32) -> Option<NaiveDate> {
    match kind {
        RecurrenceKind::Daily => anchor.checked_add_signed(Duration::days(i64::from(n))),
        RecurrenceKind::Weekly => anchor.checked_add_signed(Duration::days(7 * i64::from(n))),
        RecurrenceKind::BiWeekly => anchor.checked_add_signed(Duration::days(14 * i64::from(n))),
        // Counted from the anchor so a 31st clamps per month without drifting.
        RecurrenceKind::Monthly => anchor.checked_add_months(Months::new(n)),
    }
}

/// Expands a shift with a recurrence rule into every occurrence up to and
/// including the rule's end date.
///
/// The first occurrence is the shift itself. Later occurrences get fresh ids
/// and keep each instant's offset from the anchor date, so a shift ending after
/// midnight still does so on every occurrence. Actual times are not copied. A
/// shift without a rule expands to itself.
///
/// # Example
///
/// ```
/// use shift_engine::models::{Recurrence, RecurrenceKind, Shift};
/// use shift_engine::store::materialize_recurrence;
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
/// let mut shift = Shift::new(
///     Uuid::new_v4(),
///     date,
///     date.and_hms_opt(9, 0, 0).unwrap(),
///     date.and_hms_opt(17, 0, 0).unwrap(),
/// );
/// shift.recurrence = Some(Recurrence {
///     kind: RecurrenceKind::Weekly,
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
/// });
///
/// let occurrences = materialize_recurrence(&shift);
/// assert_eq!(occurrences.len(), 4);
/// assert_eq!(occurrences[3].date, NaiveDate::from_ymd_opt(2026, 1, 26).unwrap());
/// ```
pub fn materialize_recurrence(shift: &Shift) -> Vec<Shift> {
    let Some(rule) = shift.recurrence.as_ref() else {
        return vec![shift.clone()];
    };

    let midnight = shift.date.and_time(NaiveTime::MIN);
    let start_offset = shift.start_time - midnight;
    let end_offset = shift.end_time - midnight;

    let mut occurrences = vec![shift.clone()];
    let mut n = 1;
    while let Some(date) = nth_occurrence(shift.date, rule.kind, n) {
        if date > rule.end_date {
            break;
        }
        let day_start = date.and_time(NaiveTime::MIN);
        occurrences.push(Shift {
            id: Uuid::new_v4(),
            date,
            start_time: day_start + start_offset,
            end_time: day_start + end_offset,
            actual_start_time: None,
            actual_end_time: None,
            actual_break_minutes: 0,
            ..shift.clone()
        });
        n += 1;
    }
    occurrences
}
