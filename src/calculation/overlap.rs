//! Overlap and conflict detection between shifts.
//!
//! Two shifts can only conflict when they are anchored to the same date. When
//! the shifts belong to different workplaces, each shift's effective end is
//! pushed back by its own workplace's travel time, so a commute that runs into
//! the other shift counts as overlap. Shifts at the same workplace are compared
//! on their planned times only.
//!
//! Because each side is extended by its own travel time, the outcome of
//! [`detect_overlap`] does not depend on argument order.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use tracing::debug;
use uuid::Uuid;

use crate::models::{Shift, ShiftOverlap, Workplace, find_workplace};

use super::time_math::{Interval, clamp_interval};

/// Returns the end of `shift` as seen from `other`, including commute time when
/// the two shifts are at different workplaces. Saturates at the end of the
/// calendar.
fn effective_end(shift: &Shift, other: &Shift, workplaces: &[Workplace]) -> NaiveDateTime {
    if shift.workplace_id == other.workplace_id {
        return shift.end_time;
    }
    let travel = find_workplace(workplaces, shift.workplace_id)
        .map(|w| w.travel_time_minutes)
        .unwrap_or(0);
    shift
        .end_time
        .checked_add_signed(Duration::minutes(i64::from(travel)))
        .unwrap_or(NaiveDateTime::MAX)
}

/// Compares two shifts and reports their overlap.
///
/// The date check is the caller's concern; this function compares the
/// intervals as given.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::detect_overlap;
/// use shift_engine::models::{Shift, Workplace};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut office = Workplace::new("Office", Decimal::new(1000, 0));
/// office.travel_time_minutes = 30;
/// let cafe = Workplace::new("Cafe", Decimal::new(1000, 0));
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// let a = Shift::new(office.id, date, date.and_hms_opt(9, 0, 0).unwrap(), date.and_hms_opt(17, 0, 0).unwrap());
/// let b = Shift::new(cafe.id, date, date.and_hms_opt(17, 15, 0).unwrap(), date.and_hms_opt(20, 0, 0).unwrap());
///
/// let overlap = detect_overlap(&a, &b, &[office, cafe]);
/// assert!(overlap.has_conflict);
/// assert_eq!(overlap.overlap_minutes, 15);
/// ```
pub fn detect_overlap(a: &Shift, b: &Shift, workplaces: &[Workplace]) -> ShiftOverlap {
    let (first, second) = if (a.start_time, a.id) <= (b.start_time, b.id) {
        (a, b)
    } else {
        (b, a)
    };

    let first_interval = Interval::new(first.start_time, effective_end(first, second, workplaces));
    let second_interval =
        Interval::new(second.start_time, effective_end(second, first, workplaces));

    let overlap_minutes = clamp_interval(first_interval, second_interval)
        .map(|overlap| overlap.minutes())
        .unwrap_or(0);

    ShiftOverlap {
        date: first.date,
        first_shift_id: first.id,
        first_workplace_id: first.workplace_id,
        second_shift_id: second.id,
        second_workplace_id: second.workplace_id,
        overlap_minutes,
        has_conflict: overlap_minutes > 0,
    }
}

/// Scans a single day's shifts pairwise and returns only the conflicts.
fn scan_day(day_shifts: &mut [&Shift], workplaces: &[Workplace]) -> Vec<ShiftOverlap> {
    day_shifts.sort_by_key(|s| (s.start_time, s.id));

    let mut conflicts = Vec::new();
    for (i, a) in day_shifts.iter().enumerate() {
        for b in &day_shifts[i + 1..] {
            let overlap = detect_overlap(a, b, workplaces);
            if overlap.has_conflict {
                conflicts.push(overlap);
            }
        }
    }
    conflicts
}

/// Finds every conflicting pair across all shifts, grouped by date.
///
/// Results are ordered by date and then by the start times of each pair.
pub fn check_overlaps(shifts: &[Shift], workplaces: &[Workplace]) -> Vec<ShiftOverlap> {
    let mut by_day: BTreeMap<NaiveDate, Vec<&Shift>> = BTreeMap::new();
    for shift in shifts {
        by_day.entry(shift.date).or_default().push(shift);
    }

    let mut conflicts = Vec::new();
    for (date, mut day_shifts) in by_day {
        let found = scan_day(&mut day_shifts, workplaces);
        if !found.is_empty() {
            debug!(%date, conflicts = found.len(), "Found conflicting shifts");
        }
        conflicts.extend(found);
    }
    conflicts
}

/// Finds the conflicts among shifts on `date`, ignoring the shift `excluding`.
pub fn overlaps_on(
    shifts: &[Shift],
    date: NaiveDate,
    excluding: Option<Uuid>,
    workplaces: &[Workplace],
) -> Vec<ShiftOverlap> {
    let mut day_shifts: Vec<&Shift> = shifts
        .iter()
        .filter(|s| s.date == date && Some(s.id) != excluding)
        .collect();
    scan_day(&mut day_shifts, workplaces)
}

/// Checks a new or edited shift against the stored shifts on its date.
///
/// Stored shifts with the candidate's own id, or with the `excluding` id, are
/// skipped, so editing a shift never reports a conflict with its previous
/// version.
pub fn would_overlap(
    candidate: &Shift,
    shifts: &[Shift],
    workplaces: &[Workplace],
    excluding: Option<Uuid>,
) -> Vec<ShiftOverlap> {
    shifts
        .iter()
        .filter(|s| s.date == candidate.date && s.id != candidate.id && Some(s.id) != excluding)
        .map(|existing| detect_overlap(candidate, existing, workplaces))
        .filter(|overlap| overlap.has_conflict)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn workplace(id: u128, travel: u32) -> Workplace {
        let mut w = Workplace::new(format!("Workplace {}", id), Decimal::new(1000, 0));
        w.id = Uuid::from_u128(id);
        w.travel_time_minutes = travel;
        w
    }

    fn shift(id: u128, workplace_id: u128, date: &str, start: (u32, u32), end: (u32, u32)) -> Shift {
        let day = make_date(date);
        let mut s = Shift::new(
            Uuid::from_u128(workplace_id),
            day,
            day.and_hms_opt(start.0, start.1, 0).unwrap(),
            day.and_hms_opt(end.0, end.1, 0).unwrap(),
        );
        s.id = Uuid::from_u128(id);
        s
    }

    #[test]
    fn test_travel_time_creates_conflict() {
        let workplaces = vec![workplace(1, 30), workplace(2, 0)];
        let a = shift(100, 1, "2026-01-14", (9, 0), (17, 0));
        let b = shift(200, 2, "2026-01-14", (17, 15), (20, 0));

        let overlap = detect_overlap(&a, &b, &workplaces);
        assert!(overlap.has_conflict);
        assert_eq!(overlap.overlap_minutes, 15);
        assert_eq!(overlap.first_shift_id, a.id);
    }

    #[test]
    fn test_travel_time_cleared_is_no_conflict() {
        let workplaces = vec![workplace(1, 30), workplace(2, 0)];
        let a = shift(100, 1, "2026-01-14", (9, 0), (17, 0));
        let b = shift(200, 2, "2026-01-14", (17, 35), (20, 0));

        let overlap = detect_overlap(&a, &b, &workplaces);
        assert!(!overlap.has_conflict);
        assert_eq!(overlap.overlap_minutes, 0);
    }

    #[test]
    fn test_cross_workplace_outcome_is_order_independent() {
        let workplaces = vec![workplace(1, 30), workplace(2, 0)];
        let a = shift(100, 1, "2026-01-14", (9, 0), (17, 0));
        let b = shift(200, 2, "2026-01-14", (17, 15), (20, 0));

        assert_eq!(
            detect_overlap(&a, &b, &workplaces),
            detect_overlap(&b, &a, &workplaces)
        );
    }

    #[test]
    fn test_later_shift_travel_time_does_not_reach_back() {
        // Only the commute after the earlier shift matters here: the later
        // shift's travel buffer extends past its own end, not before its start.
        let workplaces = vec![workplace(1, 0), workplace(2, 45)];
        let a = shift(100, 1, "2026-01-14", (9, 0), (17, 0));
        let b = shift(200, 2, "2026-01-14", (17, 15), (20, 0));

        assert!(!detect_overlap(&a, &b, &workplaces).has_conflict);
        assert!(!detect_overlap(&b, &a, &workplaces).has_conflict);
    }

    #[test]
    fn test_same_workplace_ignores_travel_time() {
        let workplaces = vec![workplace(1, 60)];
        let a = shift(100, 1, "2026-01-14", (9, 0), (12, 0));
        let b = shift(200, 1, "2026-01-14", (12, 30), (15, 0));

        assert!(!detect_overlap(&a, &b, &workplaces).has_conflict);
        assert!(!detect_overlap(&b, &a, &workplaces).has_conflict);
    }

    #[test]
    fn test_same_workplace_plain_overlap() {
        let workplaces = vec![workplace(1, 60)];
        let a = shift(100, 1, "2026-01-14", (9, 0), (12, 0));
        let b = shift(200, 1, "2026-01-14", (11, 0), (15, 0));

        let overlap = detect_overlap(&b, &a, &workplaces);
        assert_eq!(overlap.overlap_minutes, 60);
        assert_eq!(overlap.first_shift_id, a.id);
    }

    #[test]
    fn test_touching_shifts_do_not_conflict() {
        let workplaces = vec![workplace(1, 0)];
        let a = shift(100, 1, "2026-01-14", (9, 0), (12, 0));
        let b = shift(200, 1, "2026-01-14", (12, 0), (15, 0));
        assert!(!detect_overlap(&a, &b, &workplaces).has_conflict);
    }

    #[test]
    fn test_unknown_workplace_contributes_no_travel_time() {
        let workplaces = vec![workplace(2, 0)];
        let a = shift(100, 99, "2026-01-14", (9, 0), (17, 0));
        let b = shift(200, 2, "2026-01-14", (17, 0), (20, 0));
        assert!(!detect_overlap(&a, &b, &workplaces).has_conflict);
    }

    #[test]
    fn test_check_overlaps_ignores_different_days() {
        let workplaces = vec![workplace(1, 0)];
        let a = shift(100, 1, "2026-01-14", (9, 0), (17, 0));
        let mut b = shift(200, 1, "2026-01-15", (9, 0), (17, 0));
        // Same instants, different anchor date.
        b.start_time = a.start_time;
        b.end_time = a.end_time;

        assert!(check_overlaps(&[a, b], &workplaces).is_empty());
    }

    #[test]
    fn test_check_overlaps_finds_all_pairs_in_order() {
        let workplaces = vec![workplace(1, 0)];
        let shifts = vec![
            shift(300, 1, "2026-01-15", (10, 0), (12, 0)),
            shift(100, 1, "2026-01-14", (9, 0), (13, 0)),
            shift(200, 1, "2026-01-14", (10, 0), (11, 0)),
            shift(250, 1, "2026-01-14", (12, 0), (14, 0)),
            shift(400, 1, "2026-01-15", (11, 0), (13, 0)),
        ];

        let conflicts = check_overlaps(&shifts, &workplaces);
        let pairs: Vec<(u128, u128, i64)> = conflicts
            .iter()
            .map(|o| {
                (
                    o.first_shift_id.as_u128(),
                    o.second_shift_id.as_u128(),
                    o.overlap_minutes,
                )
            })
            .collect();
        assert_eq!(pairs, vec![(100, 200, 60), (100, 250, 60), (300, 400, 60)]);
    }

    #[test]
    fn test_overlaps_on_excludes_given_shift() {
        let workplaces = vec![workplace(1, 0)];
        let shifts = vec![
            shift(100, 1, "2026-01-14", (9, 0), (13, 0)),
            shift(200, 1, "2026-01-14", (10, 0), (11, 0)),
        ];
        let date = make_date("2026-01-14");

        assert_eq!(overlaps_on(&shifts, date, None, &workplaces).len(), 1);
        assert!(overlaps_on(&shifts, date, Some(Uuid::from_u128(200)), &workplaces).is_empty());
    }

    #[test]
    fn test_would_overlap_never_matches_itself() {
        let workplaces = vec![workplace(1, 0)];
        let stored = shift(100, 1, "2026-01-14", (9, 0), (17, 0));
        let mut edited = stored.clone();
        edited.end_time = make_date("2026-01-14").and_hms_opt(18, 0, 0).unwrap();

        assert!(would_overlap(&edited, &[stored], &workplaces, None).is_empty());
    }

    #[test]
    fn test_would_overlap_reports_candidate_conflicts() {
        let workplaces = vec![workplace(1, 30), workplace(2, 0)];
        let stored = vec![
            shift(200, 2, "2026-01-14", (17, 15), (20, 0)),
            shift(300, 2, "2026-01-14", (6, 0), (8, 0)),
        ];
        let candidate = shift(100, 1, "2026-01-14", (9, 0), (17, 0));

        let conflicts = would_overlap(&candidate, &stored, &workplaces, None);
        assert_eq!(conflicts.len(), 1);
        assert!(conflicts[0].involves(Uuid::from_u128(200)));
        assert_eq!(conflicts[0].overlap_minutes, 15);

        let excluded = would_overlap(&candidate, &stored, &workplaces, Some(Uuid::from_u128(200)));
        assert!(excluded.is_empty());
    }

    #[test]
    fn test_travel_time_past_the_last_representable_day() {
        let workplaces = vec![workplace(1, 2 * 24 * 60), workplace(2, 0)];
        let day = NaiveDate::MAX;
        let at = |h, m| day.and_hms_opt(h, m, 0).unwrap();
        let mut a = Shift::new(Uuid::from_u128(1), day, at(20, 0), at(23, 0));
        a.id = Uuid::from_u128(100);
        let mut b = Shift::new(Uuid::from_u128(2), day, at(23, 30), at(23, 50));
        b.id = Uuid::from_u128(200);

        let overlaps = check_overlaps(&[a, b], &workplaces);
        assert_eq!(overlaps.len(), 1);
        assert_eq!(overlaps[0].overlap_minutes, 20);
    }
}
