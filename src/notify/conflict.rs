//! Conflict warnings for days with overlapping shifts.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::{Shift, ShiftOverlap, Workplace, find_workplace};

use super::{CONFLICT_WARNING_CATEGORY, NotificationContent};

/// Composes a warning for conflicting shifts on one day.
///
/// The warning fires at `warning_hour` on the day before `date`. Returns
/// `None` when fewer than two shifts are given, when the fire time is not
/// after `now`, or when `warning_hour` is not a valid hour.
///
/// # Example
///
/// ```
/// use shift_engine::models::{Shift, Workplace};
/// use shift_engine::notify::conflict_warning;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let cafe = Workplace::new("Cafe", Decimal::new(1000, 0));
/// let shop = Workplace::new("Shop", Decimal::new(1000, 0));
/// let date = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// let a = Shift::new(cafe.id, date, date.and_hms_opt(9, 0, 0).unwrap(), date.and_hms_opt(17, 0, 0).unwrap());
/// let b = Shift::new(shop.id, date, date.and_hms_opt(16, 0, 0).unwrap(), date.and_hms_opt(20, 0, 0).unwrap());
///
/// let now = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let warning = conflict_warning(date, &[&a, &b], &[cafe, shop], 20, now).unwrap();
/// assert_eq!(warning.body, "Shifts overlap on 2026-01-14 at Cafe, Shop");
/// ```
pub fn conflict_warning(
    date: NaiveDate,
    shifts: &[&Shift],
    workplaces: &[Workplace],
    warning_hour: u32,
    now: NaiveDateTime,
) -> Option<NotificationContent> {
    if shifts.len() < 2 {
        return None;
    }

    let fire_at = date
        .checked_sub_signed(Duration::days(1))?
        .and_time(NaiveTime::from_hms_opt(warning_hour, 0, 0)?);
    if fire_at <= now {
        return None;
    }

    let names: Vec<&str> = shifts
        .iter()
        .filter_map(|s| find_workplace(workplaces, s.workplace_id))
        .map(|w| w.name.as_str())
        .collect();

    Some(NotificationContent {
        identifier: format!("conflict-{}", date),
        title: "Shift conflict warning".to_string(),
        body: format!("Shifts overlap on {} at {}", date, names.join(", ")),
        category: CONFLICT_WARNING_CATEGORY,
        fire_at,
        shift_id: None,
    })
}

/// Composes one warning per day that has conflicting overlaps.
///
/// Shifts involved in any conflict on a day are listed once each, in start
/// order.
pub fn conflict_warnings(
    overlaps: &[ShiftOverlap],
    shifts: &[Shift],
    workplaces: &[Workplace],
    warning_hour: u32,
    now: NaiveDateTime,
) -> Vec<NotificationContent> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&Shift>> = BTreeMap::new();
    for overlap in overlaps.iter().filter(|o| o.has_conflict) {
        let involved = by_date.entry(overlap.date).or_default();
        for id in [overlap.first_shift_id, overlap.second_shift_id] {
            if involved.iter().any(|s| s.id == id) {
                continue;
            }
            if let Some(shift) = shifts.iter().find(|s| s.id == id) {
                involved.push(shift);
            }
        }
    }

    by_date
        .into_iter()
        .filter_map(|(date, mut involved)| {
            involved.sort_by_key(|s| (s.start_time, s.id));
            conflict_warning(date, &involved, workplaces, warning_hour, now)
        })
        .collect()
}
