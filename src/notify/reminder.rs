//! Shift reminders.

use chrono::{Duration, NaiveDateTime};
use tracing::debug;

use crate::calculation::{format_time_range, is_holiday, is_night_shift};
use crate::config::ReminderSettings;
use crate::models::{Shift, Workplace, find_workplace};

use super::{NotificationContent, SHIFT_REMINDER_CATEGORY};

/// Builds reminder notifications for upcoming shifts.
///
/// # Example
///
/// ```
/// use shift_engine::config::ReminderSettings;
/// use shift_engine::models::{Shift, Workplace};
/// use shift_engine::notify::ReminderComposer;
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
/// );
///
/// let composer = ReminderComposer::new(ReminderSettings::default());
/// let now = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let reminders = composer.compose(&shift, &cafe, now);
///
/// assert_eq!(reminders.len(), 2);
/// assert_eq!(reminders[0].body, "Cafe - 09:00-17:00");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReminderComposer {
    settings: ReminderSettings,
}

impl ReminderComposer {
    /// Creates a composer for the given reminder offsets.
    pub fn new(settings: ReminderSettings) -> Self {
        Self { settings }
    }

    /// Composes one reminder per configured offset, skipping those whose fire
    /// time is not after `now` or falls before the start of the calendar.
    pub fn compose(
        &self,
        shift: &Shift,
        workplace: &Workplace,
        now: NaiveDateTime,
    ) -> Vec<NotificationContent> {
        self.settings
            .hours_before
            .iter()
            .filter_map(|&hours| {
                let fire_at = shift
                    .start_time
                    .checked_sub_signed(Duration::hours(i64::from(hours)))?;
                (fire_at > now).then(|| NotificationContent {
                    identifier: format!("shift-{}-{}h", shift.id, hours),
                    title: title_for(hours).to_string(),
                    body: body_for(shift, workplace, hours),
                    category: SHIFT_REMINDER_CATEGORY,
                    fire_at,
                    shift_id: Some(shift.id),
                })
            })
            .collect()
    }

    /// Composes reminders for every shift whose workplace resolves.
    pub fn compose_all(
        &self,
        shifts: &[Shift],
        workplaces: &[Workplace],
        now: NaiveDateTime,
    ) -> Vec<NotificationContent> {
        let mut reminders: Vec<NotificationContent> = shifts
            .iter()
            .filter_map(|shift| {
                find_workplace(workplaces, shift.workplace_id)
                    .map(|workplace| self.compose(shift, workplace, now))
            })
            .flatten()
            .collect();
        reminders.sort_by(|a, b| a.fire_at.cmp(&b.fire_at).then_with(|| a.identifier.cmp(&b.identifier)));

        debug!(
            shifts = shifts.len(),
            reminders = reminders.len(),
            "Composed shift reminders"
        );
        reminders
    }
}

fn title_for(hours_before: u32) -> &'static str {
    match hours_before {
        24 => "Tomorrow's shift reminder",
        1 => "Shift starting soon",
        _ => "Shift reminder",
    }
}

fn body_for(shift: &Shift, workplace: &Workplace, hours_before: u32) -> String {
    let mut body = format!("{} - {}", workplace.name, format_time_range(shift));
    match hours_before {
        24 => {}
        1 => body.push_str(" (starts in 1 hour)"),
        hours => body.push_str(&format!(" (starts in {} hours)", hours)),
    }

    if let Some(memo) = shift.memo.as_deref().filter(|m| !m.is_empty()) {
        body.push_str(&format!("\nMemo: {}", memo));
    }

    let mut badges = Vec::new();
    if is_night_shift(shift) {
        badges.push("Night allowance");
    }
    if is_holiday(shift) {
        badges.push("Holiday allowance");
    }
    if !badges.is_empty() {
        body.push('\n');
        body.push_str(&badges.join(" · "));
    }
    body
}
