//! Composition of shift reminder and conflict warning notifications.
//!
//! Only the content is built here: title, body, identifier and the instant the
//! notification should fire. Delivering or scheduling it is left to the caller.

mod conflict;
mod reminder;

use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

pub use conflict::{conflict_warning, conflict_warnings};
pub use reminder::ReminderComposer;

/// Category attached to shift reminders.
pub const SHIFT_REMINDER_CATEGORY: &str = "SHIFT_REMINDER";

/// Category attached to conflict warnings.
pub const CONFLICT_WARNING_CATEGORY: &str = "CONFLICT_WARNING";

/// A notification ready to be handed to a scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationContent {
    /// Stable identifier; re-composing the same notification yields the same value.
    pub identifier: String,
    /// Notification title.
    pub title: String,
    /// Notification body, possibly spanning several lines.
    pub body: String,
    /// One of [`SHIFT_REMINDER_CATEGORY`] or [`CONFLICT_WARNING_CATEGORY`].
    pub category: &'static str,
    /// When the notification should be delivered.
    pub fire_at: NaiveDateTime,
    /// The shift a reminder is about, if any.
    pub shift_id: Option<Uuid>,
}
