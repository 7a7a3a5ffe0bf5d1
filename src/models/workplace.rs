//! Workplace model and lookup helpers.
//!
//! Shifts reference workplaces by id only. Lookups therefore go through
//! [`find_workplace`], and callers that need something to display fall back to
//! [`UNKNOWN_WORKPLACE_NAME`] / [`UNKNOWN_WORKPLACE_COLOR`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name shown for a shift whose workplace no longer exists.
pub const UNKNOWN_WORKPLACE_NAME: &str = "Unknown workplace";

/// Color shown for a shift whose workplace no longer exists.
pub const UNKNOWN_WORKPLACE_COLOR: &str = "#8E8E93";

fn default_night_shift_rate() -> Decimal {
    Decimal::new(125, 2)
}

fn default_holiday_rate() -> Decimal {
    Decimal::new(135, 2)
}

/// A place of work with its pay configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workplace {
    /// Unique identifier for the workplace.
    pub id: Uuid,
    /// Display name, unique case-insensitively.
    pub name: String,
    /// Display color as a hex string (e.g. `#007AFF`).
    #[serde(default)]
    pub color: String,
    /// Hourly wage in whole currency units.
    pub hourly_wage: Decimal,
    /// Flat amount paid once per shift.
    #[serde(default)]
    pub transportation_allowance: Decimal,
    /// Commute buffer applied after a shift here when the next shift is elsewhere.
    #[serde(default)]
    pub travel_time_minutes: u32,
    /// Multiplier for minutes worked in the night window.
    #[serde(default = "default_night_shift_rate")]
    pub night_shift_rate: Decimal,
    /// Multiplier for minutes worked on a holiday.
    #[serde(default = "default_holiday_rate")]
    pub holiday_rate: Decimal,
    /// User-chosen display order.
    #[serde(default)]
    pub priority: i32,
}

impl Workplace {
    /// Creates a workplace with default rates and no allowance or travel time.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_engine::models::Workplace;
    /// use rust_decimal::Decimal;
    ///
    /// let cafe = Workplace::new("Cafe", Decimal::new(1000, 0));
    /// assert_eq!(cafe.night_shift_rate, Decimal::new(125, 2));
    /// assert_eq!(cafe.holiday_rate, Decimal::new(135, 2));
    /// ```
    pub fn new(name: impl Into<String>, hourly_wage: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: String::new(),
            hourly_wage,
            transportation_allowance: Decimal::ZERO,
            travel_time_minutes: 0,
            night_shift_rate: default_night_shift_rate(),
            holiday_rate: default_holiday_rate(),
            priority: 0,
        }
    }
}

/// Looks up a workplace by id.
pub fn find_workplace(workplaces: &[Workplace], id: Uuid) -> Option<&Workplace> {
    workplaces.iter().find(|w| w.id == id)
}

/// Returns the workplace's name, or [`UNKNOWN_WORKPLACE_NAME`] if it does not resolve.
pub fn workplace_name(workplaces: &[Workplace], id: Uuid) -> &str {
    find_workplace(workplaces, id)
        .map(|w| w.name.as_str())
        .unwrap_or(UNKNOWN_WORKPLACE_NAME)
}

/// Returns the workplace's color, or [`UNKNOWN_WORKPLACE_COLOR`] if it does not resolve.
pub fn workplace_color(workplaces: &[Workplace], id: Uuid) -> &str {
    find_workplace(workplaces, id)
        .map(|w| w.color.as_str())
        .unwrap_or(UNKNOWN_WORKPLACE_COLOR)
}
