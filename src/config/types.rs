//! Configuration types for the shift engine.
//!
//! This module contains the strongly-typed configuration structures that are
//! deserialized from YAML configuration files.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Validation limits for shifts and workplaces.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Limits {
    /// Longest allowed span between a shift's start and end, in hours.
    pub max_shift_hours: u32,
    /// Highest accepted hourly wage.
    pub max_hourly_wage: Decimal,
    /// Highest accepted night or holiday multiplier.
    #[serde(default = "default_max_rate_multiplier")]
    pub max_rate_multiplier: Decimal,
}

fn default_max_rate_multiplier() -> Decimal {
    Decimal::TEN
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_shift_hours: 24,
            max_hourly_wage: Decimal::new(10_000, 0),
            max_rate_multiplier: default_max_rate_multiplier(),
        }
    }
}

/// Settings for composing reminder and conflict notifications.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReminderSettings {
    /// Offsets before a shift's start at which reminders fire, in hours.
    pub hours_before: Vec<u32>,
    /// Hour of the previous day at which a conflict warning fires.
    pub conflict_warning_hour: u32,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            hours_before: vec![24, 1],
            conflict_warning_hour: 20,
        }
    }
}

/// Contents of `engine.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// Validation limits.
    pub limits: Limits,
    /// First day of the week for weekly statistics.
    pub week_starts_on: Weekday,
    /// Notification settings.
    pub reminders: ReminderSettings,
}

/// Contents of `palette.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PaletteConfig {
    /// Workplace colors in allocation order.
    pub colors: Vec<String>,
}

/// The default workplace color palette.
pub const DEFAULT_PALETTE: [&str; 15] = [
    "#007AFF", "#FF3B30", "#34C759", "#FF9500", "#AF52DE", "#FF2D55", "#FFCC00", "#32ADE6",
    "#00C7BE", "#5856D6", "#30B0C7", "#A2845E", "#33CC80", "#CC4DB3", "#E6991A",
];

/// The complete engine configuration.
///
/// # Example
///
/// ```
/// use shift_engine::config::EngineConfig;
/// use chrono::Weekday;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.limits().max_shift_hours, 24);
/// assert_eq!(config.week_starts_on(), Weekday::Sun);
/// assert_eq!(config.palette().len(), 15);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    limits: Limits,
    week_starts_on: Weekday,
    reminders: ReminderSettings,
    palette: Vec<String>,
}

impl EngineConfig {
    /// Creates a configuration from its component parts.
    pub fn new(
        limits: Limits,
        week_starts_on: Weekday,
        reminders: ReminderSettings,
        palette: Vec<String>,
    ) -> Self {
        Self {
            limits,
            week_starts_on,
            reminders,
            palette,
        }
    }

    /// Returns the validation limits.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Returns the first day of the week.
    pub fn week_starts_on(&self) -> Weekday {
        self.week_starts_on
    }

    /// Returns the notification settings.
    pub fn reminders(&self) -> &ReminderSettings {
        &self.reminders
    }

    /// Returns the workplace color palette.
    pub fn palette(&self) -> &[String] {
        &self.palette
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(
            Limits::default(),
            Weekday::Sun,
            ReminderSettings::default(),
            DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        )
    }
}
