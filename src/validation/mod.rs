//! Field validation for shift and workplace create/update flows.
//!
//! Validators return the first failure only, as a [`ValidationError`] whose
//! `Display` output is the message shown to the user. Nothing here panics on
//! malformed input; an inverted or oversized interval is just another error.

mod shift;
mod workplace;

use rust_decimal::Decimal;
use thiserror::Error;

pub use shift::{ShiftDraft, validate_shift, validate_shift_record};
pub use workplace::{is_color_available, next_available_color, validate_workplace};

/// A validation failure with a user-facing message.
///
/// # Example
///
/// ```
/// use shift_engine::validation::ValidationError;
///
/// let error = ValidationError::ShiftTooLong { max_hours: 24 };
/// assert_eq!(error.to_string(), "A shift cannot be longer than 24 hours");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No workplace was chosen for the shift.
    #[error("Please select a workplace")]
    MissingWorkplace,

    /// No date was chosen for the shift.
    #[error("Please select a date")]
    MissingDate,

    /// Start or end time is missing.
    #[error("Please set both a start and an end time")]
    MissingTimes,

    /// End is not strictly after start.
    #[error("End time must be after start time")]
    EndNotAfterStart,

    /// The shift spans more than the configured maximum.
    #[error("A shift cannot be longer than {max_hours} hours")]
    ShiftTooLong {
        /// Configured maximum span.
        max_hours: u32,
    },

    /// Workplace name is empty after trimming.
    #[error("Please enter a workplace name")]
    EmptyName,

    /// Another workplace already uses this name.
    #[error("A workplace named '{name}' already exists")]
    DuplicateName {
        /// The conflicting name, trimmed.
        name: String,
    },

    /// Hourly wage is zero or negative.
    #[error("Hourly wage must be greater than zero")]
    NonPositiveWage,

    /// Hourly wage exceeds the configured maximum.
    #[error("Hourly wage cannot exceed {max}")]
    WageTooHigh {
        /// Configured maximum wage.
        max: Decimal,
    },

    /// Night shift multiplier is below 1.0.
    #[error("Night shift rate must be at least 1.0")]
    NightRateTooLow,

    /// Night multiplier is above the configured maximum.
    #[error("Night shift rate cannot exceed {max}")]
    NightRateTooHigh {
        /// The configured maximum multiplier.
        max: Decimal,
    },

    /// Holiday multiplier is below 1.0.
    #[error("Holiday rate must be at least 1.0")]
    HolidayRateTooLow,

    /// Holiday multiplier is above the configured maximum.
    #[error("Holiday rate cannot exceed {max}")]
    HolidayRateTooHigh {
        /// The configured maximum multiplier.
        max: Decimal,
    },

    /// Transportation allowance is negative.
    #[error("Transportation allowance cannot be negative")]
    NegativeAllowance,
}
