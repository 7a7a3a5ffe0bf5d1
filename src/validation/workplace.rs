//! Workplace field validation and display color allocation.

use rust_decimal::Decimal;

use crate::config::Limits;
use crate::models::Workplace;

use super::ValidationError;

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Validates a workplace against the limits and the other stored workplaces.
///
/// The workplace's own id is excluded from the uniqueness check, so updating a
/// workplace without renaming it passes.
///
/// # Example
///
/// ```
/// use shift_engine::config::Limits;
/// use shift_engine::models::Workplace;
/// use shift_engine::validation::{validate_workplace, ValidationError};
/// use rust_decimal::Decimal;
///
/// let existing = vec![Workplace::new("Cafe", Decimal::new(1000, 0))];
/// let candidate = Workplace::new("  CAFE ", Decimal::new(1200, 0));
///
/// assert_eq!(
///     validate_workplace(&candidate, &existing, &Limits::default()),
///     Err(ValidationError::DuplicateName { name: "CAFE".to_string() })
/// );
/// ```
pub fn validate_workplace(
    workplace: &Workplace,
    existing: &[Workplace],
    limits: &Limits,
) -> Result<(), ValidationError> {
    let trimmed = workplace.name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let normalized = normalize_name(trimmed);
    if existing
        .iter()
        .any(|other| other.id != workplace.id && normalize_name(&other.name) == normalized)
    {
        return Err(ValidationError::DuplicateName {
            name: trimmed.to_string(),
        });
    }

    if workplace.hourly_wage <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveWage);
    }
    if workplace.hourly_wage > limits.max_hourly_wage {
        return Err(ValidationError::WageTooHigh {
            max: limits.max_hourly_wage,
        });
    }
    if workplace.night_shift_rate < Decimal::ONE {
        return Err(ValidationError::NightRateTooLow);
    }
    if workplace.night_shift_rate > limits.max_rate_multiplier {
        return Err(ValidationError::NightRateTooHigh {
            max: limits.max_rate_multiplier,
        });
    }
    if workplace.holiday_rate < Decimal::ONE {
        return Err(ValidationError::HolidayRateTooLow);
    }
    if workplace.holiday_rate > limits.max_rate_multiplier {
        return Err(ValidationError::HolidayRateTooHigh {
            max: limits.max_rate_multiplier,
        });
    }
    if workplace.transportation_allowance < Decimal::ZERO {
        return Err(ValidationError::NegativeAllowance);
    }
    Ok(())
}

/// Returns true if no other workplace uses `color` (case-insensitive hex).
pub fn is_color_available(
    color: &str,
    workplaces: &[Workplace],
    excluding: Option<uuid::Uuid>,
) -> bool {
    !workplaces
        .iter()
        .filter(|w| Some(w.id) != excluding)
        .any(|w| w.color.eq_ignore_ascii_case(color))
}

/// Picks the first palette color not used by any workplace.
///
/// Once every color is taken the palette wraps around by workplace count, so
/// allocation stays deterministic. Returns `None` only for an empty palette.
pub fn next_available_color<'a>(palette: &'a [String], workplaces: &[Workplace]) -> Option<&'a str> {
    if palette.is_empty() {
        return None;
    }
    palette
        .iter()
        .find(|color| is_color_available(color, workplaces, None))
        .or_else(|| palette.get(workplaces.len() % palette.len()))
        .map(String::as_str)
}
