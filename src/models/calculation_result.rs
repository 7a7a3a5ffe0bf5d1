//! Derived per-shift results.
//!
//! Nothing in this module is ever persisted; every value is recomputed from the
//! current shift and workplace records on demand.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The components of a shift's projected earnings.
///
/// Each component is truncated toward zero on its own; `total` is the sum of
/// the truncated components.
///
/// # Example
///
/// ```
/// use shift_engine::models::EarningsBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = EarningsBreakdown::ZERO;
/// assert_eq!(breakdown.total, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsBreakdown {
    /// Working minutes at the hourly wage.
    pub base: Decimal,
    /// Extra pay for minutes inside the night window.
    pub night_differential: Decimal,
    /// Extra pay for a shift on a holiday.
    pub holiday_differential: Decimal,
    /// Flat per-shift allowance.
    pub transportation_allowance: Decimal,
    /// Sum of all components.
    pub total: Decimal,
}

impl EarningsBreakdown {
    /// Earnings of a shift whose workplace could not be resolved.
    pub const ZERO: EarningsBreakdown = EarningsBreakdown {
        base: Decimal::ZERO,
        night_differential: Decimal::ZERO,
        holiday_differential: Decimal::ZERO,
        transportation_allowance: Decimal::ZERO,
        total: Decimal::ZERO,
    };
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// Every derived figure for one shift, as consumed by presentation, export
/// and notification code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftFigures {
    /// The shift these figures belong to.
    pub shift_id: Uuid,
    /// The referenced workplace id.
    pub workplace_id: Uuid,
    /// The workplace name, or the unknown-workplace placeholder.
    pub workplace_name: String,
    /// Whether the workplace reference resolved.
    pub workplace_resolved: bool,
    /// The shift's anchor date.
    pub date: NaiveDate,
    /// Human-readable `HH:MM-HH:MM` range.
    pub time_range: String,
    /// Planned working minutes.
    pub working_minutes: i64,
    /// Working minutes from actuals when recorded, else planned.
    pub actual_working_minutes: i64,
    /// Minutes inside the night window after break deduction.
    pub night_working_minutes: i64,
    /// Hour-granularity night flag.
    pub is_night_shift: bool,
    /// Weekend flag.
    pub is_holiday: bool,
    /// Projected earnings.
    pub earnings: EarningsBreakdown,
}
