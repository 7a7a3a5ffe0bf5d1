//! Core data models for the shift engine.
//!
//! [`Shift`] and [`Workplace`] are the stored records; everything else is
//! derived from them on demand.

mod calculation_result;
mod overlap;
mod shift;
mod stats;
mod workplace;

pub use calculation_result::{AuditStep, EarningsBreakdown, ShiftFigures};
pub use overlap::ShiftOverlap;
pub use shift::{Recurrence, RecurrenceKind, Shift};
pub use stats::{DateRange, PeriodStats, WeeklyStats, WorkPattern, WorkplaceStats, YearlyStats};
pub use workplace::{
    UNKNOWN_WORKPLACE_COLOR, UNKNOWN_WORKPLACE_NAME, Workplace, find_workplace, workplace_color,
    workplace_name,
};
