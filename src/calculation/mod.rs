//! Calculation logic for the shift engine.
//!
//! This module contains the pure functions that turn shift and workplace
//! records into derived figures: interval arithmetic, working and night
//! minutes, holiday detection, projected earnings, overlap detection between
//! shifts, and period statistics.

mod day_detection;
mod earnings;
mod night_shift;
mod overlap;
mod periods;
mod shift_figures;
mod stats;
mod time_math;
mod working_time;

pub use day_detection::{DayType, get_day_type, is_holiday};
pub use earnings::{EarningsResult, calculate_earnings};
pub use night_shift::{is_night_shift, night_working_minutes};
pub use overlap::{check_overlaps, detect_overlap, overlaps_on, would_overlap};
pub use periods::{StatsRange, month_range, start_of_month, start_of_week, year_range};
pub use shift_figures::{derive_all, derive_shift_figures, format_time_range};
pub use stats::{aggregate_stats, analyze_work_pattern, weekly_stats, yearly_stats};
pub use time_math::{
    Interval, NIGHT_END_HOUR, NIGHT_START_HOUR, clamp_interval, is_night_hour, minutes_between,
    night_window_for, same_day,
};
pub use working_time::{actual_working_minutes, working_minutes};
