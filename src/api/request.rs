//! Request types for the shift engine API.
//!
//! Every endpoint is stateless: the caller sends the workplace and shift
//! snapshots the computation should run over.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::StatsRange;
use crate::models::{DateRange, Shift, Workplace};

/// Request body for `POST /shifts/derive`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeriveRequest {
    /// Workplaces the shifts may reference.
    #[serde(default)]
    pub workplaces: Vec<Workplace>,
    /// Shifts to derive figures for.
    pub shifts: Vec<Shift>,
    /// Whether to include the earnings audit trace for each shift.
    #[serde(default)]
    pub include_audit: bool,
}

/// Request body for `POST /overlaps`.
///
/// With no filters every conflict is returned. `date` restricts the scan to
/// one day, and `candidate` checks a new or edited shift against the others.
/// `excluding` removes one shift from consideration in both cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlapRequest {
    /// Workplaces the shifts may reference.
    #[serde(default)]
    pub workplaces: Vec<Workplace>,
    /// Stored shifts.
    pub shifts: Vec<Shift>,
    /// Restrict the scan to this anchor date.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Shift id to leave out.
    #[serde(default)]
    pub excluding: Option<Uuid>,
    /// A shift to check against the stored shifts.
    #[serde(default)]
    pub candidate: Option<Shift>,
}

/// Request body for `POST /stats`.
///
/// Exactly one of `range` and `preset` must be given. Presets resolve against
/// `today`, which defaults to the server's current UTC date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsRequest {
    /// Workplaces the shifts may reference.
    #[serde(default)]
    pub workplaces: Vec<Workplace>,
    /// Shifts to aggregate.
    pub shifts: Vec<Shift>,
    /// An explicit `[start, end)` range.
    #[serde(default)]
    pub range: Option<DateRange>,
    /// A preset range.
    #[serde(default)]
    pub preset: Option<StatsRange>,
    /// Reference date for presets.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Request body for `POST /validate/workplace`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateWorkplaceRequest {
    /// The workplace being created or updated.
    pub workplace: Workplace,
    /// The workplaces already stored.
    #[serde(default)]
    pub existing: Vec<Workplace>,
}
