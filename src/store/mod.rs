//! Record storage for workplaces and shifts.
//!
//! The engine itself only ever sees slices of records. [`RecordStore`] is the
//! seam where those slices come from, and the place where validation gates
//! writes and workplace deletion cascades to shifts.

mod memory;
mod recurrence;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{Shift, Workplace};

pub use memory::InMemoryStore;
pub use recurrence::materialize_recurrence;

/// Storage operations for workplaces and shifts.
pub trait RecordStore {
    /// Returns every stored workplace.
    fn list_workplaces(&self) -> &[Workplace];

    /// Returns every stored shift.
    fn list_shifts(&self) -> &[Shift];

    /// Looks up a workplace by id.
    fn workplace(&self, id: Uuid) -> Option<&Workplace> {
        self.list_workplaces().iter().find(|w| w.id == id)
    }

    /// Looks up a shift by id.
    fn shift(&self, id: Uuid) -> Option<&Shift> {
        self.list_shifts().iter().find(|s| s.id == id)
    }

    /// Stores a new workplace.
    fn create_workplace(&mut self, workplace: Workplace) -> EngineResult<()>;

    /// Replaces a stored workplace with the same id.
    fn update_workplace(&mut self, workplace: Workplace) -> EngineResult<()>;

    /// Removes a workplace and every shift that references it, returning the
    /// removed shifts.
    fn delete_workplace(&mut self, id: Uuid) -> EngineResult<Vec<Shift>>;

    /// Checks that a shift could be stored, without storing it.
    fn check_shift(&self, shift: &Shift) -> EngineResult<()>;

    /// Stores a new shift.
    fn create_shift(&mut self, shift: Shift) -> EngineResult<()>;

    /// Replaces a stored shift with the same id.
    fn update_shift(&mut self, shift: Shift) -> EngineResult<()>;

    /// Removes a shift, returning it.
    fn delete_shift(&mut self, id: Uuid) -> EngineResult<Shift>;

    /// Expands a shift's recurrence rule and stores every occurrence.
    ///
    /// Occurrences are validated as a batch first, so nothing is stored if any
    /// of them is rejected.
    fn create_recurring_shifts(&mut self, shift: Shift) -> EngineResult<Vec<Uuid>> {
        let occurrences = materialize_recurrence(&shift);
        for occurrence in &occurrences {
            self.check_shift(occurrence)?;
        }
        let ids = occurrences.iter().map(|s| s.id).collect();
        for occurrence in occurrences {
            self.create_shift(occurrence)?;
        }
        Ok(ids)
    }

    /// Returns the shifts anchored to `date`.
    fn shifts_on(&self, date: NaiveDate) -> Vec<&Shift> {
        self.list_shifts().iter().filter(|s| s.date == date).collect()
    }

    /// Returns the shifts anchored between `start` and `end`, both inclusive.
    fn shifts_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Shift> {
        self.list_shifts()
            .iter()
            .filter(|s| s.date >= start && s.date <= end)
            .collect()
    }

    /// Returns the shifts at one workplace.
    fn shifts_for_workplace(&self, workplace_id: Uuid) -> Vec<&Shift> {
        self.list_shifts()
            .iter()
            .filter(|s| s.workplace_id == workplace_id)
            .collect()
    }
}
