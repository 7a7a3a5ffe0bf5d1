//! In-memory record store.

use tracing::{debug, info};
use uuid::Uuid;

use crate::config::Limits;
use crate::error::{EngineError, EngineResult};
use crate::models::{Shift, Workplace};
use crate::validation::{validate_shift_record, validate_workplace};

use super::RecordStore;

/// A [`RecordStore`] backed by two vectors.
///
/// Writes are validated against the configured [`Limits`] before they are
/// applied.
///
/// # Example
///
/// ```
/// use shift_engine::models::{Shift, Workplace};
/// use shift_engine::store::{InMemoryStore, RecordStore};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut store = InMemoryStore::default();
/// let cafe = Workplace::new("Cafe", Decimal::new(1000, 0));
/// let cafe_id = cafe.id;
/// store.create_workplace(cafe).unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// let shift = Shift::new(
///     cafe_id,
///     date,
///     date.and_hms_opt(9, 0, 0).unwrap(),
///     date.and_hms_opt(17, 0, 0).unwrap(),
/// );
/// store.create_shift(shift).unwrap();
///
/// let removed = store.delete_workplace(cafe_id).unwrap();
/// assert_eq!(removed.len(), 1);
/// assert!(store.list_shifts().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    limits: Limits,
    workplaces: Vec<Workplace>,
    shifts: Vec<Shift>,
}

impl InMemoryStore {
    /// Creates an empty store that validates writes against `limits`.
    pub fn new(limits: Limits) -> Self {
        Self {
            limits,
            workplaces: Vec::new(),
            shifts: Vec::new(),
        }
    }

    fn check_workplace(&self, workplace: &Workplace) -> EngineResult<()> {
        validate_workplace(workplace, &self.workplaces, &self.limits).map_err(|e| {
            EngineError::InvalidWorkplace {
                workplace_id: workplace.id,
                message: e.to_string(),
            }
        })
    }

    fn shift_index(&self, id: Uuid) -> EngineResult<usize> {
        self.shifts
            .iter()
            .position(|s| s.id == id)
            .ok_or(EngineError::ShiftNotFound { id })
    }

    fn workplace_index(&self, id: Uuid) -> EngineResult<usize> {
        self.workplaces
            .iter()
            .position(|w| w.id == id)
            .ok_or(EngineError::WorkplaceNotFound { id })
    }
}

impl RecordStore for InMemoryStore {
    fn list_workplaces(&self) -> &[Workplace] {
        &self.workplaces
    }

    fn list_shifts(&self) -> &[Shift] {
        &self.shifts
    }

    fn create_workplace(&mut self, workplace: Workplace) -> EngineResult<()> {
        if self.workplace(workplace.id).is_some() {
            return Err(EngineError::DuplicateId { id: workplace.id });
        }
        self.check_workplace(&workplace)?;

        info!(workplace_id = %workplace.id, name = %workplace.name, "Created workplace");
        self.workplaces.push(workplace);
        Ok(())
    }

    fn update_workplace(&mut self, workplace: Workplace) -> EngineResult<()> {
        let index = self.workplace_index(workplace.id)?;
        self.check_workplace(&workplace)?;

        debug!(workplace_id = %workplace.id, "Updated workplace");
        self.workplaces[index] = workplace;
        Ok(())
    }

    fn delete_workplace(&mut self, id: Uuid) -> EngineResult<Vec<Shift>> {
        let index = self.workplace_index(id)?;
        self.workplaces.remove(index);

        let (removed, kept): (Vec<Shift>, Vec<Shift>) = std::mem::take(&mut self.shifts)
            .into_iter()
            .partition(|s| s.workplace_id == id);
        self.shifts = kept;

        info!(
            workplace_id = %id,
            removed_shifts = removed.len(),
            "Deleted workplace"
        );
        Ok(removed)
    }

    fn check_shift(&self, shift: &Shift) -> EngineResult<()> {
        if self.shift(shift.id).is_some() {
            return Err(EngineError::DuplicateId { id: shift.id });
        }
        if self.workplace(shift.workplace_id).is_none() {
            return Err(EngineError::WorkplaceNotFound {
                id: shift.workplace_id,
            });
        }
        validate_shift_record(shift, &self.limits).map_err(|e| EngineError::InvalidShift {
            shift_id: shift.id,
            message: e.to_string(),
        })
    }

    fn create_shift(&mut self, shift: Shift) -> EngineResult<()> {
        self.check_shift(&shift)?;

        debug!(shift_id = %shift.id, date = %shift.date, "Created shift");
        self.shifts.push(shift);
        Ok(())
    }

    fn update_shift(&mut self, shift: Shift) -> EngineResult<()> {
        let index = self.shift_index(shift.id)?;
        if self.workplace(shift.workplace_id).is_none() {
            return Err(EngineError::WorkplaceNotFound {
                id: shift.workplace_id,
            });
        }
        validate_shift_record(&shift, &self.limits).map_err(|e| EngineError::InvalidShift {
            shift_id: shift.id,
            message: e.to_string(),
        })?;

        debug!(shift_id = %shift.id, "Updated shift");
        self.shifts[index] = shift;
        Ok(())
    }

    fn delete_shift(&mut self, id: Uuid) -> EngineResult<Shift> {
        let index = self.shift_index(id)?;
        debug!(shift_id = %id, "Deleted shift");
        Ok(self.shifts.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Recurrence, RecurrenceKind};
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal::Decimal;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn day_shift(workplace_id: Uuid, date: &str) -> Shift {
        Shift::new(
            workplace_id,
            make_date(date),
            make_datetime(date, "09:00:00"),
            make_datetime(date, "17:00:00"),
        )
    }

    fn store_with_cafe() -> (InMemoryStore, Uuid) {
        let mut store = InMemoryStore::default();
        let cafe = Workplace::new("Cafe", Decimal::new(1000, 0));
        let id = cafe.id;
        store.create_workplace(cafe).unwrap();
        (store, id)
    }

    #[test]
    fn test_create_and_lookup_workplace() {
        let (store, id) = store_with_cafe();
        assert_eq!(store.list_workplaces().len(), 1);
        assert_eq!(store.workplace(id).map(|w| w.name.as_str()), Some("Cafe"));
    }

    #[test]
    fn test_duplicate_workplace_id_is_rejected() {
        let (mut store, id) = store_with_cafe();
        let mut copy = Workplace::new("Other", Decimal::new(1000, 0));
        copy.id = id;
        assert!(matches!(
            store.create_workplace(copy),
            Err(EngineError::DuplicateId { .. })
        ));
    }

    #[test]
    fn test_invalid_workplace_carries_validation_message() {
        let (mut store, _) = store_with_cafe();
        let duplicate = Workplace::new(" cafe ", Decimal::new(900, 0));
        match store.create_workplace(duplicate) {
            Err(EngineError::InvalidWorkplace { message, .. }) => {
                assert_eq!(message, "A workplace named 'cafe' already exists");
            }
            other => panic!("expected InvalidWorkplace, got {:?}", other),
        }
    }

    #[test]
    fn test_update_workplace_keeps_own_name() {
        let (mut store, id) = store_with_cafe();
        let mut updated = store.workplace(id).cloned().unwrap();
        updated.hourly_wage = Decimal::new(1200, 0);
        store.update_workplace(updated).unwrap();
        assert_eq!(
            store.workplace(id).map(|w| w.hourly_wage),
            Some(Decimal::new(1200, 0))
        );
    }

    #[test]
    fn test_update_missing_workplace_is_not_found() {
        let mut store = InMemoryStore::default();
        let ghost = Workplace::new("Ghost", Decimal::new(1000, 0));
        assert!(matches!(
            store.update_workplace(ghost),
            Err(EngineError::WorkplaceNotFound { .. })
        ));
    }

    #[test]
    fn test_delete_workplace_cascades_to_its_shifts_only() {
        let (mut store, cafe_id) = store_with_cafe();
        let shop = Workplace::new("Shop", Decimal::new(1100, 0));
        let shop_id = shop.id;
        store.create_workplace(shop).unwrap();

        store.create_shift(day_shift(cafe_id, "2026-01-14")).unwrap();
        store.create_shift(day_shift(cafe_id, "2026-01-15")).unwrap();
        store.create_shift(day_shift(shop_id, "2026-01-16")).unwrap();

        let removed = store.delete_workplace(cafe_id).unwrap();
        assert_eq!(removed.len(), 2);
        assert_eq!(store.list_shifts().len(), 1);
        assert_eq!(store.list_shifts()[0].workplace_id, shop_id);
        assert!(store.workplace(cafe_id).is_none());
    }

    #[test]
    fn test_shift_for_unknown_workplace_is_rejected() {
        let mut store = InMemoryStore::default();
        let result = store.create_shift(day_shift(Uuid::from_u128(9), "2026-01-14"));
        assert!(matches!(result, Err(EngineError::WorkplaceNotFound { .. })));
    }

    #[test]
    fn test_inverted_shift_is_rejected_without_storing() {
        let (mut store, cafe_id) = store_with_cafe();
        let shift = Shift::new(
            cafe_id,
            make_date("2026-01-14"),
            make_datetime("2026-01-14", "17:00:00"),
            make_datetime("2026-01-14", "09:00:00"),
        );
        assert!(matches!(
            store.create_shift(shift),
            Err(EngineError::InvalidShift { .. })
        ));
        assert!(store.list_shifts().is_empty());
    }

    #[test]
    fn test_update_and_delete_shift() {
        let (mut store, cafe_id) = store_with_cafe();
        let shift = day_shift(cafe_id, "2026-01-14");
        let id = shift.id;
        store.create_shift(shift.clone()).unwrap();

        let updated = shift.with_break(45);
        store.update_shift(updated).unwrap();
        assert_eq!(store.shift(id).map(|s| s.break_minutes), Some(45));

        let removed = store.delete_shift(id).unwrap();
        assert_eq!(removed.id, id);
        assert!(matches!(
            store.delete_shift(id),
            Err(EngineError::ShiftNotFound { .. })
        ));
    }

    #[test]
    fn test_query_helpers() {
        let (mut store, cafe_id) = store_with_cafe();
        let shop = Workplace::new("Shop", Decimal::new(1100, 0));
        let shop_id = shop.id;
        store.create_workplace(shop).unwrap();

        store.create_shift(day_shift(cafe_id, "2026-01-14")).unwrap();
        store.create_shift(day_shift(shop_id, "2026-01-14")).unwrap();
        store.create_shift(day_shift(cafe_id, "2026-01-16")).unwrap();
        store.create_shift(day_shift(cafe_id, "2026-01-20")).unwrap();

        assert_eq!(store.shifts_on(make_date("2026-01-14")).len(), 2);
        assert_eq!(
            store
                .shifts_between(make_date("2026-01-14"), make_date("2026-01-16"))
                .len(),
            3
        );
        assert_eq!(store.shifts_for_workplace(cafe_id).len(), 3);
        assert_eq!(store.shifts_for_workplace(shop_id).len(), 1);
    }

    #[test]
    fn test_create_recurring_shifts_stores_every_occurrence() {
        let (mut store, cafe_id) = store_with_cafe();
        let mut shift = day_shift(cafe_id, "2026-01-05");
        shift.recurrence = Some(Recurrence {
            kind: RecurrenceKind::Weekly,
            end_date: make_date("2026-01-26"),
        });

        let ids = store.create_recurring_shifts(shift).unwrap();
        assert_eq!(ids.len(), 4);
        assert_eq!(store.list_shifts().len(), 4);
        assert!(ids.iter().all(|id| store.shift(*id).is_some()));
    }

    #[test]
    fn test_rejected_recurring_shift_stores_nothing() {
        let (mut store, cafe_id) = store_with_cafe();
        let mut shift = Shift::new(
            cafe_id,
            make_date("2026-01-05"),
            make_datetime("2026-01-05", "17:00:00"),
            make_datetime("2026-01-05", "09:00:00"),
        );
        shift.recurrence = Some(Recurrence {
            kind: RecurrenceKind::Daily,
            end_date: make_date("2026-01-10"),
        });

        assert!(store.create_recurring_shifts(shift).is_err());
        assert!(store.list_shifts().is_empty());
    }
}
