//! # Entity Stores
//!
//! In-memory, insertion-ordered collections - one per entity type -
//! behind the small repository surface the rest of the system programs
//! against (`add`, `remove` by id, `list`), so a file- or
//! database-backed implementation can be substituted without touching
//! validation, aggregation, or report logic.
//!
//! ## Display order vs storage order
//! ```text
//! storage (insertion order)      list() view (canonical sort)
//! ─────────────────────────      ────────────────────────────
//! Rod      ─────────────────────► Angle
//! Angle    ─────────────────────► Rod
//! Sheet    ─────────────────────► Sheet
//! ```
//! The two orders diverge, which is why removal is id-based: a display
//! row is resolved to a stable id first (`id_at`), then removed. The
//! positional `remove_at` exists for callers holding a row number and
//! goes through that resolution, never through the storage index.

use std::cmp::Ordering;

use crate::error::{CoreError, CoreResult};
use crate::types::{Customer, FinancialRecord, InventoryItem};

// =============================================================================
// Record Trait
// =============================================================================

/// What a store needs from an entity: a stable id and a canonical
/// display order.
pub trait Record {
    /// Entity label used in error messages ("transaction not found: ...").
    const ENTITY: &'static str;

    /// The stable identifier.
    fn id(&self) -> &str;

    /// Overwrites the identifier. Used by replace-on-edit so the
    /// replacement keeps the identity of the record it supersedes.
    fn set_id(&mut self, id: String);

    /// Canonical display ordering against another entity of the same type.
    fn display_cmp(&self, other: &Self) -> Ordering;
}

/// Transactions display most recent first.
impl Record for FinancialRecord {
    const ENTITY: &'static str = "transaction";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn display_cmp(&self, other: &Self) -> Ordering {
        other.date.cmp(&self.date)
    }
}

/// Stock displays by product name, ascending, case-sensitive.
impl Record for InventoryItem {
    const ENTITY: &'static str = "inventory item";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn display_cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

/// Customers display by name, ascending, case-sensitive.
impl Record for Customer {
    const ENTITY: &'static str = "customer";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn display_cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

// =============================================================================
// Memory Store
// =============================================================================

/// An owned, insertion-ordered collection of one entity type.
///
/// ## Invariants
/// - Entries keep their insertion order; `list()` sorts a borrowed view
///   and never reorders storage.
/// - No uniqueness constraint: identical entries may coexist.
/// - Ids are unique in practice (UUID v4) and are the only mutation handle.
#[derive(Debug, Clone)]
pub struct MemoryStore<T: Record> {
    entries: Vec<T>,
}

impl<T: Record> MemoryStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryStore {
            entries: Vec::new(),
        }
    }

    /// Restores a store from previously listed entries, preserving
    /// their order as the insertion order.
    pub fn from_entries(entries: Vec<T>) -> Self {
        MemoryStore { entries }
    }

    /// Appends an entity. Duplicate field values are permitted.
    pub fn add(&mut self, entity: T) {
        self.entries.push(entity);
    }

    /// Number of entries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order. Aggregation and persistence read this.
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Consumes the store, yielding entries in insertion order.
    pub fn into_entries(self) -> Vec<T> {
        self.entries
    }

    /// Borrowed view in canonical display order. The sort is stable, so
    /// entries that compare equal keep their insertion order, and two
    /// calls without an intervening mutation yield identical sequences.
    pub fn list(&self) -> Vec<&T> {
        let mut view: Vec<&T> = self.entries.iter().collect();
        view.sort_by(|a, b| a.display_cmp(b));
        view
    }

    /// Looks up an entry by id.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Resolves a display row (0-based, in `list()` order) to the
    /// stable id of the entity shown there.
    pub fn id_at(&self, index: usize) -> CoreResult<String> {
        let view = self.list();
        view.get(index)
            .map(|e| e.id().to_string())
            .ok_or(CoreError::IndexOutOfRange {
                index,
                rows: view.len(),
            })
    }

    /// Removes the entry with the given id and returns it.
    pub fn remove(&mut self, id: &str) -> CoreResult<T> {
        match self.entries.iter().position(|e| e.id() == id) {
            Some(pos) => Ok(self.entries.remove(pos)),
            None => Err(CoreError::EntryNotFound {
                entity: T::ENTITY,
                id: id.to_string(),
            }),
        }
    }

    /// Removes the entity currently displayed at the given row of the
    /// sorted view. Resolves the row to an id first, so the entity
    /// removed is the one the caller was shown.
    pub fn remove_at(&mut self, index: usize) -> CoreResult<T> {
        let id = self.id_at(index)?;
        self.remove(&id)
    }

    /// Replaces the entry with the given id wholesale, keeping its id
    /// and insertion position. Edit is replacement, not partial mutation.
    pub fn replace(&mut self, id: &str, mut entity: T) -> CoreResult<()> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.id() == id)
            .ok_or_else(|| CoreError::EntryNotFound {
                entity: T::ENTITY,
                id: id.to_string(),
            })?;
        entity.set_id(id.to_string());
        self.entries[pos] = entity;
        Ok(())
    }
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        MemoryStore::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::RecordKind;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn tx(id: &str, d: u32, amount: i64) -> FinancialRecord {
        FinancialRecord {
            id: id.to_string(),
            date: day(d),
            description: format!("tx-{id}"),
            amount: Money::from_paisa(amount),
            kind: RecordKind::Income,
        }
    }

    fn item(id: &str, name: &str) -> InventoryItem {
        InventoryItem {
            id: id.to_string(),
            name: name.to_string(),
            quantity: 1,
            unit_price: Money::from_paisa(100),
            supplier: String::new(),
            last_updated: day(1),
        }
    }

    #[test]
    fn test_add_keeps_insertion_order_and_duplicates() {
        let mut store = MemoryStore::new();
        store.add(tx("a", 2, 100));
        store.add(tx("b", 1, 100));
        store.add(tx("c", 2, 100));

        assert_eq!(store.count(), 3);
        let ids: Vec<&str> = store.entries().iter().map(|e| e.id()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_financial_list_is_date_descending() {
        let mut store = MemoryStore::new();
        store.add(tx("old", 1, 100));
        store.add(tx("new", 3, 100));
        store.add(tx("mid", 2, 100));

        let ids: Vec<&str> = store.list().iter().map(|e| e.id()).collect();
        assert_eq!(ids, ["new", "mid", "old"]);
    }

    #[test]
    fn test_list_stable_on_ties_and_idempotent() {
        let mut store = MemoryStore::new();
        store.add(tx("first", 2, 100));
        store.add(tx("second", 2, 100));

        let once: Vec<&str> = store.list().iter().map(|e| e.id()).collect();
        let twice: Vec<&str> = store.list().iter().map(|e| e.id()).collect();
        assert_eq!(once, ["first", "second"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_inventory_list_is_name_ascending_case_sensitive() {
        let mut store = MemoryStore::new();
        store.add(item("1", "rod"));
        store.add(item("2", "Angle"));
        store.add(item("3", "Sheet"));

        let names: Vec<&str> = store.list().iter().map(|e| e.name.as_str()).collect();
        // Uppercase sorts before lowercase in a case-sensitive lexical order.
        assert_eq!(names, ["Angle", "Sheet", "rod"]);
    }

    #[test]
    fn test_remove_at_uses_display_order_not_insertion_order() {
        // Inserted out of display order: storage index 0 is "Rod" but
        // display row 0 is "Angle". Removing row 0 must drop "Angle".
        let mut store = MemoryStore::new();
        store.add(item("rod", "Rod"));
        store.add(item("angle", "Angle"));

        let removed = store.remove_at(0).unwrap();
        assert_eq!(removed.name, "Angle");

        let names: Vec<&str> = store.list().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Rod"]);
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut store = MemoryStore::new();
        store.add(item("1", "Rod"));

        let err = store.remove_at(5).unwrap_err();
        assert_eq!(err, CoreError::IndexOutOfRange { index: 5, rows: 1 });
    }

    #[test]
    fn test_remove_by_stale_id() {
        let mut store = MemoryStore::new();
        store.add(item("1", "Rod"));
        store.remove("1").unwrap();

        let err = store.remove("1").unwrap_err();
        assert_eq!(
            err,
            CoreError::EntryNotFound {
                entity: "inventory item",
                id: "1".to_string(),
            }
        );
    }

    #[test]
    fn test_replace_keeps_id_and_position() {
        let mut store = MemoryStore::new();
        store.add(item("1", "Rod"));
        store.add(item("2", "Angle"));

        let mut edited = item("temp", "Rod 16mm");
        edited.quantity = 9;
        store.replace("1", edited).unwrap();

        let entries = store.entries();
        assert_eq!(entries[0].id, "1");
        assert_eq!(entries[0].name, "Rod 16mm");
        assert_eq!(entries[0].quantity, 9);
        assert_eq!(entries[1].id, "2");
    }

    #[test]
    fn test_id_at_matches_list() {
        let mut store = MemoryStore::new();
        store.add(item("rod", "Rod"));
        store.add(item("angle", "Angle"));

        assert_eq!(store.id_at(0).unwrap(), "angle");
        assert_eq!(store.id_at(1).unwrap(), "rod");
        assert!(store.id_at(2).is_err());
    }
}
