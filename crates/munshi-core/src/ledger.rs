//! # Ledger Coordinator
//!
//! The single owner of the three stores and the one place mutations go
//! through.
//!
//! ## Control flow
//! ```text
//! presentation layer
//!       │ add_* / edit_* / remove_*          (validated mutations)
//!       ▼
//!    Ledger ──► Validation ──► MemoryStore
//!       │
//!       │ dashboard() / generate_report()    (recomputed on demand)
//!       ▼
//!    Aggregator / Report Formatter
//! ```
//!
//! Views never reach into each other for refreshes: after any mutation
//! the caller asks the ledger for a fresh `dashboard()`, which is
//! recomputed from the current store contents. Pull-based, so there is
//! no stale cache to invalidate.

use chrono::NaiveDate;

use crate::aggregate::{self, DashboardSummary};
use crate::error::CoreResult;
use crate::money::Money;
use crate::report::{self, DateRange, ReportKind};
use crate::store::MemoryStore;
use crate::types::{Customer, FinancialRecord, InventoryItem, RecordKind};
use crate::validation;

/// The in-memory state of the whole book: transactions, stock, and
/// customer records, each in its own store.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    financial: MemoryStore<FinancialRecord>,
    inventory: MemoryStore<InventoryItem>,
    customers: MemoryStore<Customer>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Ledger::default()
    }

    /// Restores a ledger from persisted collections, preserving their
    /// order as insertion order.
    pub fn from_parts(
        financial: Vec<FinancialRecord>,
        inventory: Vec<InventoryItem>,
        customers: Vec<Customer>,
    ) -> Self {
        Ledger {
            financial: MemoryStore::from_entries(financial),
            inventory: MemoryStore::from_entries(inventory),
            customers: MemoryStore::from_entries(customers),
        }
    }

    /// Consumes the ledger, yielding the three collections in insertion
    /// order for persistence.
    pub fn into_parts(self) -> (Vec<FinancialRecord>, Vec<InventoryItem>, Vec<Customer>) {
        (
            self.financial.into_entries(),
            self.inventory.into_entries(),
            self.customers.into_entries(),
        )
    }

    // =========================================================================
    // Store Access (read-only)
    // =========================================================================

    pub fn financial(&self) -> &MemoryStore<FinancialRecord> {
        &self.financial
    }

    pub fn inventory(&self) -> &MemoryStore<InventoryItem> {
        &self.inventory
    }

    pub fn customers(&self) -> &MemoryStore<Customer> {
        &self.customers
    }

    // =========================================================================
    // Financial Records
    // =========================================================================

    /// Validates and books a transaction. Returns the new record's id.
    pub fn add_financial(
        &mut self,
        date: NaiveDate,
        description: &str,
        amount: Money,
        kind: RecordKind,
    ) -> CoreResult<String> {
        let record = validation::validate_financial(date, description, amount, kind)?;
        let id = record.id.clone();
        self.financial.add(record);
        Ok(id)
    }

    /// Replaces the transaction with the given id wholesale. The
    /// replacement is validated like a new record and keeps the old id.
    pub fn edit_financial(
        &mut self,
        id: &str,
        date: NaiveDate,
        description: &str,
        amount: Money,
        kind: RecordKind,
    ) -> CoreResult<()> {
        let record = validation::validate_financial(date, description, amount, kind)?;
        self.financial.replace(id, record)
    }

    /// Removes a transaction by id.
    pub fn remove_financial(&mut self, id: &str) -> CoreResult<FinancialRecord> {
        self.financial.remove(id)
    }

    /// Removes the transaction shown at the given display row.
    pub fn remove_financial_at(&mut self, row: usize) -> CoreResult<FinancialRecord> {
        self.financial.remove_at(row)
    }

    // =========================================================================
    // Inventory Items
    // =========================================================================

    /// Validates and adds a stock line. Returns the new item's id.
    pub fn add_inventory(
        &mut self,
        name: &str,
        quantity: i64,
        unit_price: Money,
        supplier: &str,
        last_updated: NaiveDate,
    ) -> CoreResult<String> {
        let item =
            validation::validate_inventory(name, quantity, unit_price, supplier, last_updated)?;
        let id = item.id.clone();
        self.inventory.add(item);
        Ok(id)
    }

    /// Replaces the stock line with the given id wholesale.
    pub fn edit_inventory(
        &mut self,
        id: &str,
        name: &str,
        quantity: i64,
        unit_price: Money,
        supplier: &str,
        last_updated: NaiveDate,
    ) -> CoreResult<()> {
        let item =
            validation::validate_inventory(name, quantity, unit_price, supplier, last_updated)?;
        self.inventory.replace(id, item)
    }

    /// Removes a stock line by id.
    pub fn remove_inventory(&mut self, id: &str) -> CoreResult<InventoryItem> {
        self.inventory.remove(id)
    }

    /// Removes the stock line shown at the given display row.
    pub fn remove_inventory_at(&mut self, row: usize) -> CoreResult<InventoryItem> {
        self.inventory.remove_at(row)
    }

    // =========================================================================
    // Customers
    // =========================================================================

    /// Validates and records a customer. Returns the new record's id.
    pub fn add_customer(
        &mut self,
        name: &str,
        contact_number: &str,
        address: &str,
        email: &str,
    ) -> CoreResult<String> {
        let customer = validation::validate_customer(name, contact_number, address, email)?;
        let id = customer.id.clone();
        self.customers.add(customer);
        Ok(id)
    }

    /// Replaces the customer with the given id wholesale.
    pub fn edit_customer(
        &mut self,
        id: &str,
        name: &str,
        contact_number: &str,
        address: &str,
        email: &str,
    ) -> CoreResult<()> {
        let customer = validation::validate_customer(name, contact_number, address, email)?;
        self.customers.replace(id, customer)
    }

    /// Removes a customer by id.
    pub fn remove_customer(&mut self, id: &str) -> CoreResult<Customer> {
        self.customers.remove(id)
    }

    /// Removes the customer shown at the given display row.
    pub fn remove_customer_at(&mut self, row: usize) -> CoreResult<Customer> {
        self.customers.remove_at(row)
    }

    // =========================================================================
    // Derived Views
    // =========================================================================

    /// Recomputes the dashboard from the current store contents.
    pub fn dashboard(&self) -> DashboardSummary {
        aggregate::dashboard(&self.financial, &self.inventory, &self.customers)
    }

    /// Renders a report. The range applies to the financial summary only.
    pub fn generate_report(&self, kind: ReportKind, range: DateRange) -> String {
        report::generate(
            kind,
            range,
            self.financial.entries(),
            self.inventory.entries(),
            self.customers.entries(),
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn sample() -> Ledger {
        let mut ledger = Ledger::new();
        ledger
            .add_financial(day(1), "Sale", Money::from_rupees(100), RecordKind::Income)
            .unwrap();
        ledger
            .add_financial(day(2), "Fuel", Money::from_rupees(40), RecordKind::Expense)
            .unwrap();
        ledger
            .add_inventory("Rod", 3, Money::from_rupees(10), "Ittehad", day(1))
            .unwrap();
        ledger
            .add_customer("Asad", "0300-1234567", "Lahore", "")
            .unwrap();
        ledger
    }

    #[test]
    fn test_add_validates() {
        let mut ledger = Ledger::new();
        let err = ledger
            .add_financial(day(1), " ", Money::from_rupees(10), RecordKind::Income)
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::Validation(ValidationError::EmptyField {
                field: "description"
            })
        );
        assert_eq!(ledger.financial().count(), 0);
    }

    #[test]
    fn test_dashboard_reflects_mutations() {
        let mut ledger = sample();
        let summary = ledger.dashboard();
        assert_eq!(summary.total_income, Money::from_rupees(100));
        assert_eq!(summary.total_expense, Money::from_rupees(40));
        assert_eq!(summary.inventory_value, Money::from_rupees(30));
        assert_eq!(summary.customer_count, 1);

        // Newest transaction leads the recent-activity table.
        assert_eq!(summary.recent_activity[0].description, "Fuel");

        let id = ledger.financial().id_at(0).unwrap();
        ledger.remove_financial(&id).unwrap();
        let summary = ledger.dashboard();
        assert_eq!(summary.total_expense, Money::zero());
        assert_eq!(summary.recent_activity.len(), 1);
    }

    #[test]
    fn test_edit_is_replacement_with_stable_id() {
        let mut ledger = sample();
        let id = ledger.inventory().id_at(0).unwrap();

        ledger
            .edit_inventory(&id, "Rod 16mm", 5, Money::from_rupees(12), "Ittehad", day(3))
            .unwrap();

        let item = ledger.inventory().get(&id).unwrap();
        assert_eq!(item.name, "Rod 16mm");
        assert_eq!(item.quantity, 5);
        assert_eq!(ledger.dashboard().inventory_value, Money::from_rupees(60));
    }

    #[test]
    fn test_edit_rejects_invalid_replacement() {
        let mut ledger = sample();
        let id = ledger.customers().id_at(0).unwrap();

        let err = ledger
            .edit_customer(&id, "Asad", "0300", "Lahore", "a@b")
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidEmail { .. })
        ));

        // The original record is untouched.
        assert_eq!(ledger.customers().get(&id).unwrap().email, "");
    }

    #[test]
    fn test_report_through_ledger() {
        let ledger = sample();
        let report =
            ledger.generate_report(ReportKind::FinancialSummary, DateRange::new(day(1), day(31)));
        assert!(report.contains("Total Income:        100.00 PKR"));
        assert!(report.contains("Net Profit/Loss:     60.00 PKR"));
    }

    #[test]
    fn test_parts_round_trip_preserves_order() {
        let ledger = sample();
        let (financial, inventory, customers) = ledger.into_parts();
        assert_eq!(financial[0].description, "Sale");

        let restored = Ledger::from_parts(financial, inventory, customers);
        assert_eq!(restored.financial().count(), 2);
        assert_eq!(restored.financial().entries()[0].description, "Sale");
        assert_eq!(restored.inventory().count(), 1);
        assert_eq!(restored.customers().count(), 1);
    }
}
