//! # Aggregation Module
//!
//! Derived dashboard metrics over the three stores' current contents.
//!
//! Everything here is recomputed from scratch on every call - no cache,
//! no incremental update. Data volumes are small and a pull-based
//! recompute can never go stale, so there is no refresh protocol to get
//! wrong.

use serde::Serialize;

use crate::money::Money;
use crate::store::MemoryStore;
use crate::types::{Customer, FinancialRecord, InventoryItem};

/// Rows shown in the dashboard's recent-activity table.
pub const RECENT_ACTIVITY_ROWS: usize = 5;

// =============================================================================
// Dashboard Summary
// =============================================================================

/// The figures behind the dashboard cards, plus the recent-activity rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// Sum of all Income amounts.
    pub total_income: Money,

    /// Sum of all Expense amounts.
    pub total_expense: Money,

    /// Sum of unit price × quantity over all stock lines.
    pub inventory_value: Money,

    /// Number of customer records.
    pub customer_count: usize,

    /// The most recent transactions, newest first.
    pub recent_activity: Vec<FinancialRecord>,
}

/// Computes the full dashboard from current store snapshots.
pub fn dashboard(
    financial: &MemoryStore<FinancialRecord>,
    inventory: &MemoryStore<InventoryItem>,
    customers: &MemoryStore<Customer>,
) -> DashboardSummary {
    DashboardSummary {
        total_income: total_income(financial.entries()),
        total_expense: total_expense(financial.entries()),
        inventory_value: inventory_value(inventory.entries()),
        customer_count: customers.count(),
        recent_activity: recent_activity(financial.entries(), RECENT_ACTIVITY_ROWS),
    }
}

// =============================================================================
// Metric Functions
// =============================================================================

/// Sum of amounts over Income records.
pub fn total_income(records: &[FinancialRecord]) -> Money {
    records
        .iter()
        .filter(|r| r.is_income())
        .map(|r| r.amount)
        .sum()
}

/// Sum of amounts over Expense records.
pub fn total_expense(records: &[FinancialRecord]) -> Money {
    records
        .iter()
        .filter(|r| !r.is_income())
        .map(|r| r.amount)
        .sum()
}

/// Total stock value across all inventory lines.
pub fn inventory_value(items: &[InventoryItem]) -> Money {
    items.iter().map(InventoryItem::stock_value).sum()
}

/// The top `rows` transactions by date, newest first.
///
/// The sort is stable: records sharing a date keep their insertion
/// order relative to each other.
pub fn recent_activity(records: &[FinancialRecord], rows: usize) -> Vec<FinancialRecord> {
    let mut recent = records.to_vec();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(rows);
    recent
}

// =============================================================================
// Unit Tests
// =============================================================================
