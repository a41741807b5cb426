//! # Domain Types
//!
//! The three record types Munshi manages, plus the small enums that
//! classify them.
//!
//! ## Identity
//! Every entity carries `id`: a UUID v4 string minted when the entity
//! passes validation. The id is the only handle deletion and edit
//! operations accept - display positions are resolved to ids before any
//! mutation, so a re-sorted view can never alias a removal to the wrong
//! row. Identity survives replace-on-edit.
//!
//! ## No cross-entity links
//! There are no foreign keys; transactions, stock items, and customers
//! are only ever combined by the aggregation and report layers, which
//! read the three collections independently.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Record Kind
// =============================================================================

/// Whether a financial record books money in or out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Income,
    Expense,
}

impl RecordKind {
    /// User-facing label, as the report `Type` column prints it.
    pub const fn label(&self) -> &'static str {
        match self {
            RecordKind::Income => "Income",
            RecordKind::Expense => "Expense",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Financial Record
// =============================================================================

/// A single booked transaction.
///
/// Duplicates with identical fields are permitted - two cash sales of
/// the same amount on the same day are distinct records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRecord {
    /// Stable identifier (UUID v4).
    pub id: String,

    /// Day the transaction happened.
    pub date: NaiveDate,

    /// What the money was for. Non-empty after trimming.
    pub description: String,

    /// Transaction amount in paisa. Strictly positive; the kind field
    /// carries the direction.
    pub amount: Money,

    /// Income or Expense.
    pub kind: RecordKind,
}

impl FinancialRecord {
    /// Checks whether this record counts toward total income.
    #[inline]
    pub fn is_income(&self) -> bool {
        self.kind == RecordKind::Income
    }
}

// =============================================================================
// Inventory Item
// =============================================================================

/// A stock line in the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Stable identifier (UUID v4).
    pub id: String,

    /// Product name; the display sort key. Non-empty after trimming.
    pub name: String,

    /// Units on hand. Constrained non-negative at the input boundary.
    pub quantity: i64,

    /// Price per unit in paisa. Constrained non-negative at the input
    /// boundary; zero is allowed (samples, scrap).
    pub unit_price: Money,

    /// Supplier name, may be empty.
    pub supplier: String,

    /// Day the line was last updated.
    pub last_updated: NaiveDate,
}

impl InventoryItem {
    /// Value of this stock line (unit price × quantity).
    #[inline]
    pub fn stock_value(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer contact record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Stable identifier (UUID v4).
    pub id: String,

    /// Customer name; the display sort key. Non-empty after trimming.
    pub name: String,

    /// Phone number. Non-empty after trimming; no format is imposed.
    pub contact_number: String,

    /// Postal address. Non-empty after trimming.
    pub address: String,

    /// Email address. Empty means none; if non-empty it contains both
    /// `@` and `.`.
    pub email: String,
}

impl Customer {
    /// Checks whether an email address is on file.
    #[inline]
    pub fn has_email(&self) -> bool {
        !self.email.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_kind_labels() {
        assert_eq!(RecordKind::Income.label(), "Income");
        assert_eq!(RecordKind::Expense.to_string(), "Expense");
    }

    #[test]
    fn test_stock_value() {
        let item = InventoryItem {
            id: "test".to_string(),
            name: "Rebar 12mm".to_string(),
            quantity: 3,
            unit_price: Money::from_paisa(1000),
            supplier: String::new(),
            last_updated: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert_eq!(item.stock_value().paisa(), 3000);
    }

    #[test]
    fn test_has_email() {
        let mut customer = Customer {
            id: "test".to_string(),
            name: "Bilal".to_string(),
            contact_number: "0300-1234567".to_string(),
            address: "Lahore".to_string(),
            email: String::new(),
        };
        assert!(!customer.has_email());
        customer.email = "bilal@example.pk".to_string();
        assert!(customer.has_email());
    }
}
