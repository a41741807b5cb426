//! # Report Formatter
//!
//! Fixed-layout text reports over the current store contents.
//!
//! ## Layout contract
//! The output is rendered into a monospace text area, so the layout is
//! part of the interface: label columns are padded to fixed widths,
//! amount columns are right-aligned with grouped thousands and two
//! decimals, and each table is introduced by a rule of 70 dashes.
//! Changing a width is a breaking change for anything diffing reports.
//!
//! Three kinds exist. A kind arrives as the user-facing label and is
//! parsed by [`ReportKind::parse`]; anything unrecognized is an error
//! and produces no output.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregate;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Customer, FinancialRecord, InventoryItem};

/// Width of the dash rule under each table header.
const RULE_WIDTH: usize = 70;

// =============================================================================
// Report Kind
// =============================================================================

/// Selector among the three supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    FinancialSummary,
    InventorySummary,
    CustomerList,
}

impl ReportKind {
    /// All kinds, in menu order.
    pub const ALL: [ReportKind; 3] = [
        ReportKind::FinancialSummary,
        ReportKind::InventorySummary,
        ReportKind::CustomerList,
    ];

    /// The user-facing label, as shown in the report picker.
    pub const fn label(&self) -> &'static str {
        match self {
            ReportKind::FinancialSummary => "Financial Summary",
            ReportKind::InventorySummary => "Inventory Summary",
            ReportKind::CustomerList => "Customer List",
        }
    }

    /// Parses a user-facing label back into a kind.
    ///
    /// Fails with `UnknownReportKind` for anything that is not exactly
    /// one of the three labels (after trimming).
    pub fn parse(label: &str) -> CoreResult<Self> {
        let label = label.trim();
        ReportKind::ALL
            .into_iter()
            .find(|kind| kind.label() == label)
            .ok_or_else(|| CoreError::UnknownReportKind(label.to_string()))
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Date Range
// =============================================================================

/// An inclusive calendar date range for the financial report.
///
/// A range with `start > end` is accepted and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    /// Checks `start <= date <= end`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

// =============================================================================
// Report Generation
// =============================================================================

/// Renders the report of the given kind. The date range applies to the
/// financial summary only; the other two kinds cover everything.
pub fn generate(
    kind: ReportKind,
    range: DateRange,
    financial: &[FinancialRecord],
    inventory: &[InventoryItem],
    customers: &[Customer],
) -> String {
    match kind {
        ReportKind::FinancialSummary => financial_summary(financial, range),
        ReportKind::InventorySummary => inventory_summary(inventory),
        ReportKind::CustomerList => customer_list(customers),
    }
}

/// Financial summary over `start <= date <= end`: income, expense, and
/// net totals, then the matching transactions sorted by date ascending.
pub fn financial_summary(records: &[FinancialRecord], range: DateRange) -> String {
    let mut filtered: Vec<&FinancialRecord> =
        records.iter().filter(|r| range.contains(r.date)).collect();
    // Stable by construction: records sharing a date keep insertion order.
    filtered.sort_by_key(|r| r.date);

    let total_income: Money = filtered
        .iter()
        .filter(|r| r.is_income())
        .map(|r| r.amount)
        .sum();
    let total_expense: Money = filtered
        .iter()
        .filter(|r| !r.is_income())
        .map(|r| r.amount)
        .sum();
    let net = total_income - total_expense;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "--- Financial Summary Report ({} to {}) ---",
        range.start, range.end
    );
    let _ = writeln!(out, "{:<20} {}", "Total Income:", total_income);
    let _ = writeln!(out, "{:<20} {}", "Total Expense:", total_expense);
    let _ = writeln!(out, "{:<20} {}", "Net Profit/Loss:", net);
    let _ = writeln!(out);
    let _ = writeln!(out, "--- Detailed Transactions ---");
    let _ = writeln!(
        out,
        "{:<12} {:<8} {:>15} {:<30}",
        "Date", "Type", "Amount", "Description"
    );
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    for record in filtered {
        let _ = writeln!(
            out,
            "{:<12} {:<8} {:>15} {:<30}",
            record.date.to_string(),
            record.kind.label(),
            record.amount.grouped(),
            record.description
        );
    }
    out
}

/// Inventory summary: line count, quantity on hand, total stock value,
/// then every item sorted by name ascending.
pub fn inventory_summary(items: &[InventoryItem]) -> String {
    let mut sorted: Vec<&InventoryItem> = items.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let total_quantity: i64 = items.iter().map(|i| i.quantity).sum();
    let total_value = aggregate::inventory_value(items);

    let mut out = String::new();
    let _ = writeln!(out, "--- Inventory Summary Report ---");
    let _ = writeln!(out, "{:<20} {}", "Total Unique Items:", items.len());
    let _ = writeln!(out, "{:<20} {}", "Total Quantity on Hand:", total_quantity);
    let _ = writeln!(out, "{:<20} {}", "Total Inventory Value:", total_value);
    let _ = writeln!(out);
    let _ = writeln!(out, "--- Detailed Inventory ---");
    let _ = writeln!(
        out,
        "{:<25} {:>8} {:>15} {:<20}",
        "Product Name", "Qty", "Unit Price", "Supplier"
    );
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    for item in sorted {
        let _ = writeln!(
            out,
            "{:<25} {:>8} {:>15} {:<20}",
            item.name,
            item.quantity,
            item.unit_price.grouped(),
            item.supplier
        );
    }
    out
}

/// Customer list: the head count, then every customer sorted by name
/// ascending. An empty email renders as `N/A`.
pub fn customer_list(customers: &[Customer]) -> String {
    let mut sorted: Vec<&Customer> = customers.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut out = String::new();
    let _ = writeln!(out, "--- Customer List Report ---");
    let _ = writeln!(out, "{:<20} {}", "Total Customers:", customers.len());
    let _ = writeln!(out);
    let _ = writeln!(out, "--- Detailed Customer Information ---");
    let _ = writeln!(out, "{:<25} {:<15} {:<30}", "Name", "Contact", "Email");
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    for customer in sorted {
        let email = if customer.has_email() {
            customer.email.as_str()
        } else {
            "N/A"
        };
        let _ = writeln!(
            out,
            "{:<25} {:<15} {:<30}",
            customer.name, customer.contact_number, email
        );
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RecordKind;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn range_january() -> DateRange {
        DateRange::new(day(1), day(31))
    }

    fn tx(d: u32, rupees: i64, kind: RecordKind, description: &str) -> FinancialRecord {
        FinancialRecord {
            id: format!("{description}-{d}"),
            date: day(d),
            description: description.to_string(),
            amount: Money::from_rupees(rupees),
            kind,
        }
    }

    #[test]
    fn test_parse_kinds() {
        assert_eq!(
            ReportKind::parse("Financial Summary").unwrap(),
            ReportKind::FinancialSummary
        );
        assert_eq!(
            ReportKind::parse(" Customer List ").unwrap(),
            ReportKind::CustomerList
        );

        let err = ReportKind::parse("Foo").unwrap_err();
        assert_eq!(err, CoreError::UnknownReportKind("Foo".to_string()));
    }

    #[test]
    fn test_date_range_inclusive() {
        let range = range_january();
        assert!(range.contains(day(1)));
        assert!(range.contains(day(31)));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));

        let inverted = DateRange::new(day(31), day(1));
        assert!(!inverted.contains(day(15)));
    }

    #[test]
    fn test_financial_summary_totals_and_order() {
        // Inserted newest first; the report must come out date ascending.
        let records = [
            tx(2, 40, RecordKind::Expense, "Fuel"),
            tx(1, 100, RecordKind::Income, "Sale"),
        ];
        let report = financial_summary(&records, range_january());
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(
            lines[0],
            "--- Financial Summary Report (2024-01-01 to 2024-01-31) ---"
        );
        assert_eq!(lines[1], "Total Income:        100.00 PKR");
        assert_eq!(lines[2], "Total Expense:       40.00 PKR");
        assert_eq!(lines[3], "Net Profit/Loss:     60.00 PKR");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "--- Detailed Transactions ---");
        assert_eq!(lines[7], "-".repeat(70));
        assert_eq!(
            lines[8],
            format!(
                "{:<12} {:<8} {:>15} {:<30}",
                "2024-01-01", "Income", "100.00", "Sale"
            )
        );
        assert_eq!(
            lines[9],
            format!(
                "{:<12} {:<8} {:>15} {:<30}",
                "2024-01-02", "Expense", "40.00", "Fuel"
            )
        );
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn test_financial_summary_filters_by_range() {
        let records = [
            tx(5, 100, RecordKind::Income, "Inside"),
            tx(25, 70, RecordKind::Income, "Outside"),
        ];
        let report = financial_summary(&records, DateRange::new(day(1), day(10)));

        assert!(report.contains("Inside"));
        assert!(!report.contains("Outside"));
        assert!(report.contains("Total Income:        100.00 PKR"));
    }

    #[test]
    fn test_financial_summary_negative_net() {
        let records = [tx(3, 75, RecordKind::Expense, "Rent")];
        let report = financial_summary(&records, range_january());
        assert!(report.contains("Net Profit/Loss:     -75.00 PKR"));
    }

    #[test]
    fn test_inventory_summary() {
        let items = [
            InventoryItem {
                id: "b".to_string(),
                name: "Rod".to_string(),
                quantity: 2,
                unit_price: Money::from_paisa(550),
                supplier: "Ittehad".to_string(),
                last_updated: day(2),
            },
            InventoryItem {
                id: "a".to_string(),
                name: "Angle".to_string(),
                quantity: 3,
                unit_price: Money::from_paisa(1000),
                supplier: String::new(),
                last_updated: day(1),
            },
        ];
        let report = inventory_summary(&items);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "--- Inventory Summary Report ---");
        assert_eq!(lines[1], "Total Unique Items:  2");
        assert_eq!(lines[2], "Total Quantity on Hand: 5");
        assert_eq!(lines[3], "Total Inventory Value: 41.00 PKR");
        // Sorted by name: Angle before Rod.
        assert_eq!(
            lines[8],
            format!("{:<25} {:>8} {:>15} {:<20}", "Angle", 3, "10.00", "")
        );
        assert_eq!(
            lines[9],
            format!("{:<25} {:>8} {:>15} {:<20}", "Rod", 2, "5.50", "Ittehad")
        );
    }

    #[test]
    fn test_customer_list_with_email_placeholder() {
        let customers = [
            Customer {
                id: "2".to_string(),
                name: "Zubair".to_string(),
                contact_number: "0321-7654321".to_string(),
                address: "Karachi".to_string(),
                email: String::new(),
            },
            Customer {
                id: "1".to_string(),
                name: "Asad".to_string(),
                contact_number: "0300-1234567".to_string(),
                address: "Lahore".to_string(),
                email: "asad@steel.pk".to_string(),
            },
        ];
        let report = customer_list(&customers);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "--- Customer List Report ---");
        assert_eq!(lines[1], "Total Customers:     2");
        assert_eq!(
            lines[6],
            format!(
                "{:<25} {:<15} {:<30}",
                "Asad", "0300-1234567", "asad@steel.pk"
            )
        );
        assert_eq!(
            lines[7],
            format!("{:<25} {:<15} {:<30}", "Zubair", "0321-7654321", "N/A")
        );
    }

    #[test]
    fn test_generate_dispatches() {
        let report = generate(ReportKind::CustomerList, range_january(), &[], &[], &[]);
        assert!(report.starts_with("--- Customer List Report ---"));
        assert!(report.contains("Total Customers:     0"));
    }
}
