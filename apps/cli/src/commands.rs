//! # Command Handlers
//!
//! One function per subcommand. Handlers take the ledger and plain
//! values, apply the input-boundary checks the original entry forms
//! enforced with spinbox ranges, call the core, and print.
//!
//! Row numbers shown by the `list` commands are 1-based positions in
//! the canonical display sort; `remove` and `edit` resolve them to
//! stable ids through the core before mutating, so the entry affected
//! is always the one that was shown.

use chrono::{Local, Months, NaiveDate};
use tracing::info;

use munshi_core::{DateRange, Ledger, Money, RecordKind, ReportKind, MAX_AMOUNT_RUPEES};

use crate::error::{CliError, CliResult};

// =============================================================================
// Input Boundary
// =============================================================================

/// Converts a 1-based display row to a 0-based view index.
fn row_to_index(row: usize) -> CliResult<usize> {
    row.checked_sub(1)
        .ok_or_else(|| CliError::Input("row numbers start at 1".to_string()))
}

/// Rejects amounts outside the entry form's range before validation.
fn bounded_amount(field: &str, amount: Money) -> CliResult<Money> {
    if amount.is_negative() || amount > Money::from_rupees(MAX_AMOUNT_RUPEES) {
        return Err(CliError::Input(format!(
            "{field} must be between 0 and {MAX_AMOUNT_RUPEES} rupees"
        )));
    }
    Ok(amount)
}

/// Today's date for defaults (entry forms default their date pickers
/// to the current day).
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

// =============================================================================
// Shared Output
// =============================================================================

/// The one-line refresh printed after every successful mutation.
pub fn print_totals(ledger: &Ledger) {
    let summary = ledger.dashboard();
    println!(
        "Total Income: {} | Total Expense: {} | Inventory Value: {} | Customers: {}",
        summary.total_income,
        summary.total_expense,
        summary.inventory_value,
        summary.customer_count
    );
}

// =============================================================================
// Financial Transactions
// =============================================================================

pub fn tx_add(
    ledger: &mut Ledger,
    date: NaiveDate,
    description: &str,
    amount: Money,
    kind: RecordKind,
) -> CliResult<()> {
    let amount = bounded_amount("amount", amount)?;
    let id = ledger.add_financial(date, description, amount, kind)?;
    info!(%id, "transaction booked");
    println!("Transaction recorded.");
    Ok(())
}

pub fn tx_list(ledger: &Ledger) {
    let view = ledger.financial().list();
    if view.is_empty() {
        println!("No transactions recorded.");
        return;
    }
    println!(
        "{:<5} {:<12} {:<30} {:>14} {:<8}",
        "No.", "Date", "Description", "Amount (PKR)", "Type"
    );
    println!("{}", "-".repeat(73));
    for (row, record) in view.iter().enumerate() {
        println!(
            "{:<5} {:<12} {:<30} {:>14} {:<8}",
            row + 1,
            record.date.to_string(),
            record.description,
            record.amount.grouped(),
            record.kind.label()
        );
    }
}

pub fn tx_remove(ledger: &mut Ledger, row: usize) -> CliResult<()> {
    let removed = ledger.remove_financial_at(row_to_index(row)?)?;
    info!(id = %removed.id, "transaction deleted");
    println!("Deleted transaction '{}'.", removed.description);
    Ok(())
}

pub fn tx_edit(
    ledger: &mut Ledger,
    row: usize,
    date: NaiveDate,
    description: &str,
    amount: Money,
    kind: RecordKind,
) -> CliResult<()> {
    let amount = bounded_amount("amount", amount)?;
    let id = ledger.financial().id_at(row_to_index(row)?)?;
    ledger.edit_financial(&id, date, description, amount, kind)?;
    info!(%id, "transaction replaced");
    println!("Transaction updated.");
    Ok(())
}

// =============================================================================
// Inventory Stock
// =============================================================================

pub fn stock_add(
    ledger: &mut Ledger,
    name: &str,
    quantity: i64,
    unit_price: Money,
    supplier: &str,
    last_updated: NaiveDate,
) -> CliResult<()> {
    let unit_price = bounded_amount("unit price", unit_price)?;
    let id = ledger.add_inventory(name, quantity, unit_price, supplier, last_updated)?;
    info!(%id, "inventory item added");
    println!("Inventory item recorded.");
    Ok(())
}

pub fn stock_list(ledger: &Ledger) {
    let view = ledger.inventory().list();
    if view.is_empty() {
        println!("No inventory items recorded.");
        return;
    }
    println!(
        "{:<5} {:<25} {:>8} {:>16} {:<20} {:<12}",
        "No.", "Product Name", "Qty", "Unit Price (PKR)", "Supplier", "Last Updated"
    );
    println!("{}", "-".repeat(91));
    for (row, item) in view.iter().enumerate() {
        println!(
            "{:<5} {:<25} {:>8} {:>16} {:<20} {:<12}",
            row + 1,
            item.name,
            item.quantity,
            item.unit_price.grouped(),
            item.supplier,
            item.last_updated.to_string()
        );
    }
}

pub fn stock_remove(ledger: &mut Ledger, row: usize) -> CliResult<()> {
    let removed = ledger.remove_inventory_at(row_to_index(row)?)?;
    info!(id = %removed.id, "inventory item deleted");
    println!("Deleted item '{}'.", removed.name);
    Ok(())
}

pub fn stock_edit(
    ledger: &mut Ledger,
    row: usize,
    name: &str,
    quantity: i64,
    unit_price: Money,
    supplier: &str,
    last_updated: NaiveDate,
) -> CliResult<()> {
    let unit_price = bounded_amount("unit price", unit_price)?;
    let id = ledger.inventory().id_at(row_to_index(row)?)?;
    ledger.edit_inventory(&id, name, quantity, unit_price, supplier, last_updated)?;
    info!(%id, "inventory item replaced");
    println!("Inventory item updated.");
    Ok(())
}

// =============================================================================
// Customers
// =============================================================================

pub fn customer_add(
    ledger: &mut Ledger,
    name: &str,
    contact_number: &str,
    address: &str,
    email: &str,
) -> CliResult<()> {
    let id = ledger.add_customer(name, contact_number, address, email)?;
    info!(%id, "customer added");
    println!("Customer recorded.");
    Ok(())
}

pub fn customer_list(ledger: &Ledger) {
    let view = ledger.customers().list();
    if view.is_empty() {
        println!("No customers recorded.");
        return;
    }
    println!(
        "{:<5} {:<25} {:<15} {:<30} {:<30}",
        "No.", "Customer Name", "Contact", "Address", "Email"
    );
    println!("{}", "-".repeat(108));
    for (row, customer) in view.iter().enumerate() {
        let email = if customer.has_email() {
            customer.email.as_str()
        } else {
            "N/A"
        };
        println!(
            "{:<5} {:<25} {:<15} {:<30} {:<30}",
            row + 1,
            customer.name,
            customer.contact_number,
            customer.address,
            email
        );
    }
}

pub fn customer_remove(ledger: &mut Ledger, row: usize) -> CliResult<()> {
    let removed = ledger.remove_customer_at(row_to_index(row)?)?;
    info!(id = %removed.id, "customer deleted");
    println!("Deleted customer '{}'.", removed.name);
    Ok(())
}

pub fn customer_edit(
    ledger: &mut Ledger,
    row: usize,
    name: &str,
    contact_number: &str,
    address: &str,
    email: &str,
) -> CliResult<()> {
    let id = ledger.customers().id_at(row_to_index(row)?)?;
    ledger.edit_customer(&id, name, contact_number, address, email)?;
    info!(%id, "customer replaced");
    println!("Customer updated.");
    Ok(())
}

// =============================================================================
// Dashboard and Reports
// =============================================================================

pub fn dashboard(ledger: &Ledger) {
    let summary = ledger.dashboard();
    println!("Dashboard Overview");
    println!("{}", "-".repeat(18));
    println!("{:<20} {}", "Total Income:", summary.total_income);
    println!("{:<20} {}", "Total Expense:", summary.total_expense);
    println!("{:<20} {}", "Inventory Value:", summary.inventory_value);
    println!("{:<20} {}", "Total Customers:", summary.customer_count);
    println!();
    println!("Recent Activity");
    println!("{:<12} {:<30} {:>15}", "Date", "Activity", "Amount");
    println!("{}", "-".repeat(59));
    for record in &summary.recent_activity {
        println!(
            "{:<12} {:<30} {:>15}",
            record.date.to_string(),
            record.description,
            record.amount.grouped()
        );
    }
    if summary.recent_activity.is_empty() {
        println!("(no transactions yet)");
    }
}

/// Parses the report kind label and prints the report. The range
/// defaults to the last month ending today, and only the financial
/// summary reads it.
pub fn report(
    ledger: &Ledger,
    kind: &str,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> CliResult<()> {
    let kind = ReportKind::parse(kind)?;
    let end = to.unwrap_or_else(today);
    let start = from.unwrap_or_else(|| {
        end.checked_sub_months(Months::new(1)).unwrap_or(end)
    });
    print!("{}", ledger.generate_report(kind, DateRange::new(start, end)));
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
