//! # Munshi Command-Line Application
//!
//! Entry point for the `munshi` binary.
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Initialize tracing (logging)
//! 3. Check credentials (static admin login, behind a trait)
//! 4. Load the snapshot into a Ledger
//! 5. Dispatch the subcommand
//! 6. On a successful mutation: save the snapshot, reprint the totals
//!
//! ## Usage
//! ```bash
//! export MUNSHI_USERNAME=admin MUNSHI_PASSWORD=password
//!
//! munshi tx add --description "Girder sale" --amount 45000 --kind income
//! munshi tx list
//! munshi tx remove 1
//! munshi stock add --name "Rod 12mm" --quantity 40 --unit-price 250 \
//!     --supplier "Ittehad Steel"
//! munshi customer add --name "Asad" --contact 0300-1234567 --address Lahore
//! munshi dashboard
//! munshi report "Financial Summary" --from 2024-01-01 --to 2024-01-31
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use munshi_core::{Ledger, Money, RecordKind, MAX_ITEM_QUANTITY};
use munshi_store::LedgerFile;

use crate::auth::{Authenticator, StaticAuthenticator};
use crate::error::{CliError, CliResult};

mod auth;
mod commands;
mod error;

// =============================================================================
// Argument Tree
// =============================================================================

#[derive(Parser, Debug)]
#[command(name = "munshi")]
#[command(about = "Business records manager: transactions, stock, and customers")]
struct Cli {
    /// Snapshot file holding the book (also read from `MUNSHI_DATA`).
    #[arg(long, env = "MUNSHI_DATA", default_value = "munshi.json", global = true)]
    data: PathBuf,

    /// Login username (also read from `MUNSHI_USERNAME`).
    #[arg(long, env = "MUNSHI_USERNAME", global = true)]
    username: Option<String>,

    /// Login password (also read from `MUNSHI_PASSWORD`).
    #[arg(long, env = "MUNSHI_PASSWORD", hide_env_values = true, global = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Financial transactions
    Tx(Tx),
    /// Inventory stock
    Stock(Stock),
    /// Customer records
    Customer(Customer),
    /// Show the dashboard summary
    Dashboard,
    /// Generate a report
    Report(ReportArgs),
}

/// Income or expense, as entered on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for RecordKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Income => RecordKind::Income,
            KindArg::Expense => RecordKind::Expense,
        }
    }
}

#[derive(Args, Debug)]
struct Tx {
    #[command(subcommand)]
    command: TxCommand,
}

#[derive(Subcommand, Debug)]
enum TxCommand {
    /// Record a transaction
    Add {
        /// Transaction date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// What the money was for
        #[arg(long)]
        description: String,
        /// Amount in rupees, e.g. 45000 or 45000.50
        #[arg(long)]
        amount: Money,
        /// Income or expense
        #[arg(long, value_enum)]
        kind: KindArg,
    },
    /// List transactions, most recent first
    List,
    /// Delete the transaction at a listed row
    Remove {
        /// 1-based row number from `tx list`
        row: usize,
    },
    /// Replace the transaction at a listed row
    Edit {
        /// 1-based row number from `tx list`
        row: usize,
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        description: String,
        #[arg(long)]
        amount: Money,
        #[arg(long, value_enum)]
        kind: KindArg,
    },
}

#[derive(Args, Debug)]
struct Stock {
    #[command(subcommand)]
    command: StockCommand,
}

#[derive(Subcommand, Debug)]
enum StockCommand {
    /// Record a stock line
    Add {
        /// Product name
        #[arg(long)]
        name: String,
        /// Units on hand
        #[arg(long, value_parser = clap::value_parser!(i64).range(0..=MAX_ITEM_QUANTITY))]
        quantity: i64,
        /// Price per unit in rupees
        #[arg(long)]
        unit_price: Money,
        /// Supplier name (optional)
        #[arg(long, default_value = "")]
        supplier: String,
        /// Last-updated date (defaults to today)
        #[arg(long)]
        last_updated: Option<NaiveDate>,
    },
    /// List stock by product name
    List,
    /// Delete the stock line at a listed row
    Remove {
        /// 1-based row number from `stock list`
        row: usize,
    },
    /// Replace the stock line at a listed row
    Edit {
        /// 1-based row number from `stock list`
        row: usize,
        #[arg(long)]
        name: String,
        #[arg(long, value_parser = clap::value_parser!(i64).range(0..=MAX_ITEM_QUANTITY))]
        quantity: i64,
        #[arg(long)]
        unit_price: Money,
        #[arg(long, default_value = "")]
        supplier: String,
        #[arg(long)]
        last_updated: NaiveDate,
    },
}

#[derive(Args, Debug)]
struct Customer {
    #[command(subcommand)]
    command: CustomerCommand,
}

#[derive(Subcommand, Debug)]
enum CustomerCommand {
    /// Record a customer
    Add {
        /// Customer name
        #[arg(long)]
        name: String,
        /// Contact number
        #[arg(long)]
        contact: String,
        /// Postal address
        #[arg(long)]
        address: String,
        /// Email address (optional)
        #[arg(long, default_value = "")]
        email: String,
    },
    /// List customers by name
    List,
    /// Delete the customer at a listed row
    Remove {
        /// 1-based row number from `customer list`
        row: usize,
    },
    /// Replace the customer at a listed row
    Edit {
        /// 1-based row number from `customer list`
        row: usize,
        #[arg(long)]
        name: String,
        #[arg(long)]
        contact: String,
        #[arg(long)]
        address: String,
        #[arg(long, default_value = "")]
        email: String,
    },
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Report kind: "Financial Summary", "Inventory Summary", or
    /// "Customer List"
    kind: String,

    /// Range start, financial summary only (defaults to a month ago)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Range end, financial summary only (defaults to today)
    #[arg(long)]
    to: Option<NaiveDate>,
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("munshi_cli=info,munshi_store=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let authenticator = StaticAuthenticator::default();
    if !authenticator.authenticate(
        cli.username.as_deref().unwrap_or(""),
        cli.password.as_deref().unwrap_or(""),
    ) {
        return Err(CliError::AuthFailed);
    }

    let file = LedgerFile::new(&cli.data);
    let mut ledger = file.load()?;

    let mutated = dispatch(&mut ledger, cli.command)?;
    if mutated {
        file.save(&ledger)?;
        commands::print_totals(&ledger);
    }
    Ok(())
}

/// Runs one subcommand. Returns whether the book changed, so the
/// caller knows to persist and reprint the totals.
fn dispatch(ledger: &mut Ledger, command: Command) -> CliResult<bool> {
    match command {
        Command::Tx(tx) => match tx.command {
            TxCommand::Add {
                date,
                description,
                amount,
                kind,
            } => {
                let date = date.unwrap_or_else(commands::today);
                commands::tx_add(ledger, date, &description, amount, kind.into())?;
                Ok(true)
            }
            TxCommand::List => {
                commands::tx_list(ledger);
                Ok(false)
            }
            TxCommand::Remove { row } => {
                commands::tx_remove(ledger, row)?;
                Ok(true)
            }
            TxCommand::Edit {
                row,
                date,
                description,
                amount,
                kind,
            } => {
                commands::tx_edit(ledger, row, date, &description, amount, kind.into())?;
                Ok(true)
            }
        },
        Command::Stock(stock) => match stock.command {
            StockCommand::Add {
                name,
                quantity,
                unit_price,
                supplier,
                last_updated,
            } => {
                let last_updated = last_updated.unwrap_or_else(commands::today);
                commands::stock_add(ledger, &name, quantity, unit_price, &supplier, last_updated)?;
                Ok(true)
            }
            StockCommand::List => {
                commands::stock_list(ledger);
                Ok(false)
            }
            StockCommand::Remove { row } => {
                commands::stock_remove(ledger, row)?;
                Ok(true)
            }
            StockCommand::Edit {
                row,
                name,
                quantity,
                unit_price,
                supplier,
                last_updated,
            } => {
                commands::stock_edit(
                    ledger,
                    row,
                    &name,
                    quantity,
                    unit_price,
                    &supplier,
                    last_updated,
                )?;
                Ok(true)
            }
        },
        Command::Customer(customer) => match customer.command {
            CustomerCommand::Add {
                name,
                contact,
                address,
                email,
            } => {
                commands::customer_add(ledger, &name, &contact, &address, &email)?;
                Ok(true)
            }
            CustomerCommand::List => {
                commands::customer_list(ledger);
                Ok(false)
            }
            CustomerCommand::Remove { row } => {
                commands::customer_remove(ledger, row)?;
                Ok(true)
            }
            CustomerCommand::Edit {
                row,
                name,
                contact,
                address,
                email,
            } => {
                commands::customer_edit(ledger, row, &name, &contact, &address, &email)?;
                Ok(true)
            }
        },
        Command::Dashboard => {
            commands::dashboard(ledger);
            Ok(false)
        }
        Command::Report(args) => {
            commands::report(ledger, &args.kind, args.from, args.to)?;
            Ok(false)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_kind_arg_maps_to_record_kind() {
        assert_eq!(RecordKind::from(KindArg::Income), RecordKind::Income);
        assert_eq!(RecordKind::from(KindArg::Expense), RecordKind::Expense);
    }

    #[test]
    fn test_mutating_commands_report_mutation() {
        let mut ledger = Ledger::new();
        let mutated = dispatch(
            &mut ledger,
            Command::Tx(Tx {
                command: TxCommand::Add {
                    date: None,
                    description: "Sale".to_string(),
                    amount: Money::from_rupees(100),
                    kind: KindArg::Income,
                },
            }),
        )
        .unwrap();
        assert!(mutated);
        assert_eq!(ledger.financial().count(), 1);

        let mutated = dispatch(&mut ledger, Command::Tx(Tx { command: TxCommand::List })).unwrap();
        assert!(!mutated);
    }
}
