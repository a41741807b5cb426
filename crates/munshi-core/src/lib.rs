//! # munshi-core: Pure Business Logic for Munshi
//!
//! Munshi tracks the books of a small trading business: financial
//! transactions, inventory stock, and customer contacts, with a
//! dashboard summary and fixed-layout text reports. This crate is the
//! in-memory domain engine - everything with an invariant lives here,
//! and nothing here performs I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Presentation (apps/cli)                 │
//! │     collects input ──► calls core ──► shows errors       │
//! └────────────────────────────┬─────────────────────────────┘
//!                              │
//! ┌────────────────────────────▼─────────────────────────────┐
//! │               ★ munshi-core (THIS CRATE) ★               │
//! │                                                          │
//! │   validation ──► stores ──► aggregate / report           │
//! │            (all routed through the Ledger)               │
//! │                                                          │
//! │   NO I/O • NO LOGGING • PURE FUNCTIONS                   │
//! └────────────────────────────┬─────────────────────────────┘
//!                              │
//! ┌────────────────────────────▼─────────────────────────────┐
//! │              munshi-store (JSON snapshot)                │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entity types (FinancialRecord, InventoryItem, Customer)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Typed domain errors
//! - [`validation`] - Validating entity constructors
//! - [`store`] - Insertion-ordered stores with display-sorted views
//! - [`aggregate`] - Dashboard metrics, recomputed on demand
//! - [`report`] - Fixed-layout text reports
//! - [`ledger`] - The coordinator owning the three stores
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output - nothing suspends,
//!    nothing caches
//! 2. **Integer Money**: all amounts are paisa (i64), never floats
//! 3. **Explicit Errors**: typed enums, never strings or panics
//! 4. **Stable Identity**: deletion and edit take UUID ids, never the
//!    positional index of a sorted view

// =============================================================================
// Module Declarations
// =============================================================================

pub mod aggregate;
pub mod error;
pub mod ledger;
pub mod money;
pub mod report;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use aggregate::{DashboardSummary, RECENT_ACTIVITY_ROWS};
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::Ledger;
pub use money::Money;
pub use report::{DateRange, ReportKind};
pub use store::{MemoryStore, Record};
pub use types::{Customer, FinancialRecord, InventoryItem, RecordKind};

// =============================================================================
// Input Boundary Limits
// =============================================================================
// The original entry forms constrained numeric inputs with spinbox
// ranges; the presentation layer enforces the same ceilings before
// values reach validation.

/// Largest accepted transaction amount or unit price, in rupees.
pub const MAX_AMOUNT_RUPEES: i64 = 1_000_000_000;

/// Largest accepted stock quantity.
pub const MAX_ITEM_QUANTITY: i64 = 1_000_000;
