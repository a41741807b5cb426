//! # munshi-store: Persistence Layer for Munshi
//!
//! Loads and saves the whole book as a versioned JSON snapshot. The
//! core stays persistence-agnostic: this crate talks to it only through
//! `Ledger::from_parts` and the stores' insertion-ordered `entries()`,
//! so swapping in a database-backed adapter would not touch validation,
//! aggregation, or report logic.
//!
//! ## Usage
//! ```rust,no_run
//! use munshi_store::LedgerFile;
//!
//! let file = LedgerFile::new("munshi.json");
//! let ledger = file.load()?;
//! // ... mutate through the ledger ...
//! file.save(&ledger)?;
//! # Ok::<(), munshi_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod snapshot;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use snapshot::{LedgerFile, Snapshot, SNAPSHOT_VERSION};
