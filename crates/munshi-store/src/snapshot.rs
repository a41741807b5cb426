//! # Snapshot Persistence
//!
//! The whole book as one versioned JSON document.
//!
//! ## Persistence model
//! ```text
//! startup            mutation                exit
//! ───────            ────────                ────
//! load() ──► Ledger  Ledger ──► save()       nothing to do
//! (missing file      (whole snapshot
//!  = empty book)      rewritten)
//! ```
//! Collections are stored in insertion order, so a load/save round trip
//! preserves both the canonical display sort and the tie-breaking that
//! depends on insertion order.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use munshi_core::{Customer, FinancialRecord, InventoryItem, Ledger};

use crate::error::{StoreError, StoreResult};

/// Snapshot document version written by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

// =============================================================================
// Snapshot Document
// =============================================================================

/// The on-disk shape: the three collections in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Document version, for forward-compatibility checks on load.
    pub version: u32,
    pub financial: Vec<FinancialRecord>,
    pub inventory: Vec<InventoryItem>,
    pub customers: Vec<Customer>,
}

impl Snapshot {
    /// Captures the current ledger contents.
    pub fn from_ledger(ledger: &Ledger) -> Self {
        Snapshot {
            version: SNAPSHOT_VERSION,
            financial: ledger.financial().entries().to_vec(),
            inventory: ledger.inventory().entries().to_vec(),
            customers: ledger.customers().entries().to_vec(),
        }
    }

    /// Rebuilds a ledger, rejecting documents from a newer build.
    pub fn into_ledger(self) -> StoreResult<Ledger> {
        if self.version > SNAPSHOT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(Ledger::from_parts(
            self.financial,
            self.inventory,
            self.customers,
        ))
    }
}

// =============================================================================
// Ledger File
// =============================================================================

/// A ledger snapshot at a fixed path.
#[derive(Debug, Clone)]
pub struct LedgerFile {
    path: PathBuf,
}

impl LedgerFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LedgerFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the snapshot. A missing file is an empty book, not an
    /// error; anything else unreadable is reported to the caller.
    pub fn load(&self) -> StoreResult<Ledger> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no snapshot found, starting empty");
                return Ok(Ledger::new());
            }
            Err(err) => return Err(err.into()),
        };

        let snapshot: Snapshot = serde_json::from_str(&raw)?;
        debug!(
            path = %self.path.display(),
            financial = snapshot.financial.len(),
            inventory = snapshot.inventory.len(),
            customers = snapshot.customers.len(),
            "snapshot loaded"
        );
        snapshot.into_ledger()
    }

    /// Writes the whole book, replacing any previous snapshot.
    pub fn save(&self, ledger: &Ledger) -> StoreResult<()> {
        let snapshot = Snapshot::from_ledger(ledger);
        let raw = serde_json::to_string_pretty(&snapshot)?;
        fs::write(&self.path, raw)?;
        debug!(path = %self.path.display(), "snapshot saved");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
