//! # Store Error Types
//!
//! Error types for snapshot persistence.
//!
//! ## Error Flow
//! ```text
//! io::Error / serde_json::Error
//!       │
//!       ▼
//! StoreError (this module) - adds the persistence-level meaning
//!       │
//!       ▼
//! CLI prints the message; the in-memory book is left untouched
//! ```

use thiserror::Error;

/// Snapshot persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the snapshot file failed.
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot file exists but is not a valid snapshot document.
    #[error("snapshot is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The snapshot was written by a newer version of the program.
    #[error("snapshot version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

/// Convenience alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
