//! # CLI Error Type
//!
//! One error surface for the binary: everything the core or the store
//! reports, plus the input-boundary rejections the CLI itself makes.
//! All of it is printed to stderr and turned into a nonzero exit code;
//! nothing panics.

use thiserror::Error;

use munshi_core::CoreError;
use munshi_store::StoreError;

/// Errors surfaced to the user by the munshi binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// The static credential check failed.
    #[error("Invalid username or password.")]
    AuthFailed,

    /// Input rejected at the boundary, before reaching validation.
    #[error("{0}")]
    Input(String),

    /// A domain error reported by the core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A persistence error reported by the snapshot store.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;
