//! # Error Types
//!
//! Domain-specific error types for munshi-core.
//!
//! ## Error Flow
//! ```text
//! ValidationError  - input rejection, raised by the validating constructors
//!       │
//!       ▼
//! CoreError        - domain-level failures (wraps ValidationError)
//!       │
//!       ▼
//! Presentation layer shows the message and lets the user retry
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants with context fields, never bare Strings
//! 3. Every error is recoverable by user correction - nothing here is fatal

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before an entity is constructed; on failure nothing enters a store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field is empty after trimming.
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// A transaction amount was zero or negative.
    #[error("amount must be greater than zero")]
    NonPositiveAmount,

    /// A non-empty email without both `@` and `.`.
    #[error("invalid email address: '{value}'")]
    InvalidEmail { value: String },
}

// =============================================================================
// Core Error
// =============================================================================

/// Domain-level errors returned by stores, the ledger, and report parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Input validation failed (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A display row index fell outside the current sorted view.
    #[error("row {index} is out of range: the current view has {rows} rows")]
    IndexOutOfRange { index: usize, rows: usize },

    /// No entry with the given identifier exists in the store.
    #[error("{entity} not found: {id}")]
    EntryNotFound { entity: &'static str, id: String },

    /// The requested report kind is not one of the supported three.
    #[error("unknown report kind: '{0}'")]
    UnknownReportKind(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
