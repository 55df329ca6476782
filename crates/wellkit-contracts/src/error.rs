//! Error types shared across the Wellkit crates.
//!
//! The advisor itself cannot fail at selection time — every query produces a
//! reply. Errors only arise at the edges: loading a rule table, validating
//! user-entered list entries, and session operations.

use thiserror::Error;

/// The unified error type for the Wellkit application.
#[derive(Debug, Error)]
pub enum WellkitError {
    /// A rule-table document could not be loaded or failed validation.
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// A user-supplied field was rejected before mutating a list.
    #[error("invalid {field}: {reason}")]
    InvalidEntry { field: String, reason: String },

    /// A list operation referenced an identifier that is not in the list.
    #[error("no entry with id '{id}'")]
    UnknownEntry { id: String },

    /// A session operation was attempted in the wrong state.
    #[error("session error: {reason}")]
    Session { reason: String },
}

/// Convenience alias used throughout the Wellkit crates.
pub type WellkitResult<T> = Result<T, WellkitError>;
