//! Cross-cutting error types for sdfo.
//!
//! The extraction, merge and graph-building stages are infallible; malformed
//! input degrades into partial output instead. Errors here cover the edges
//! where callers hand data in or look things up. Collaborator errors
//! (`FetchError`, `ConfigError`) live in their own crates and converge in
//! `sdf-cli`.

use thiserror::Error;

/// Errors that can be raised by any sdfo crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Lookup by element name returned no result.
    #[error("Element not found: {0}")]
    NotFound(String),

    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
