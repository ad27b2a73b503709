//! Unified error type for the ctutil workspace.
//!
//! Allocation failures are fatal for the caller and should be propagated
//! unchanged. Numeric errors are recoverable and keep "not a number"
//! apart from "value too large".

use std::collections::TryReserveError;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum CtutilError {
    /// Memory for an output buffer could not be reserved.
    #[error("allocation failed: {source}")]
    Allocation {
        /// Underlying reservation error.
        #[from]
        source: TryReserveError,
    },

    /// The text does not match the strict numeral grammar.
    #[error("malformed numeric input: {input:?}")]
    MalformedInput {
        /// Offending input text.
        input: String,
    },

    /// The numeral is well formed but does not fit the target type.
    #[error("numeric input {input:?} is out of range for {target}")]
    OutOfRange {
        /// Offending input text.
        input: String,
        /// Name of the integer type that was requested.
        target: &'static str,
    },

    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl CtutilError {
    /// Returns `true` for [`CtutilError::MalformedInput`].
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }

    /// Returns `true` for [`CtutilError::OutOfRange`].
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, CtutilError>;
