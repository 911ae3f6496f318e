//! Error types for the borelog library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for borelog operations.
///
/// Every variant is fatal to the operation that raised it: a failed load
/// never yields a partial document, and a failed resample leaves its
/// table untouched.
#[derive(Debug, Error)]
pub enum LasError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A requested section marker was not found before end of input.
    #[error("section '{marker}' not found")]
    SectionNotFound { marker: String },

    /// A header body line did not match the active grammar.
    #[error("header syntax error in section '{section}': {line:?}")]
    HeaderSyntax { section: String, line: String },

    /// The depth axis (source or target) contains a missing value, or is
    /// otherwise unusable as an interpolation axis.
    #[error("invalid depth axis: {0}")]
    InvalidDepth(String),

    /// Duplicate depth values in the interpolation source.
    #[error("duplicate source depth {0}")]
    DuplicateDepth(f64),

    /// A non-numeric column was passed to table resampling.
    #[error("column '{name}' is not numeric and cannot be resampled")]
    NonNumericColumn { name: String },

    /// Curve descriptor count does not match the data column count.
    #[error("curve section declares {expected} columns but data rows have {found}")]
    ColumnMismatch { expected: usize, found: usize },

    /// A data row could not be read against the declared columns.
    #[error("bad data row {line:?}: {message}")]
    DataRow { line: String, message: String },

    /// No data rows were found.
    #[error("empty data: {0}")]
    EmptyData(String),
}

/// Result type alias for borelog operations.
pub type Result<T> = std::result::Result<T, LasError>;
