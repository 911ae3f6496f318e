//! Recoverable-condition reporting for document loads.
//!
//! Fatal problems abort a load through [`crate::error::LasError`]; the
//! conditions here complete the operation and are surfaced alongside the
//! usable result.

use serde::{Deserialize, Serialize};

/// Kind of recoverable condition detected during a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// Depth column was not strictly ascending; the table was sorted.
    NonSortedDepth,
    /// Depth column contains negative values.
    NegativeDepth,
    /// Well section has no NULL field; no sentinel substitution was done.
    MissingNullSentinel,
    /// VERS was missing or unrecognized; the 2.0 grammar was used.
    VersionFallback,
}

impl WarningKind {
    /// Get a human-readable label for the warning kind.
    pub fn label(&self) -> &'static str {
        match self {
            WarningKind::NonSortedDepth => "Non-Sorted Depth",
            WarningKind::NegativeDepth => "Negative Depth",
            WarningKind::MissingNullSentinel => "Missing Null Sentinel",
            WarningKind::VersionFallback => "Version Fallback",
        }
    }

    /// Default severity for this kind.
    pub fn severity(&self) -> Severity {
        match self {
            WarningKind::NonSortedDepth => Severity::Warning,
            WarningKind::NegativeDepth => Severity::Advisory,
            WarningKind::MissingNullSentinel => Severity::Advisory,
            WarningKind::VersionFallback => Severity::Warning,
        }
    }
}

/// Severity of a recoverable condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational; the data may be perfectly fine.
    Advisory,
    /// The loader changed or worked around something; review recommended.
    Warning,
}

impl Severity {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Advisory => "Advisory",
            Severity::Warning => "Warning",
        }
    }
}

/// A recoverable condition recorded during a document load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadWarning {
    /// What was detected.
    pub kind: WarningKind,
    /// How serious it is.
    pub severity: Severity,
    /// Details (offending values, counts, fallbacks taken).
    pub message: String,
}

impl LoadWarning {
    /// Create a warning with the kind's default severity.
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            message: message.into(),
        }
    }
}
