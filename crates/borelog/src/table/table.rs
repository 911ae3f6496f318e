//! The data table: ordered columns aligned on a depth axis.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::column::Column;
use crate::error::{LasError, Result};

/// An ordered collection of equal-length columns. Column 0 is the depth
/// axis.
///
/// Construction enforces the depth invariants (numeric, no missing
/// entries); strict ascent is established by the builder's sort and not
/// re-checked afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Create a table from columns, validating shared length and the
    /// depth-column invariants.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let Some(depth) = columns.first() else {
            return Err(LasError::EmptyData("table has no columns".to_string()));
        };

        let n = depth.len();
        if let Some(bad) = columns.iter().find(|c| c.len() != n) {
            return Err(LasError::DataRow {
                line: bad.name.clone(),
                message: format!("column length {} != table length {}", bad.len(), n),
            });
        }

        if !depth.dtype().is_numeric() {
            return Err(LasError::InvalidDepth(format!(
                "depth column '{}' is not numeric",
                depth.name
            )));
        }
        if depth.values.missing_count() > 0 {
            return Err(LasError::InvalidDepth(format!(
                "depth column '{}' has missing entries",
                depth.name
            )));
        }

        Ok(Self { columns })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.columns.first().map(|c| c.len()).unwrap_or(0)
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// All columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Mutable access for in-place transforms.
    pub(crate) fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// The depth column.
    pub fn depth_column(&self) -> &Column {
        &self.columns[0]
    }

    /// Depth values as `f64`. The construction invariant guarantees the
    /// depth column is numeric with no missing entries.
    pub fn depths(&self) -> Vec<f64> {
        self.columns[0].values.as_f64().unwrap_or_default()
    }

    /// Whether the depth axis has no missing entries.
    pub fn is_depth_valid(&self) -> bool {
        self.columns[0].values.missing_count() == 0
    }

    /// Whether every depth is non-negative.
    pub fn is_depth_positive(&self) -> bool {
        self.depths().iter().all(|&d| d >= 0.0)
    }

    /// Whether depths are strictly ascending.
    pub fn is_depth_sorted(&self) -> bool {
        self.depths().windows(2).all(|w| w[0] < w[1])
    }

    /// Stable-sort every column ascending by depth. Returns the applied
    /// permutation (output row `i` came from input row `perm[i]`).
    pub fn sort_by_depth(&mut self) -> Vec<usize> {
        let depths = self.depths();
        let mut permutation: Vec<usize> = (0..depths.len()).collect();
        permutation.sort_by(|&a, &b| {
            depths[a]
                .partial_cmp(&depths[b])
                .unwrap_or(Ordering::Equal)
        });

        for column in &mut self.columns {
            column.values.permute(&permutation);
        }
        permutation
    }

    /// Keep only rows whose depth lies in `[start, stop]`; an open bound
    /// keeps that side unbounded.
    pub fn trim(&mut self, start: Option<f64>, stop: Option<f64>) {
        if start.is_none() && stop.is_none() {
            return;
        }
        let keep: Vec<bool> = self
            .depths()
            .iter()
            .map(|&d| start.map(|s| d >= s).unwrap_or(true) && stop.map(|s| d <= s).unwrap_or(true))
            .collect();

        for column in &mut self.columns {
            column.values.retain_rows(&keep);
        }
    }
}
