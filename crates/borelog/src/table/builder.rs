//! Table assembly from raw data rows.
//!
//! The builder owns everything between the raw `~A` body lines and a
//! validated [`Table`]: per-row tokenizing against the fixed dtypes, null
//! sentinel substitution, curve-descriptor metadata merge, and the depth
//! validations.

use log::{debug, warn};

use super::column::{Column, ColumnValues};
use super::table::Table;
use super::types::ColumnType;
use crate::error::{LasError, Result};
use crate::header::HeaderSection;
use crate::warning::{LoadWarning, WarningKind};

/// Assembles a [`Table`] from tokenized data rows.
#[derive(Debug)]
pub struct TableBuilder<'a> {
    dtypes: Vec<ColumnType>,
    descriptors: &'a HeaderSection,
    null_sentinel: Option<f64>,
}

/// A built table plus the recoverable conditions hit along the way.
#[derive(Debug)]
pub struct BuiltTable {
    pub table: Table,
    pub warnings: Vec<LoadWarning>,
}

impl<'a> TableBuilder<'a> {
    /// Create a builder for the given column dtypes. `descriptors` is the
    /// curve section whose fields supply name/unit/description by
    /// position; `null_sentinel` is the well-section NULL value, if any.
    pub fn new(
        dtypes: Vec<ColumnType>,
        descriptors: &'a HeaderSection,
        null_sentinel: Option<f64>,
    ) -> Self {
        Self {
            dtypes,
            descriptors,
            null_sentinel,
        }
    }

    /// Consume raw data body lines and build the validated table.
    pub fn build<'l, I>(self, lines: I) -> Result<BuiltTable>
    where
        I: IntoIterator<Item = &'l str>,
    {
        if self.descriptors.len() != self.dtypes.len() {
            return Err(LasError::ColumnMismatch {
                expected: self.descriptors.len(),
                found: self.dtypes.len(),
            });
        }

        let mut columns: Vec<Column> = self
            .descriptors
            .iter()
            .zip(&self.dtypes)
            .map(|(field, &dtype)| {
                Column::new(
                    field.mnemonic.clone(),
                    field.unit.clone(),
                    field.description.clone(),
                    ColumnValues::empty(dtype),
                )
            })
            .collect();

        let expected = columns.len();
        let mut rows = 0usize;
        for line in lines {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != expected {
                return Err(LasError::DataRow {
                    line: line.to_string(),
                    message: format!("expected {} values, found {}", expected, tokens.len()),
                });
            }
            for (column, token) in columns.iter_mut().zip(tokens.iter().copied()) {
                column.values.push_token(token);
            }
            rows += 1;
        }
        if rows == 0 {
            return Err(LasError::EmptyData("no data rows".to_string()));
        }
        debug!("assembled {} rows over {} columns", rows, expected);

        if let Some(sentinel) = self.null_sentinel {
            substitute_sentinel(&mut columns, sentinel);
        }

        let mut warnings = Vec::new();
        let mut table = Table::from_columns(columns)?;

        if !table.is_depth_positive() {
            warnings.push(LoadWarning::new(
                WarningKind::NegativeDepth,
                "depth column contains negative values",
            ));
        }
        if !table.is_depth_sorted() {
            warn!("depth column not strictly ascending; sorting table");
            table.sort_by_depth();
            warnings.push(LoadWarning::new(
                WarningKind::NonSortedDepth,
                "depth column was not strictly ascending; table sorted ascending",
            ));
        }

        Ok(BuiltTable { table, warnings })
    }
}

/// Replace float values bit-identical to the sentinel with NaN. Other
/// dtypes are never substituted.
fn substitute_sentinel(columns: &mut [Column], sentinel: f64) {
    let bits = sentinel.to_bits();
    for column in columns {
        if let ColumnValues::Float(values) = &mut column.values {
            for value in values.iter_mut() {
                if value.to_bits() == bits {
                    *value = f64::NAN;
                }
            }
        }
    }
}
