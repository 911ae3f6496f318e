//! Column type definitions.

use serde::{Deserialize, Serialize};

/// Data type of a table column.
///
/// Fixed per column when the first data row is classified; later rows are
/// coerced into it (see [`crate::table::ColumnValues::cast`] for the
/// coercion rules between variants).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Whole numbers (optional sign, all digits).
    Integer,
    /// Floating-point numbers (decimal, optional exponent).
    Float,
    /// Text values.
    Text,
    /// Date and/or time values.
    DateTime,
}

impl ColumnType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }
}
