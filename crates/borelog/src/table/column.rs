//! Column storage: metadata plus tagged value vectors.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::types::ColumnType;
use crate::inference::parse_datetime;

/// Tagged storage for one column's values.
///
/// Missing markers per variant: `None` for Integer and DateTime, `NaN`
/// for Float, the empty string for Text.
///
/// Coercion table implemented by [`ColumnValues::cast`]:
///
/// | from \ to  | Integer        | Float    | Text     | DateTime |
/// |------------|----------------|----------|----------|----------|
/// | Integer    | id             | exact    | formats  | missing  |
/// | Float      | truncates      | id       | formats  | missing  |
/// | Text       | parses         | parses   | id       | parses   |
/// | DateTime   | missing        | missing  | formats  | id       |
///
/// Parses that fail, and coercions with no defined conversion, produce the
/// target's missing marker. Missing stays missing across every cast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnValues {
    Integer(Vec<Option<i64>>),
    Float(Vec<f64>),
    Text(Vec<String>),
    DateTime(Vec<Option<NaiveDateTime>>),
}

impl ColumnValues {
    /// Empty storage of the given type.
    pub fn empty(dtype: ColumnType) -> Self {
        match dtype {
            ColumnType::Integer => ColumnValues::Integer(Vec::new()),
            ColumnType::Float => ColumnValues::Float(Vec::new()),
            ColumnType::Text => ColumnValues::Text(Vec::new()),
            ColumnType::DateTime => ColumnValues::DateTime(Vec::new()),
        }
    }

    /// The tag of this storage.
    pub fn column_type(&self) -> ColumnType {
        match self {
            ColumnValues::Integer(_) => ColumnType::Integer,
            ColumnValues::Float(_) => ColumnType::Float,
            ColumnValues::Text(_) => ColumnType::Text,
            ColumnValues::DateTime(_) => ColumnType::DateTime,
        }
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Integer(v) => v.len(),
            ColumnValues::Float(v) => v.len(),
            ColumnValues::Text(v) => v.len(),
            ColumnValues::DateTime(v) => v.len(),
        }
    }

    /// Whether the storage holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the value at `index` is the missing marker.
    pub fn is_missing(&self, index: usize) -> bool {
        match self {
            ColumnValues::Integer(v) => v[index].is_none(),
            ColumnValues::Float(v) => v[index].is_nan(),
            ColumnValues::Text(v) => v[index].is_empty(),
            ColumnValues::DateTime(v) => v[index].is_none(),
        }
    }

    /// Count of missing values.
    pub fn missing_count(&self) -> usize {
        (0..self.len()).filter(|&i| self.is_missing(i)).count()
    }

    /// Append a raw token, coercing it into this storage's type. A token
    /// that cannot be coerced becomes the missing marker; an integer
    /// column additionally accepts float-shaped tokens by truncation.
    pub fn push_token(&mut self, token: &str) {
        match self {
            ColumnValues::Integer(v) => {
                let parsed = token
                    .parse::<i64>()
                    .ok()
                    .or_else(|| token.parse::<f64>().ok().map(|f| f.trunc() as i64));
                v.push(parsed);
            }
            ColumnValues::Float(v) => {
                v.push(token.parse::<f64>().unwrap_or(f64::NAN));
            }
            ColumnValues::Text(v) => {
                v.push(token.to_string());
            }
            ColumnValues::DateTime(v) => {
                v.push(parse_datetime(token));
            }
        }
    }

    /// View numeric storage as `f64` values, missing becoming `NaN`.
    /// Returns `None` for Text and DateTime storage.
    pub fn as_f64(&self) -> Option<Vec<f64>> {
        match self {
            ColumnValues::Integer(v) => Some(
                v.iter()
                    .map(|x| x.map(|i| i as f64).unwrap_or(f64::NAN))
                    .collect(),
            ),
            ColumnValues::Float(v) => Some(v.clone()),
            ColumnValues::Text(_) | ColumnValues::DateTime(_) => None,
        }
    }

    /// Convert to another storage type per the coercion table above.
    pub fn cast(self, to: ColumnType) -> ColumnValues {
        if self.column_type() == to {
            return self;
        }
        match (self, to) {
            (ColumnValues::Integer(v), ColumnType::Float) => {
                ColumnValues::Float(v.into_iter().map(int_to_f64).collect())
            }
            (ColumnValues::Integer(v), ColumnType::Text) => ColumnValues::Text(
                v.into_iter()
                    .map(|x| x.map(|i| i.to_string()).unwrap_or_default())
                    .collect(),
            ),
            (ColumnValues::Float(v), ColumnType::Integer) => ColumnValues::Integer(
                v.into_iter()
                    .map(|f| if f.is_nan() { None } else { Some(f.trunc() as i64) })
                    .collect(),
            ),
            (ColumnValues::Float(v), ColumnType::Text) => ColumnValues::Text(
                v.into_iter()
                    .map(|f| if f.is_nan() { String::new() } else { f.to_string() })
                    .collect(),
            ),
            (ColumnValues::Text(v), ColumnType::Integer) => ColumnValues::Integer(
                v.into_iter().map(|s| s.trim().parse::<i64>().ok()).collect(),
            ),
            (ColumnValues::Text(v), ColumnType::Float) => ColumnValues::Float(
                v.into_iter()
                    .map(|s| s.trim().parse::<f64>().unwrap_or(f64::NAN))
                    .collect(),
            ),
            (ColumnValues::Text(v), ColumnType::DateTime) => {
                ColumnValues::DateTime(v.into_iter().map(|s| parse_datetime(&s)).collect())
            }
            (ColumnValues::DateTime(v), ColumnType::Text) => ColumnValues::Text(
                v.into_iter()
                    .map(|x| {
                        x.map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
                            .unwrap_or_default()
                    })
                    .collect(),
            ),
            // Remaining pairs have no defined conversion.
            (values, target) => {
                let n = values.len();
                match target {
                    ColumnType::Integer => ColumnValues::Integer(vec![None; n]),
                    ColumnType::Float => ColumnValues::Float(vec![f64::NAN; n]),
                    ColumnType::Text => ColumnValues::Text(vec![String::new(); n]),
                    ColumnType::DateTime => ColumnValues::DateTime(vec![None; n]),
                }
            }
        }
    }

    /// Reorder values by `permutation` (output position `i` takes the
    /// value at input position `permutation[i]`).
    pub fn permute(&mut self, permutation: &[usize]) {
        match self {
            ColumnValues::Integer(v) => {
                let reordered: Vec<_> = permutation.iter().map(|&i| v[i]).collect();
                *v = reordered;
            }
            ColumnValues::Float(v) => {
                let reordered: Vec<_> = permutation.iter().map(|&i| v[i]).collect();
                *v = reordered;
            }
            ColumnValues::Text(v) => {
                let reordered: Vec<_> = permutation.iter().map(|&i| v[i].clone()).collect();
                *v = reordered;
            }
            ColumnValues::DateTime(v) => {
                let reordered: Vec<_> = permutation.iter().map(|&i| v[i]).collect();
                *v = reordered;
            }
        }
    }

    /// Keep only the rows flagged true in `keep`.
    pub fn retain_rows(&mut self, keep: &[bool]) {
        match self {
            ColumnValues::Integer(v) => {
                let mut it = keep.iter();
                v.retain(|_| *it.next().unwrap_or(&false));
            }
            ColumnValues::Float(v) => {
                let mut it = keep.iter();
                v.retain(|_| *it.next().unwrap_or(&false));
            }
            ColumnValues::Text(v) => {
                let mut it = keep.iter();
                v.retain(|_| *it.next().unwrap_or(&false));
            }
            ColumnValues::DateTime(v) => {
                let mut it = keep.iter();
                v.retain(|_| *it.next().unwrap_or(&false));
            }
        }
    }
}

fn int_to_f64(x: Option<i64>) -> f64 {
    x.map(|i| i as f64).unwrap_or(f64::NAN)
}

/// A named, typed data column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name (the curve mnemonic).
    pub name: String,
    /// Unit of measure, possibly empty.
    pub unit: String,
    /// Free-text description.
    pub description: String,
    /// The values.
    pub values: ColumnValues,
}

impl Column {
    /// Create a column from its parts.
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        description: impl Into<String>,
        values: ColumnValues,
    ) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            description: description.into(),
            values,
        }
    }

    /// The column's data type.
    pub fn dtype(&self) -> ColumnType {
        self.values.column_type()
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the column holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
