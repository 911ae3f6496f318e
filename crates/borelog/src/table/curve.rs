//! A single curve: one column's values bound to its depth axis.

use std::borrow::Cow;

use serde::Serialize;

use super::column::Column;
use super::table::Table;

/// One numeric column paired with the depth axis it is measured against.
///
/// The depth slice is borrowed from the parent [`Table`] at extraction,
/// so a curve cannot outlive its table; resampling rebinds it to an owned
/// grid (see [`Curve::resample`](crate::resample)). Values are copied out
/// at extraction, leaving the table untouched.
#[derive(Debug, Clone, Serialize)]
pub struct Curve<'a> {
    /// Curve mnemonic.
    pub name: String,
    /// Unit of measure.
    pub unit: String,
    /// Free-text description.
    pub description: String,
    values: Vec<f64>,
    depths: Cow<'a, [f64]>,
}

/// Depth-thickness split of a curve's extent, weighting each sample by
/// the half-intervals to its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurveCoverage {
    /// Total thickness spanned by the depth axis.
    pub total: f64,
    /// Thickness attributed to missing samples.
    pub missing: f64,
    /// Thickness attributed to valid samples.
    pub valid: f64,
}

impl<'a> Curve<'a> {
    pub(crate) fn new(column: &Column, depths: Cow<'a, [f64]>) -> Option<Self> {
        let values = column.values.as_f64()?;
        Some(Self {
            name: column.name.clone(),
            unit: column.unit.clone(),
            description: column.description.clone(),
            values,
            depths,
        })
    }

    /// The curve values, aligned with [`Curve::depths`].
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The depth axis the values are measured against.
    pub fn depths(&self) -> &[f64] {
        &self.depths
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the curve has no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn set_values(&mut self, values: Vec<f64>) {
        self.values = values;
    }

    pub(crate) fn rebind_depths(&mut self, depths: Vec<f64>) {
        self.depths = Cow::Owned(depths);
    }

    /// Split the curve's depth extent into valid and missing thickness.
    ///
    /// Each sample owns the half-intervals to its neighbours; the first
    /// and last samples own half the interval to their single neighbour.
    pub fn coverage(&self) -> CurveCoverage {
        let n = self.depths.len();
        if n < 2 {
            return CurveCoverage {
                total: 0.0,
                missing: 0.0,
                valid: 0.0,
            };
        }

        let total = self.depths[n - 1] - self.depths[0];
        let mut missing = 0.0;
        for (i, value) in self.values.iter().enumerate() {
            if !value.is_nan() {
                continue;
            }
            let thickness = if i == 0 {
                (self.depths[1] - self.depths[0]) / 2.0
            } else if i == n - 1 {
                (self.depths[n - 1] - self.depths[n - 2]) / 2.0
            } else {
                (self.depths[i + 1] - self.depths[i - 1]) / 2.0
            };
            missing += thickness;
        }

        CurveCoverage {
            total,
            missing,
            valid: total - missing,
        }
    }
}

impl Table {
    /// Extract a curve by mnemonic. Returns `None` for an unknown name or
    /// a non-numeric column.
    pub fn curve(&self, name: &str) -> Option<Curve<'_>> {
        let column = self.column(name)?;
        let depths = match &self.depth_column().values {
            super::column::ColumnValues::Float(v) => Cow::Borrowed(v.as_slice()),
            other => Cow::Owned(other.as_f64()?),
        };
        Curve::new(column, depths)
    }
}
