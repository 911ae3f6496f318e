//! Re-expression of tables and curves on an arbitrary depth grid.
//!
//! One bracketing pass serves both call shapes: a [`ResamplePlan`] is
//! computed once from the source and target depth axes, then applied to
//! each value column. Bracketing walks the ascending source once with two
//! forward-only cursors, so a full plan costs O(targets + source).

use std::cmp::Ordering;

use crate::error::{LasError, Result};
use crate::table::{ColumnValues, Curve, Table};

/// How one inner target depth maps onto the source axis.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Bracket {
    /// Target coincides with a source depth; take its value directly.
    Exact(usize),
    /// Target lies strictly between two source depths.
    Interp { lower: usize, upper: usize, frac: f64 },
}

/// A reusable mapping from a source depth axis onto a target grid.
///
/// Targets outside the source range produce the missing marker; inner
/// targets interpolate linearly between their bracketing source samples.
/// NaN in a bracketing source value propagates into the output.
#[derive(Debug, Clone)]
pub struct ResamplePlan {
    targets: Vec<f64>,
    /// Count of targets below the source minimum.
    below: usize,
    brackets: Vec<Bracket>,
}

impl ResamplePlan {
    /// Build a plan from ascending source depths onto a target grid.
    ///
    /// Targets must be free of missing values; a non-ascending target
    /// grid is stable-sorted first. Source depths must be strictly
    /// ascending and duplicate-free.
    pub fn new(source: &[f64], targets: &[f64]) -> Result<Self> {
        if source.is_empty() {
            return Err(LasError::EmptyData("no source depths".to_string()));
        }
        if source.iter().any(|d| d.is_nan()) {
            return Err(LasError::InvalidDepth(
                "source depths contain missing values".to_string(),
            ));
        }
        for pair in source.windows(2) {
            match pair[0].partial_cmp(&pair[1]) {
                Some(Ordering::Less) => {}
                Some(Ordering::Equal) => return Err(LasError::DuplicateDepth(pair[0])),
                _ => {
                    return Err(LasError::InvalidDepth(
                        "source depths not ascending".to_string(),
                    ));
                }
            }
        }
        if targets.iter().any(|d| d.is_nan()) {
            return Err(LasError::InvalidDepth(
                "target depths contain missing values".to_string(),
            ));
        }

        let mut targets = targets.to_vec();
        if !targets.windows(2).all(|w| w[0] < w[1]) {
            targets.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        }

        let min = source[0];
        let max = source[source.len() - 1];
        let below = targets.iter().take_while(|&&t| t < min).count();
        let inner_end = targets.len() - targets.iter().rev().take_while(|&&t| t > max).count();

        let mut brackets = Vec::with_capacity(inner_end - below);
        let mut floor = 0usize;
        let mut ceiling = 0usize;
        for &target in &targets[below..inner_end] {
            while source[floor] < target {
                floor += 1;
            }
            while source[ceiling] < target {
                ceiling += 1;
            }
            if source[ceiling] == target {
                brackets.push(Bracket::Exact(ceiling));
            } else {
                let lower = floor - 1;
                let frac = (target - source[lower]) / (source[ceiling] - source[lower]);
                brackets.push(Bracket::Interp {
                    lower,
                    upper: ceiling,
                    frac,
                });
            }
        }

        Ok(Self {
            targets,
            below,
            brackets,
        })
    }

    /// The target grid, sorted ascending. This is what the output depth
    /// column takes, literally, including out-of-range entries.
    pub fn depths(&self) -> &[f64] {
        &self.targets
    }

    /// Number of output rows.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the target grid is empty.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Map one source value column onto the target grid.
    pub fn apply(&self, values: &[f64]) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.targets.len());
        out.resize(self.below, f64::NAN);
        for bracket in &self.brackets {
            let value = match *bracket {
                Bracket::Exact(i) => values[i],
                Bracket::Interp { lower, upper, frac } => {
                    values[lower] + frac * (values[upper] - values[lower])
                }
            };
            out.push(value);
        }
        out.resize(self.targets.len(), f64::NAN);
        out
    }
}

impl Table {
    /// Resample every value column onto `targets`, in place.
    ///
    /// All output columns become floating-point; integer columns are cast
    /// first, and a Text or DateTime column aborts with
    /// [`LasError::NonNumericColumn`] before anything is mutated. The
    /// depth column takes the literal target grid.
    pub fn resample(&mut self, targets: &[f64]) -> Result<()> {
        if let Some(column) = self.columns()[1..]
            .iter()
            .find(|c| !c.dtype().is_numeric())
        {
            return Err(LasError::NonNumericColumn {
                name: column.name.clone(),
            });
        }

        let plan = ResamplePlan::new(&self.depths(), targets)?;

        for (index, column) in self.columns_mut().iter_mut().enumerate() {
            if index == 0 {
                column.values = ColumnValues::Float(plan.depths().to_vec());
                continue;
            }
            let values = match column.values.as_f64() {
                Some(v) => v,
                None => continue,
            };
            column.values = ColumnValues::Float(plan.apply(&values));
        }
        Ok(())
    }
}

impl Curve<'_> {
    /// Resample the curve onto `targets`, computing a new value vector
    /// and rebinding the depth reference to an owned copy of the grid.
    /// The parent table is untouched.
    pub fn resample(&mut self, targets: &[f64]) -> Result<()> {
        let plan = ResamplePlan::new(self.depths(), targets)?;
        self.set_values(plan.apply(self.values()));
        self.rebind_depths(plan.depths().to_vec());
        Ok(())
    }
}
