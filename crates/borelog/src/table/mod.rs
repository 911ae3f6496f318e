//! The typed tabular data model: columns, tables, curves.

mod builder;
mod column;
mod curve;
mod table;
mod types;

pub use builder::{BuiltTable, TableBuilder};
pub use column::{Column, ColumnValues};
pub use curve::{Curve, CurveCoverage};
pub use table::Table;
pub use types::ColumnType;
