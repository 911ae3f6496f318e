//! Borelog: LAS well-log ingestion and depth-grid resampling.
//!
//! Borelog parses Log ASCII Standard text into a strongly-typed tabular
//! document and re-expresses the table on arbitrary depth grids via
//! linear interpolation.
//!
//! # Core Principles
//!
//! - **No partial results**: a fatal parse error never yields a document
//! - **Recoverable conditions are surfaced**: auto-sorts and fallbacks
//!   come back as warnings next to a usable result
//! - **Typed columns**: every column is a tagged variant with explicit
//!   coercion rules, never an ad hoc conversion
//!
//! # Example
//!
//! ```no_run
//! let result = borelog::load("well_12.las").unwrap();
//! let mut document = result.document;
//!
//! println!("null sentinel: {:?}", document.well().and_then(|w| w.get_value("NULL")));
//! println!("rows: {}", document.table().len());
//!
//! // Re-express every curve on a half-metre grid.
//! let targets: Vec<f64> = (200..400).map(|i| i as f64 * 0.5).collect();
//! document.resample(&targets).unwrap();
//! ```

pub mod error;
pub mod header;
pub mod inference;
pub mod input;
pub mod resample;
pub mod table;
pub mod warning;

mod document;

pub use crate::document::{Document, LoadResult, load};
pub use error::{LasError, Result};
pub use header::{HeaderField, HeaderSection, SectionKind};
pub use input::{GrammarVersion, HeaderGrammar, LasParser, ParserConfig, Scanner, SourceMetadata};
pub use resample::ResamplePlan;
pub use table::{Column, ColumnType, ColumnValues, Curve, CurveCoverage, Table, TableBuilder};
pub use warning::{LoadWarning, Severity, WarningKind};
