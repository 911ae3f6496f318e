//! The loaded LAS document: header sections plus the data table.

use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Result;
use crate::header::{HeaderField, HeaderSection, SectionKind};
use crate::input::{LasParser, SourceMetadata};
use crate::table::{Curve, Table};
use crate::warning::LoadWarning;

/// Well-section fields rewritten by [`Document::trim`].
const STRT_MNEMONIC: &str = "STRT";
const STOP_MNEMONIC: &str = "STOP";

/// A parsed LAS document.
///
/// Owns every header section (keyed by canonical section name) and
/// exactly one data table. Sections and table are dropped together with
/// the document; there is no teardown protocol.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    sections: IndexMap<String, HeaderSection>,
    table: Table,
    source: Option<SourceMetadata>,
}

/// A successfully loaded document plus the recoverable conditions that
/// were worked around on the way.
#[derive(Debug)]
pub struct LoadResult {
    pub document: Document,
    pub warnings: Vec<LoadWarning>,
}

/// Load a LAS file with default parser configuration.
pub fn load(path: impl AsRef<Path>) -> Result<LoadResult> {
    LasParser::new().parse_path(path)
}

impl Document {
    pub(crate) fn new(
        sections: IndexMap<String, HeaderSection>,
        table: Table,
        source: Option<SourceMetadata>,
    ) -> Self {
        Self {
            sections,
            table,
            source,
        }
    }

    /// Generic section lookup by canonical name (lowercased head word).
    pub fn section(&self, name: &str) -> Option<&HeaderSection> {
        self.sections.get(name)
    }

    /// Names of all attached sections, in file order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(|k| k.as_str())
    }

    /// The version section.
    pub fn version(&self) -> Option<&HeaderSection> {
        self.section(SectionKind::Version.key())
    }

    /// The well section.
    pub fn well(&self) -> Option<&HeaderSection> {
        self.section(SectionKind::Well.key())
    }

    /// The curve-descriptor section.
    pub fn curves(&self) -> Option<&HeaderSection> {
        self.section(SectionKind::Curve.key())
    }

    /// The parameter section.
    pub fn parameters(&self) -> Option<&HeaderSection> {
        self.section(SectionKind::Parameter.key())
    }

    /// The free-text "other" section.
    pub fn other(&self) -> Option<&HeaderSection> {
        self.section(SectionKind::Other.key())
    }

    /// Look up a header field across a named section.
    pub fn header_field(&self, section: &str, mnemonic: &str) -> Option<&HeaderField> {
        self.section(section).and_then(|s| s.get(mnemonic))
    }

    /// The data table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Mutable access to the data table.
    pub fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    /// Provenance of the load, when the document came from a file.
    pub fn source(&self) -> Option<&SourceMetadata> {
        self.source.as_ref()
    }

    /// Extract a curve by mnemonic; `None` for unknown or non-numeric
    /// columns.
    pub fn curve(&self, mnemonic: &str) -> Option<Curve<'_>> {
        self.table.curve(mnemonic)
    }

    /// Trim the table to a depth range and rewrite the well section's
    /// STRT/STOP values to the surviving extent.
    pub fn trim(&mut self, start: Option<f64>, stop: Option<f64>) {
        self.table.trim(start, stop);

        let depths = self.table.depths();
        let (Some(&first), Some(&last)) = (depths.first(), depths.last()) else {
            return;
        };
        if let Some(well) = self.sections.get_mut(SectionKind::Well.key()) {
            well.set_value(STRT_MNEMONIC, first.to_string());
            well.set_value(STOP_MNEMONIC, last.to_string());
        }
    }

    /// Resample the whole table onto a target depth grid, in place.
    pub fn resample(&mut self, targets: &[f64]) -> Result<()> {
        self.table.resample(targets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Column, ColumnValues};

    fn document() -> Document {
        let mut well = HeaderSection::new();
        well.push(HeaderField {
            mnemonic: "STRT".into(),
            unit: "M".into(),
            value: "100".into(),
            description: String::new(),
        });
        well.push(HeaderField {
            mnemonic: "STOP".into(),
            unit: "M".into(),
            value: "130".into(),
            description: String::new(),
        });

        let mut sections = IndexMap::new();
        sections.insert("well".to_string(), well);

        let table = Table::from_columns(vec![
            Column::new(
                "DEPT",
                "M",
                "",
                ColumnValues::Float(vec![100.0, 110.0, 120.0, 130.0]),
            ),
            Column::new("GR", "GAPI", "", ColumnValues::Float(vec![1.0, 2.0, 3.0, 4.0])),
        ])
        .unwrap();

        Document::new(sections, table, None)
    }

    #[test]
    fn test_typed_accessors() {
        let doc = document();
        assert!(doc.well().is_some());
        assert!(doc.version().is_none());
        assert_eq!(
            doc.header_field("well", "STRT").map(|f| f.value.as_str()),
            Some("100")
        );
    }

    #[test]
    fn test_trim_rewrites_well_extent() {
        let mut doc = document();
        doc.trim(Some(105.0), Some(125.0));

        assert_eq!(doc.table().depths(), vec![110.0, 120.0]);
        assert_eq!(doc.well().unwrap().get_value("STRT"), Some("110"));
        assert_eq!(doc.well().unwrap().get_value("STOP"), Some("120"));
    }

    #[test]
    fn test_trim_to_nothing_keeps_old_extent() {
        let mut doc = document();
        doc.trim(Some(500.0), Some(600.0));

        assert!(doc.table().is_empty());
        assert_eq!(doc.well().unwrap().get_value("STRT"), Some("100"));
    }

    #[test]
    fn test_curve_extraction_and_resample() {
        let mut doc = document();
        doc.resample(&[105.0, 115.0]).unwrap();
        assert_eq!(doc.table().depths(), vec![105.0, 115.0]);

        let curve = doc.curve("GR").unwrap();
        assert!((curve.values()[0] - 1.5).abs() < 1e-9);
    }
}
