//! Header sections of a LAS document.
//!
//! A LAS header section is an ordered list of fields; order is significant
//! for display, while lookup goes by mnemonic.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One parsed header line: `MNEM.UNIT  VALUE : DESCRIPTION`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderField {
    /// Field mnemonic; may embed a parenthetical qualifier, e.g.
    /// `RHOB (Density)`.
    pub mnemonic: String,
    /// Unit of the value, possibly empty.
    pub unit: String,
    /// Raw value text.
    pub value: String,
    /// Free-text description.
    pub description: String,
}

/// An ordered collection of header fields, looked up by mnemonic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeaderSection {
    fields: Vec<HeaderField>,
    /// Mnemonic -> index of the first field carrying it.
    index: IndexMap<String, usize>,
}

impl HeaderSection {
    /// Create an empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, preserving order. Lookup keeps the first field for
    /// a repeated mnemonic; iteration sees every field.
    pub fn push(&mut self, field: HeaderField) {
        let position = self.fields.len();
        self.index
            .entry(field.mnemonic.clone())
            .or_insert(position);
        self.fields.push(field);
    }

    /// Number of fields in the section.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the section has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a field by mnemonic.
    pub fn get(&self, mnemonic: &str) -> Option<&HeaderField> {
        self.index.get(mnemonic).map(|&i| &self.fields[i])
    }

    /// Look up a field's raw value by mnemonic.
    pub fn get_value(&self, mnemonic: &str) -> Option<&str> {
        self.get(mnemonic).map(|f| f.value.as_str())
    }

    /// Replace the value of an existing field. Returns false if the
    /// mnemonic is not present.
    pub fn set_value(&mut self, mnemonic: &str, value: impl Into<String>) -> bool {
        match self.index.get(mnemonic) {
            Some(&i) => {
                self.fields[i].value = value.into();
                true
            }
            None => false,
        }
    }

    /// Iterate fields in section order.
    pub fn iter(&self) -> impl Iterator<Item = &HeaderField> {
        self.fields.iter()
    }

    /// All mnemonics in section order.
    pub fn mnemonics(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.mnemonic.as_str())
    }
}

/// Classification of a `~` section marker line.
///
/// LAS identifies sections by the first character after the tilde, case
/// insensitively; anything unrecognized is kept under its own head word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Version,
    Well,
    Curve,
    Parameter,
    Other,
    /// The `~A` data section.
    Data,
    /// A non-standard section, keyed by its lowercased head word.
    Custom(String),
}

impl SectionKind {
    /// Classify a section marker line (the line must start with `~`).
    pub fn from_line(line: &str) -> Option<SectionKind> {
        let rest = line.trim_start().strip_prefix('~')?;
        let head: String = rest.split_whitespace().next().unwrap_or("").to_lowercase();
        let kind = match head.chars().next() {
            Some('v') => SectionKind::Version,
            Some('w') => SectionKind::Well,
            Some('c') => SectionKind::Curve,
            Some('p') => SectionKind::Parameter,
            Some('o') => SectionKind::Other,
            Some('a') => SectionKind::Data,
            _ => SectionKind::Custom(head),
        };
        Some(kind)
    }

    /// Canonical key under which the section is stored on a document.
    pub fn key(&self) -> &str {
        match self {
            SectionKind::Version => "version",
            SectionKind::Well => "well",
            SectionKind::Curve => "curve",
            SectionKind::Parameter => "parameter",
            SectionKind::Other => "other",
            SectionKind::Data => "ascii",
            SectionKind::Custom(word) => word,
        }
    }
}
