//! LAS parse orchestration.
//!
//! A load runs the section scanner and header grammar over the decoded
//! text, infers column types from the first data row, and hands the raw
//! rows to the table builder. Two passes over the text: one to find the
//! declared version (which selects the header grammar), one to parse
//! every section with it.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use log::{debug, warn};
use sha2::{Digest, Sha256};

use super::grammar::{GrammarVersion, HeaderGrammar};
use super::scanner::Scanner;
use super::source::SourceMetadata;
use crate::document::{Document, LoadResult};
use crate::error::{LasError, Result};
use crate::header::{HeaderSection, SectionKind};
use crate::inference::infer_row_types;
use crate::table::TableBuilder;
use crate::warning::{LoadWarning, WarningKind};

/// The well-section field naming the null sentinel.
const NULL_MNEMONIC: &str = "NULL";
/// The version-section field naming the LAS version.
const VERS_MNEMONIC: &str = "VERS";

/// Parser configuration.
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    /// Sentinel to use when the well section has no NULL field. Without
    /// it, no sentinel substitution is performed in that case.
    pub fallback_null: Option<f64>,
}

/// Parses LAS text into a [`Document`].
#[derive(Debug, Default)]
pub struct LasParser {
    config: ParserConfig,
}

impl LasParser {
    /// Create a parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Load a LAS file. The file is decoded as latin-1 (the format's
    /// single-byte character set) and provenance metadata is recorded on
    /// the document.
    pub fn parse_path(&self, path: impl AsRef<Path>) -> Result<LoadResult> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| LasError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let hash = format!("sha256:{:x}", hasher.finalize());
        let metadata = SourceMetadata::new(path.to_path_buf(), hash, bytes.len() as u64);

        let text = decode_latin1(&bytes);
        self.parse_text(&text, Some(metadata))
    }

    /// Parse LAS text already in memory. No provenance is recorded.
    pub fn parse_str(&self, text: &str) -> Result<LoadResult> {
        self.parse_text(text, None)
    }

    fn parse_text(&self, text: &str, source: Option<SourceMetadata>) -> Result<LoadResult> {
        let mut warnings = Vec::new();

        let vers_literal = detect_version_literal(text)?;
        let version = match vers_literal.as_deref().and_then(GrammarVersion::from_vers) {
            Some(version) => version,
            None => {
                let message = match &vers_literal {
                    Some(value) => format!("unrecognized VERS value {value:?}; using 2.0 grammar"),
                    None => "no VERS field found; using 2.0 grammar".to_string(),
                };
                warn!("{message}");
                warnings.push(LoadWarning::new(WarningKind::VersionFallback, message));
                GrammarVersion::V2_0
            }
        };
        let grammar = HeaderGrammar::for_version(version);
        debug!("selected grammar {version:?}");

        let mut scanner = Scanner::new(text);
        let mut sections: IndexMap<String, HeaderSection> = IndexMap::new();
        let mut data: Option<(Vec<_>, Vec<&str>)> = None;

        while let Some(line) = scanner.next_section() {
            let Some(kind) = SectionKind::from_line(line) else {
                continue;
            };

            if kind == SectionKind::Data {
                let first = scanner
                    .next_body_line()
                    .ok_or_else(|| LasError::EmptyData("no data rows".to_string()))?;
                let dtypes = infer_row_types(first);
                let mut rows = vec![first];
                while let Some(row) = scanner.next_body_line() {
                    rows.push(row);
                }
                data = Some((dtypes, rows));
                break;
            }

            let key = kind.key().to_string();
            let mut section = HeaderSection::new();
            while let Some(body) = scanner.next_body_line() {
                section.push(grammar.parse(&key, body)?);
            }
            debug!("section '{key}': {} fields", section.len());
            sections.insert(key, section);
        }

        let Some((dtypes, rows)) = data else {
            return Err(LasError::SectionNotFound {
                marker: "~A".to_string(),
            });
        };

        let sentinel = self.resolve_sentinel(&sections, &mut warnings);

        let empty = HeaderSection::new();
        let descriptors = sections.get(SectionKind::Curve.key()).unwrap_or(&empty);
        let built = TableBuilder::new(dtypes, descriptors, sentinel).build(rows)?;
        warnings.extend(built.warnings);

        let mut source = source;
        if let Some(metadata) = &mut source {
            metadata.version = vers_literal;
            metadata.row_count = built.table.len();
            metadata.column_count = built.table.column_count();
        }
        debug!(
            "loaded document: {} rows, {} columns, {} warnings",
            built.table.len(),
            built.table.column_count(),
            warnings.len()
        );

        Ok(LoadResult {
            document: Document::new(sections, built.table, source),
            warnings,
        })
    }

    /// Null sentinel from the well section, the configured fallback
    /// otherwise. A missing or unreadable NULL field is an advisory.
    fn resolve_sentinel(
        &self,
        sections: &IndexMap<String, HeaderSection>,
        warnings: &mut Vec<LoadWarning>,
    ) -> Option<f64> {
        let declared = sections
            .get(SectionKind::Well.key())
            .and_then(|well| well.get_value(NULL_MNEMONIC));

        match declared.map(|v| v.trim().parse::<f64>()) {
            Some(Ok(value)) => Some(value),
            Some(Err(_)) | None => {
                let message = match (declared, self.config.fallback_null) {
                    (Some(raw), Some(fallback)) => {
                        format!("unreadable NULL value {raw:?}; using fallback {fallback}")
                    }
                    (Some(raw), None) => {
                        format!("unreadable NULL value {raw:?}; no sentinel substitution")
                    }
                    (None, Some(fallback)) => {
                        format!("well section has no NULL field; using fallback {fallback}")
                    }
                    (None, None) => {
                        "well section has no NULL field; no sentinel substitution".to_string()
                    }
                };
                warnings.push(LoadWarning::new(WarningKind::MissingNullSentinel, message));
                self.config.fallback_null
            }
        }
    }
}

/// Find the raw `VERS` value by parsing the version section with the 2.0
/// grammar (the version line itself is grammar-stable across versions).
fn detect_version_literal(text: &str) -> Result<Option<String>> {
    let grammar = HeaderGrammar::for_version(GrammarVersion::V2_0);
    let mut scanner = Scanner::new(text);

    while let Some(line) = scanner.next_section() {
        match SectionKind::from_line(line) {
            Some(SectionKind::Version) => {
                while let Some(body) = scanner.next_body_line() {
                    let field = grammar.parse(SectionKind::Version.key(), body)?;
                    if field.mnemonic == VERS_MNEMONIC {
                        return Ok(Some(field.value));
                    }
                }
                return Ok(None);
            }
            Some(SectionKind::Data) => return Ok(None),
            _ => continue,
        }
    }
    Ok(None)
}

/// Decode a latin-1 byte stream: every byte maps to the code point of the
/// same value.
pub(crate) fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
