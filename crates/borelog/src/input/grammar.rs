//! Version-selected grammar for header body lines.
//!
//! A header line has the shape
//!
//! ```text
//! MNEMONIC .UNIT  VALUE : DESCRIPTION
//! ```
//!
//! optional leading whitespace before the mnemonic, the unit beginning
//! immediately after the dot (no whitespace), at least one space before
//! the value, and the description running from the colon to end of line.
//! The character sets allowed in each piece depend on the declared LAS
//! version.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{LasError, Result};
use crate::header::HeaderField;

// v1.2 and v2.0 share one character-set profile: mnemonics exclude
// colon/dot/whitespace, units exclude colon/whitespace, values exclude
// colon.
static HEADER_V2: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?P<mnem>[^:.\s]+)\s*\.(?P<unit>[^:\s]*)\s+(?P<value>[^:]*):(?P<desc>.*)$")
        .unwrap()
});

// v3.0 additionally excludes braces, brackets and the bar character.
static HEADER_V3: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*(?P<mnem>[^:.\s{}|\[\]]+)\s*\.(?P<unit>[^:\s{}|\[\]]*)\s+(?P<value>[^:{}|\[\]]*):(?P<desc>.*)$",
    )
    .unwrap()
});

// A parenthetical qualifier sitting between the mnemonic and the dot,
// e.g. `RHOB (Density).K/M3`.
static QUALIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]*)\)\s*\.").unwrap());

/// Grammar profile selected by the version section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarVersion {
    V1_2,
    V2_0,
    V3_0,
}

impl GrammarVersion {
    /// Map a `VERS` literal to a grammar. Returns `None` for anything
    /// outside the recognized set; callers decide the fallback.
    pub fn from_vers(value: &str) -> Option<Self> {
        match value.trim() {
            "1.2" | "1.20" => Some(GrammarVersion::V1_2),
            "2.0" | "2.00" => Some(GrammarVersion::V2_0),
            "3.0" | "3.00" => Some(GrammarVersion::V3_0),
            _ => None,
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            GrammarVersion::V1_2 | GrammarVersion::V2_0 => &HEADER_V2,
            GrammarVersion::V3_0 => &HEADER_V3,
        }
    }
}

/// Parses header body lines under one grammar version.
#[derive(Debug, Clone, Copy)]
pub struct HeaderGrammar {
    version: GrammarVersion,
}

impl HeaderGrammar {
    /// Grammar for the given version.
    pub fn for_version(version: GrammarVersion) -> Self {
        Self { version }
    }

    /// The version this grammar was selected for.
    pub fn version(&self) -> GrammarVersion {
        self.version
    }

    /// Parse one header body line into a field.
    ///
    /// Non-ASCII bytes are removed before matching. A parenthetical
    /// qualifier directly before the dot is stripped for matching and
    /// re-appended to the mnemonic. `section` only labels the error.
    pub fn parse(&self, section: &str, line: &str) -> Result<HeaderField> {
        let ascii: String = line.chars().filter(|c| c.is_ascii()).collect();

        let qualifier = QUALIFIER
            .captures(&ascii)
            .map(|caps| caps[1].trim().to_string());
        let candidate = match qualifier {
            Some(_) => QUALIFIER.replace(&ascii, " ."),
            None => std::borrow::Cow::Borrowed(ascii.as_str()),
        };

        let caps = self
            .version
            .pattern()
            .captures(&candidate)
            .ok_or_else(|| LasError::HeaderSyntax {
                section: section.to_string(),
                line: line.to_string(),
            })?;

        let mut mnemonic = caps["mnem"].trim().to_string();
        if let Some(qualifier) = qualifier {
            mnemonic = format!("{} ({})", mnemonic, qualifier);
        }

        Ok(HeaderField {
            mnemonic,
            unit: caps["unit"].trim().to_string(),
            value: caps["value"].trim().to_string(),
            description: caps["desc"].trim().to_string(),
        })
    }
}
