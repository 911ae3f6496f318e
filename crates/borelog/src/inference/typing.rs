//! Token classification for data columns.
//!
//! The first row of the data section fixes one dtype per column position;
//! every later row is coerced into that dtype even if an individual token
//! would classify differently.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::table::ColumnType;

// Date patterns compiled once on first use.
static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap(),
        Regex::new(r"^\d{4}/\d{2}/\d{2}").unwrap(),
        Regex::new(r"^\d{2}-\d{2}-\d{4}").unwrap(),
    ]
});

/// Accepted datetime layouts, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
];

/// Accepted date-only layouts, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y"];

/// Classify a single whitespace-delimited token.
pub fn classify_token(token: &str) -> ColumnType {
    let trimmed = token.trim();

    if trimmed.parse::<i64>().is_ok() {
        return ColumnType::Integer;
    }

    if trimmed.parse::<f64>().is_ok() {
        return ColumnType::Float;
    }

    if looks_like_date(trimmed) && parse_datetime(trimmed).is_some() {
        return ColumnType::DateTime;
    }

    ColumnType::Text
}

/// Classify every token of the first data row, split on whitespace runs.
pub fn infer_row_types(line: &str) -> Vec<ColumnType> {
    line.split_whitespace().map(classify_token).collect()
}

/// Parse a token into a datetime, accepting the recognized layouts.
/// Date-only tokens get a midnight time component.
pub fn parse_datetime(token: &str) -> Option<NaiveDateTime> {
    let trimmed = token.trim();

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, format) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}

fn looks_like_date(token: &str) -> bool {
    DATE_PATTERNS.iter().any(|pattern| pattern.is_match(token))
}
