//! Stateful section scanning over LAS text.

use crate::error::{LasError, Result};

/// Lines starting with this are comments.
const COMMENT_MARKER: char = '#';
/// Lines starting with this open a section.
const SECTION_MARKER: char = '~';

/// A line cursor over the decoded text.
///
/// The scanner is the only stateful piece of the parse: it owns the read
/// position, and every operation advances it.
#[derive(Debug)]
pub struct Scanner<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            pos: 0,
        }
    }

    /// Move the cursor back to the start.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Reset to the start, then advance line by line, skipping blank and
    /// comment lines, until a line whose trimmed content starts with
    /// `marker` (`None` matches any section line). On success the cursor
    /// sits immediately after the matched line, which is returned.
    pub fn seek_section(&mut self, marker: Option<&str>) -> Result<&'a str> {
        self.reset();
        let wanted = marker.unwrap_or("~");
        loop {
            let line = self.next_line().ok_or_else(|| LasError::SectionNotFound {
                marker: wanted.to_string(),
            })?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
                continue;
            }
            if trimmed.starts_with(wanted) {
                return Ok(line);
            }
        }
    }

    /// Advance to the next section line from the current position,
    /// without resetting. Returns `None` when the text is exhausted.
    pub fn next_section(&mut self) -> Option<&'a str> {
        loop {
            let line = self.next_line()?;
            if line.trim_start().starts_with(SECTION_MARKER) {
                return Some(line);
            }
        }
    }

    /// The next section body line: skips blank and comment lines, stops
    /// *before* the next section line (leaving it for [`next_section`])
    /// and at end of text.
    ///
    /// [`next_section`]: Scanner::next_section
    pub fn next_body_line(&mut self) -> Option<&'a str> {
        loop {
            let line = *self.lines.get(self.pos)?;
            let trimmed = line.trim();
            if trimmed.starts_with(SECTION_MARKER) {
                return None;
            }
            self.pos += 1;
            if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
                continue;
            }
            return Some(line);
        }
    }

    fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.get(self.pos)?;
        self.pos += 1;
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "# comment\n\
                        \n\
                        ~Version Information\n\
                        VERS.  2.0 : version\n\
                        ~Well\n\
                        # well comment\n\
                        NULL.  -999.25 : null value\n\
                        ~ASCII\n\
                        100.0 1.0\n";

    #[test]
    fn test_seek_section_lands_after_marker() {
        let mut scanner = Scanner::new(TEXT);
        scanner.seek_section(Some("~W")).unwrap();
        assert_eq!(scanner.next_body_line(), Some("NULL.  -999.25 : null value"));
    }

    #[test]
    fn test_seek_section_any() {
        let mut scanner = Scanner::new(TEXT);
        let line = scanner.seek_section(None).unwrap();
        assert_eq!(line, "~Version Information");
    }

    #[test]
    fn test_seek_section_resets_first() {
        let mut scanner = Scanner::new(TEXT);
        scanner.seek_section(Some("~A")).unwrap();
        // A later seek for an earlier section still succeeds.
        let line = scanner.seek_section(Some("~V")).unwrap();
        assert_eq!(line, "~Version Information");
    }

    #[test]
    fn test_missing_marker_is_fatal() {
        let mut scanner = Scanner::new(TEXT);
        let result = scanner.seek_section(Some("~P"));
        assert!(matches!(
            result,
            Err(LasError::SectionNotFound { marker }) if marker == "~P"
        ));
    }

    #[test]
    fn test_body_lines_stop_before_next_section() {
        let mut scanner = Scanner::new(TEXT);
        scanner.seek_section(Some("~V")).unwrap();
        assert_eq!(scanner.next_body_line(), Some("VERS.  2.0 : version"));
        assert_eq!(scanner.next_body_line(), None);
        // The section line itself is still there for the section walk.
        assert_eq!(scanner.next_section(), Some("~Well"));
    }

    #[test]
    fn test_section_walk() {
        let mut scanner = Scanner::new(TEXT);
        assert_eq!(scanner.next_section(), Some("~Version Information"));
        assert_eq!(scanner.next_section(), Some("~Well"));
        assert_eq!(scanner.next_section(), Some("~ASCII"));
        assert_eq!(scanner.next_section(), None);
    }

    #[test]
    fn test_data_body_runs_to_end() {
        let mut scanner = Scanner::new(TEXT);
        scanner.seek_section(Some("~A")).unwrap();
        assert_eq!(scanner.next_body_line(), Some("100.0 1.0"));
        assert_eq!(scanner.next_body_line(), None);
    }
}
