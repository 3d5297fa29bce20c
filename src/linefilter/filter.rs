//! Numeric field filter
//!
//! A field is kept only if it is made entirely of decimal digits and its value
//! is not zero. The digit test comes first, so `-5`, `+5`, `1.0` and ` 5` are
//! all rejected whatever their value. Kept fields are emitted verbatim.

use super::lexing::{fields, FieldKind};

/// The kept fields of one line, in their original order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome<'a> {
    pub kept: Vec<&'a str>,
    pub dropped: usize,
}

impl FilterOutcome<'_> {
    /// Render the kept fields the way they are written out
    pub fn joined(&self) -> String {
        self.kept.join(",")
    }
}

/// Returns true if `token` is a digit-only, non-zero field
pub fn is_qualifying(token: &str) -> bool {
    !token.is_empty()
        && token.bytes().all(|b| b.is_ascii_digit())
        && token.bytes().any(|b| b != b'0')
}

/// Strip surrounding whitespace from a line
///
/// The unit separator (U+001F) counts as whitespace here, next to Unicode
/// `White_Space`. The file, group and record separators never reach this
/// point since they already end a line.
fn strip_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\x1f')
}

/// Strip `line` and keep its qualifying fields
pub fn filter_line(line: &str) -> FilterOutcome<'_> {
    let mut outcome = FilterOutcome::default();
    for field in fields(strip_line(line)) {
        match field.kind {
            FieldKind::Number => outcome.kept.push(field.text),
            FieldKind::Empty | FieldKind::Zero | FieldKind::Other => outcome.dropped += 1,
        }
    }
    outcome
}
