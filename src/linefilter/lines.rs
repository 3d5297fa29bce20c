//! Line splitting and selection
//!
//! Lines are split with universal-newline rules: `\r\n`, `\n` and `\r` all end
//! a line, as do the less common separators below (vertical tab, form feed,
//! the ASCII file/group/record separators, NEL, and the Unicode line and
//! paragraph separators). A separator at the very end of the text does not
//! start an extra empty line, and empty text has no lines at all.

use super::error::FilterError;

/// Returns true if `c` ends a line
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Iterator over the lines of a text, without their terminators
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.char_indices().find(|&(_, c)| is_line_boundary(c)) {
            Some((at, c)) => {
                let line = &self.rest[..at];
                let mut end = at + c.len_utf8();
                // \r\n is a single terminator
                if c == '\r' && self.rest[end..].starts_with('\n') {
                    end += 1;
                }
                self.rest = &self.rest[end..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

/// Split `text` into lines using universal-newline rules
pub fn split_lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

/// Select the zero-based `index`-th line of `text`
///
/// The returned line is untrimmed; trimming belongs to the filter.
pub fn select_line(text: &str, index: usize) -> Result<&str, FilterError> {
    split_lines(text)
        .nth(index)
        .ok_or_else(|| FilterError::LineOutOfRange {
            index,
            line_count: split_lines(text).count(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn collect(text: &str) -> Vec<&str> {
        split_lines(text).collect()
    }

    #[rstest]
    #[case::empty("", &[])]
    #[case::single("1,2,3", &["1,2,3"])]
    #[case::trailing_newline("1,2\n", &["1,2"])]
    #[case::lone_newline("\n", &[""])]
    #[case::blank_middle("a\n\nb", &["a", "", "b"])]
    #[case::crlf("a\r\nb\r\n", &["a", "b"])]
    #[case::bare_cr("a\rb", &["a", "b"])]
    #[case::cr_cr_lf("a\r\r\nb", &["a", "", "b"])]
    #[case::form_feed("a\x0cb", &["a", "b"])]
    #[case::unicode_separators("a\u{2028}b\u{85}c", &["a", "b", "c"])]
    fn test_split_lines(#[case] text: &str, #[case] expected: &[&str]) {
        assert_eq!(collect(text), expected);
    }

    #[test]
    fn test_select_line() {
        let text = "header\n3,abc,0\n 7,8 \n";
        assert_eq!(select_line(text, 0).unwrap(), "header");
        assert_eq!(select_line(text, 1).unwrap(), "3,abc,0");
        assert_eq!(select_line(text, 2).unwrap(), " 7,8 ");
    }

    #[test]
    fn test_select_line_out_of_range() {
        let err = select_line("a\nb\n", 2).unwrap_err();
        assert!(matches!(
            err,
            FilterError::LineOutOfRange {
                index: 2,
                line_count: 2
            }
        ));
    }

    #[test]
    fn test_select_line_from_empty_text() {
        assert!(matches!(
            select_line("", 0),
            Err(FilterError::LineOutOfRange {
                index: 0,
                line_count: 0
            })
        ));
    }
}
