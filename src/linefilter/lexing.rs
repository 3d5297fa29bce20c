//! Field lexing
//!
//! A selected line is tokenized with a logos lexer into three lexeme kinds:
//! separators (`,`), digit runs (`0-9`) and text runs (anything else).
//! Lexemes between two separators make up a [Field], which is classified as
//! it is assembled. A field is a number only when it consists of exactly one
//! digit run; any text lexeme, even a sign or a space, makes it [FieldKind::Other].
//!
//! Field texts borrow from the line, so kept fields are emitted exactly as
//! written (`08` stays `08`).

use logos::Logos;

/// Lexical classes of a line
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme {
    #[token(",")]
    Separator,

    #[regex(r"[0-9]+")]
    Digits,

    // Everything that is neither a separator nor a decimal digit
    #[regex(r"[^,0-9]+")]
    Text,
}

/// Classification of one comma-delimited field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Nothing between the separators
    Empty,
    /// Digits only, all of them `0`
    Zero,
    /// Digits only, at least one of them non-zero
    Number,
    /// Contains at least one non-digit character
    Other,
}

impl FieldKind {
    /// Fold a digit run into the classification
    fn with_digits(self, digits: &str) -> Self {
        match self {
            FieldKind::Empty | FieldKind::Zero => {
                if digits.bytes().any(|b| b != b'0') {
                    FieldKind::Number
                } else {
                    FieldKind::Zero
                }
            }
            kind => kind,
        }
    }
}

/// One comma-delimited field of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    pub text: &'a str,
    pub kind: FieldKind,
}

impl Field<'_> {
    /// True for digit-only fields with a non-zero value
    pub fn is_qualifying(&self) -> bool {
        self.kind == FieldKind::Number
    }
}

/// Iterator over the classified fields of a line
///
/// Like splitting on `,`, a line always has at least one field, and `n`
/// separators produce `n + 1` fields.
pub struct Fields<'a> {
    source: &'a str,
    lexer: logos::Lexer<'a, Lexeme>,
    start: usize,
    finished: bool,
}

impl<'a> Iterator for Fields<'a> {
    type Item = Field<'a>;

    fn next(&mut self) -> Option<Field<'a>> {
        if self.finished {
            return None;
        }

        let mut kind = FieldKind::Empty;
        while let Some(result) = self.lexer.next() {
            match result {
                Ok(Lexeme::Separator) => {
                    let span = self.lexer.span();
                    let field = Field {
                        text: &self.source[self.start..span.start],
                        kind,
                    };
                    self.start = span.end;
                    return Some(field);
                }
                Ok(Lexeme::Digits) => kind = kind.with_digits(self.lexer.slice()),
                Ok(Lexeme::Text) | Err(()) => kind = FieldKind::Other,
            }
        }

        self.finished = true;
        Some(Field {
            text: &self.source[self.start..],
            kind,
        })
    }
}

/// Lex `line` into its comma-delimited fields
pub fn fields(line: &str) -> Fields<'_> {
    Fields {
        source: line,
        lexer: Lexeme::lexer(line),
        start: 0,
        finished: false,
    }
}
