//! # linefilter
//!
//! Extracts the non-zero integer fields from one line of a comma-separated
//! text file.
//!
//! Given a source file, a destination file and a zero-based line index, the
//! selected line is trimmed, split on `,`, and every field that is made of
//! decimal digits only and is not zero is kept verbatim. The kept fields are
//! joined with `,` and written as the whole destination file:
//!
//! ```text
//! source line 1:  3,abc,0,7,-5,08
//! destination:    3,7,08
//! ```
//!
//! The [`linefilter::job::FilterJob`] runs the whole read, filter, write
//! pipeline; the lower-level pieces are exposed for callers that already hold
//! the text in memory.

pub mod linefilter;

pub use linefilter::error::FilterError;
pub use linefilter::filter::{filter_line, is_qualifying, FilterOutcome};
pub use linefilter::job::{FilterJob, FilterReport};
pub use linefilter::lexing::{fields, Field, FieldKind, Lexeme};
pub use linefilter::lines::{select_line, split_lines};
