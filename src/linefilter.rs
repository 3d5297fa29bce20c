//! Line filter
//!
//! The filter is a straight pipeline, one module per stage:
//!
//! 1. [lines] - split the source text on universal newlines and pick a line
//! 2. [lexing] - run the logos lexer over the line and group lexemes into fields
//! 3. [filter] - keep the fields that are non-zero digit runs
//! 4. [job] - the file-level driver: read source, filter, write destination
//!
//! All failures surface as [error::FilterError].

pub mod error;
pub mod filter;
pub mod job;
pub mod lexing;
pub mod lines;
