//! File-level filter job
//!
//! A job reads the whole source, selects and filters one line, and only then
//! writes the destination. A failure before the write (unreadable source,
//! line out of range) therefore leaves the destination untouched.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use super::error::FilterError;
use super::filter::filter_line;
use super::lines::select_line;

/// One invocation of the line filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterJob {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub line_index: usize,
}

/// Summary of a completed job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterReport {
    pub line_index: usize,
    pub kept: usize,
    pub dropped: usize,
    pub bytes_written: usize,
}

impl FilterJob {
    pub fn new(
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        line_index: usize,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            line_index,
        }
    }

    /// Read the source, filter the selected line, and write the destination
    #[tracing::instrument(skip(self), fields(line = self.line_index), err(level = "debug"))]
    pub fn run(&self) -> Result<FilterReport, FilterError> {
        let text = fs::read_to_string(&self.source).map_err(|source| FilterError::Read {
            path: self.source.clone(),
            source,
        })?;
        debug!(path = %self.source.display(), bytes = text.len(), "read source");

        let line = select_line(&text, self.line_index)?;
        let outcome = filter_line(line);
        debug!(
            kept = outcome.kept.len(),
            dropped = outcome.dropped,
            "filtered line"
        );

        let output = outcome.joined();
        fs::write(&self.destination, &output).map_err(|source| FilterError::Write {
            path: self.destination.clone(),
            source,
        })?;
        debug!(path = %self.destination.display(), bytes = output.len(), "wrote destination");

        Ok(FilterReport {
            line_index: self.line_index,
            kept: outcome.kept.len(),
            dropped: outcome.dropped,
            bytes_written: output.len(),
        })
    }
}
