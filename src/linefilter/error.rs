//! Errors raised while filtering a line

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while running a filter job
#[derive(Debug, Error)]
pub enum FilterError {
    /// The source file could not be opened, read, or decoded as UTF-8
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The destination file could not be created or written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The requested line does not exist in the source
    #[error("line index {index} out of range (source has {line_count} lines)")]
    LineOutOfRange { index: usize, line_count: usize },
}
