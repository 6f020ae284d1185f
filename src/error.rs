//! Error types.
//!
//! Only hard stops live here. Malformed lines and bad answer fields are
//! handled inside the parser and never surface as errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn an exam file into a usable question set.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file is missing or cannot be read.
    #[error("cannot read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was read but no question could be parsed from it.
    #[error("{} contains no questions", .path.display())]
    Empty { path: PathBuf },
}

/// Error type for exam operations.
#[derive(Debug, Error)]
pub enum ExamError {
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),

    #[error("no .exam files found in {}", .dir.display())]
    NoExamFiles { dir: PathBuf },

    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
