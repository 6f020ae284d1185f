use std::fs;
use std::path::Path;

use tracing::{info, warn};

use super::parser::{parse, Parsed};
use crate::config::ParseMode;
use crate::error::LoadError;

/// Read and parse an exam file.
///
/// The file is read completely and closed before parsing. An unreadable file
/// and a file with no questions are both errors.
pub fn load_exam<P: AsRef<Path>>(path: P, mode: ParseMode) -> Result<Parsed, LoadError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|source| {
        warn!(path = %path.display(), error = %source, "exam file unreadable");
        LoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let parsed = parse(&content, mode);
    if parsed.exam.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    info!(
        path = %path.display(),
        questions = parsed.exam.len(),
        invalid = parsed.diagnostics.len(),
        "exam loaded"
    );
    Ok(parsed)
}
