//! Adaptation log reader.

use std::path::PathBuf;

use ingen_core::FileAccessError;
use tracing::debug;

/// Reads an append-only adaptation log.
///
/// Lines are returned in file order with their line terminators intact. No
/// trimming, filtering, or parsing happens here.
#[derive(Debug, Clone)]
pub struct LogReader {
    path: PathBuf,
}

impl LogReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read every line. A missing or unreadable file is an error; there is no fallback.
    pub fn read(&self) -> Result<Vec<String>, FileAccessError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| FileAccessError {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        let lines: Vec<String> = content.split_inclusive('\n').map(str::to_string).collect();
        debug!(path = %self.path.display(), lines = lines.len(), "Read adaptation log");
        Ok(lines)
    }
}
