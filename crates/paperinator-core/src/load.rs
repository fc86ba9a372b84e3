use std::path::Path;

use crate::LoadError;
use crate::collection::parse_collection;
use crate::paper::Paper;

/// Completion of a single file read: the whole text, or why it failed.
pub type ReadOutcome = std::io::Result<String>;

/// Read a file into memory as UTF-8 text.
///
/// The file is buffered whole; invalid UTF-8 counts as a read failure.
pub async fn read_file(path: impl AsRef<Path>) -> ReadOutcome {
    let path = path.as_ref();
    let outcome = tokio::fs::read_to_string(path).await;
    match &outcome {
        Ok(text) => tracing::debug!(path = %path.display(), bytes = text.len(), "read file"),
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "failed to read file"),
    }
    outcome
}

/// Read and parse a file in one step, for callers that don't drive a
/// [`PaperBrowser`](crate::PaperBrowser).
pub async fn load_path(path: impl AsRef<Path>) -> Result<Vec<Paper>, LoadError> {
    let text = read_file(path).await?;
    parse_collection(&text)
}
