//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the source readers and the output writer.
///
/// Everything here is fatal to the run; the one recoverable condition
/// (an unreadable hosts file) stays a plain [`std::io::Error`] so the
/// caller can downgrade it to a warning.
#[derive(Debug, Error)]
pub enum Error {
    /// The HAR file could not be read at all.
    #[error("failed to read HAR file {}: {source}", path.display())]
    HarRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The HAR document is not valid JSON.
    #[error("invalid HAR JSON: {0}")]
    HarParse(#[from] serde_json::Error),

    /// The reconciled hosts file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}
