//! Error types for scanning and report emission.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while scanning roots or emitting the report.
///
/// Every variant is fatal to the whole run: one unreadable entry anywhere
/// under any root aborts the process before a report is produced.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A configured root could not be resolved to an absolute path.
    #[error("cannot resolve path {path}: {source}")]
    ResolvePath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A directory could not be listed (missing, permission denied).
    #[error("cannot read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file's content could not be read after the listing succeeded.
    #[error("cannot read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The report could not be created or written at the output path.
    #[error("cannot write report to {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The report failed to serialize.
    #[error("cannot serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
