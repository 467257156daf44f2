//! Error types for the texsearch-engine crate.

use std::path::PathBuf;

use texsearch_document::DocumentError;
use thiserror::Error;

/// Errors that can occur while scanning the corpus.
///
/// None of these reach the caller of a search: the orchestrator logs them and carries on
/// with fewer documents.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The document directory does not exist or is not a directory.
    #[error("document directory does not exist: {path}")]
    MissingDirectory {
        /// Path that was expected to hold the documents.
        path: PathBuf,
    },

    /// Failed to list the document directory.
    #[error("failed to list {path}: {source}")]
    ListDirectory {
        /// Directory being listed.
        path: PathBuf,
        /// Underlying walk error.
        source: walkdir::Error,
    },

    /// An individual document could not be read.
    #[error(transparent)]
    UnreadableFile(#[from] DocumentError),
}
