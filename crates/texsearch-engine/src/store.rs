//! Document store access.
//!
//! The store is a flat directory: only its immediate children carrying the configured
//! extension are documents. Listing is sorted by file name so scans, and therefore the
//! order of equally relevant results, are deterministic.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use texsearch_config::Corpus;
use texsearch_document::{Document, read_document};
use walkdir::WalkDir;

use crate::EngineError;

/// A directory of documents sharing one extension.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    /// Directory holding the documents.
    dir: PathBuf,
    /// Recognized extension, without the dot.
    extension: String,
}

impl DocumentStore {
    /// Creates a store over `dir` recognizing files with `extension`.
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    /// Creates a store for a configured corpus.
    pub fn from_corpus(corpus: &Corpus) -> Self {
        Self::new(corpus.path.clone(), corpus.extension.clone())
    }

    /// Returns the document directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the recognized extension.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Lists the document files in the store, sorted by file name.
    ///
    /// Subdirectories and files with other extensions are skipped; dot-prefixed names are not.
    /// Symlinks are followed, so a link to a document counts as a document.
    pub fn list(&self) -> Result<Vec<PathBuf>, EngineError> {
        if !self.dir.is_dir() {
            return Err(EngineError::MissingDirectory {
                path: self.dir.clone(),
            });
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(e) => e,
                // The root itself vanished or became unreadable
                Err(source) if source.depth() == 0 => {
                    return Err(EngineError::ListDirectory {
                        path: self.dir.clone(),
                        source,
                    });
                }
                Err(source) => {
                    tracing::debug!(error = %source, "skipping unlistable entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            if self.recognizes(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    /// Reads one document from the store.
    pub fn read(&self, path: &Path) -> Result<Document, EngineError> {
        Ok(read_document(path, &self.extension)?)
    }

    /// Returns true if `path` carries the store's extension.
    fn recognizes(&self, path: &Path) -> bool {
        path.extension().and_then(OsStr::to_str) == Some(self.extension.as_str())
    }
}
