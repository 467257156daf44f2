//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::{fmt, fs, path::Path};

use crate::{Config, Corpus};

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The corpus path does not exist.
    CorpusPathMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The corpus path exists but is not a directory.
    CorpusPathNotDirectory {
        /// Path that is not a directory.
        path: String,
    },
    /// The corpus directory holds no files with the configured extension.
    NoDocuments {
        /// The corpus directory.
        path: String,
        /// Extension that matched nothing.
        extension: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CorpusPathMissing { path } => {
                write!(f, "corpus path does not exist: {path}")
            }
            Self::CorpusPathNotDirectory { path } => {
                write!(f, "corpus path is not a directory: {path}")
            }
            Self::NoDocuments { path, extension } => {
                write!(f, "corpus {path} contains no .{extension} files")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    validate_corpus(&config.corpus).into_iter().collect()
}

/// Validates the corpus location and contents.
fn validate_corpus(corpus: &Corpus) -> Option<ConfigWarning> {
    let path = corpus.path.display().to_string();

    if !corpus.path.exists() {
        return Some(ConfigWarning::CorpusPathMissing { path });
    }
    if !corpus.path.is_dir() {
        return Some(ConfigWarning::CorpusPathNotDirectory { path });
    }
    if count_documents(&corpus.path, &corpus.extension) == 0 {
        return Some(ConfigWarning::NoDocuments {
            path,
            extension: corpus.extension.clone(),
        });
    }

    None
}

/// Counts regular files in `dir` carrying `extension`.
fn count_documents(dir: &Path, extension: &str) -> usize {
    let Ok(entries) = fs::read_dir(dir) else {
        return 0;
    };
    entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
        .filter(|entry| entry.path().extension().is_some_and(|e| e == extension))
        .count()
}
