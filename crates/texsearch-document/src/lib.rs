//! Document parsing for texsearch.
//!
//! Tutorials are LaTeX-flavoured text files. This crate reads them and derives the structure
//! the search engine scores against:
//! - Labeled metadata fields (`\title{}`, `\category{}`, `\keywords{}`, `\date{}`, the
//!   `abstract` environment)
//! - Sections at three heading depths, each with its body span
//! - Section ids for result URLs, plus the table-of-contents anchor scheme
//!
//! Parsing never fails: absent or malformed fields resolve to documented defaults.

#![warn(missing_docs)]

mod error;
mod markup;
mod metadata;
mod section;
mod slug;

use std::{
    fs,
    path::{Path, PathBuf},
};

pub use error::DocumentError;
pub use markup::strip_markup;
pub use metadata::{Metadata, UNCATEGORIZED};
pub use section::{Section, SectionLevel, segment_sections};
pub use slug::{anchor_slug, anchors_agree, section_id};

/// A document read from the corpus.
///
/// Documents are reconstructed on every search and never cached.
#[derive(Debug, Clone)]
pub struct Document {
    /// File name with the extension stripped; unique within the corpus.
    pub slug: String,
    /// Path the document was read from.
    pub path: PathBuf,
    /// Full text at read time.
    pub content: String,
}

impl Document {
    /// Extracts the labeled metadata fields.
    pub fn metadata(&self) -> Metadata {
        Metadata::extract(&self.content)
    }

    /// Splits the body into its ordered sections.
    pub fn sections(&self) -> Vec<Section<'_>> {
        segment_sections(&self.content)
    }
}

/// Derives a document slug from its file name by stripping the extension.
pub fn slug_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
}

/// Reads a document from disk.
///
/// The file must carry `extension` (given without the dot).
pub fn read_document(path: &Path, extension: &str) -> Result<Document, DocumentError> {
    if path.extension().and_then(|e| e.to_str()) != Some(extension) {
        return Err(DocumentError::UnsupportedFileType {
            path: path.to_path_buf(),
        });
    }

    let slug = slug_from_path(path).ok_or_else(|| DocumentError::UnsupportedFileType {
        path: path.to_path_buf(),
    })?;

    let content = fs::read_to_string(path).map_err(|source| DocumentError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Document {
        slug,
        path: path.to_path_buf(),
        content,
    })
}
