//! Labeled-field metadata extraction.
//!
//! Metadata lives in the document body as labeled fields of the form `\name{value}`:
//!
//! ```latex
//! \title{Graph Search}
//! \category{Algorithms}
//! \keywords{BFS, DFS}
//! \date{2023-05-15}
//! \begin{abstract}
//! Traversal strategies for graphs.
//! \end{abstract}
//! ```
//!
//! Each field is extracted independently and the first occurrence wins. Values cannot
//! contain a closing brace; an empty value (`\title{}`) counts as absent.

use std::sync::LazyLock;

use regex::Regex;

/// Category reported for documents without a `\category{}` field.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Builds the pattern for a single-line labeled field.
fn field_pattern(name: &str) -> Regex {
    Regex::new(&format!(r"\\{name}\{{([^}}]+)\}}")).expect("field pattern is a valid regex")
}

/// `\title{...}`
static TITLE: LazyLock<Regex> = LazyLock::new(|| field_pattern("title"));
/// `\category{...}`
static CATEGORY: LazyLock<Regex> = LazyLock::new(|| field_pattern("category"));
/// `\keywords{...}`
static KEYWORDS: LazyLock<Regex> = LazyLock::new(|| field_pattern("keywords"));
/// `\date{...}`
static DATE: LazyLock<Regex> = LazyLock::new(|| field_pattern("date"));
/// The `abstract` environment, spanning lines.
static ABSTRACT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\\begin\{abstract\}(.*?)\\end\{abstract\}")
        .expect("abstract pattern is a valid regex")
});

/// Metadata fields extracted from one document.
///
/// `title`, `category` and `date` keep whether the field was present at all, because
/// only declared values take part in scoring. Use [`Metadata::title_or`] and
/// [`Metadata::category_or_default`] for the display values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    /// Value of `\title{}`.
    pub title: Option<String>,
    /// Value of `\category{}`.
    pub category: Option<String>,
    /// Comma-separated `\keywords{}`, each trimmed, in declaration order. Empty segments stay.
    pub tags: Vec<String>,
    /// Value of `\date{}`.
    pub date: Option<String>,
    /// Trimmed body of the `abstract` environment, or empty.
    pub description: String,
}

impl Metadata {
    /// Extracts all fields from raw document text.
    pub fn extract(content: &str) -> Self {
        let tags = first_capture(&KEYWORDS, content)
            .map(|keywords| keywords.split(',').map(|t| t.trim().to_string()).collect())
            .unwrap_or_default();

        let description = ABSTRACT
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();

        Self {
            title: first_capture(&TITLE, content),
            category: first_capture(&CATEGORY, content),
            tags,
            date: first_capture(&DATE, content),
            description,
        }
    }

    /// Returns the declared title, falling back to the document slug.
    pub fn title_or<'a>(&'a self, slug: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(slug)
    }

    /// Returns the declared category, falling back to [`UNCATEGORIZED`].
    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED)
    }
}

/// Returns the first capture group of the first match.
fn first_capture(pattern: &Regex, content: &str) -> Option<String> {
    pattern
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
