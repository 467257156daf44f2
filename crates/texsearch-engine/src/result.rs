//! Result types.
//!
//! [`SearchResult`] serializes to the JSON shape the web front end consumes: camelCase
//! keys, optional fields omitted when absent.

use serde::Serialize;
use texsearch_document::{Document, Metadata};

use crate::score::{Score, ScoreBreakdown};

/// Kind of content a result points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    /// A tutorial document.
    Tutorial,
}

/// One matching document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Always [`ResultKind::Tutorial`] for now.
    #[serde(rename = "type")]
    pub kind: ResultKind,
    /// Declared title, or the slug.
    pub title: String,
    /// Abstract text, possibly empty.
    pub description: String,
    /// Declared category, or `Uncategorized`.
    pub category: String,
    /// Keyword tags in declaration order.
    pub tags: Vec<String>,
    /// Declared date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Document slug.
    pub slug: String,
    /// Navigable link, with a section fragment when a section matched.
    pub url: String,
    /// Relevance score, at least 1.
    pub relevance: u32,
    /// Id of the matching section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
    /// Title of the matching section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_title: Option<String>,
    /// Section label or excerpt explaining the match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_context: Option<String>,
}

impl SearchResult {
    /// Assembles a result from a scored document.
    pub(crate) fn new(slug: &str, metadata: Metadata, score: Score, url_prefix: &str) -> Self {
        let relevance = score.relevance();
        let (section_id, section_title) = score
            .section
            .map_or((None, None), |s| (Some(s.id), Some(s.title)));

        Self {
            kind: ResultKind::Tutorial,
            url: document_url(url_prefix, slug, section_id.as_deref()),
            title: metadata.title_or(slug).to_string(),
            category: metadata.category_or_default().to_string(),
            description: metadata.description,
            tags: metadata.tags,
            date: metadata.date,
            slug: slug.to_string(),
            relevance,
            section_id,
            section_title,
            match_context: score.match_context,
        }
    }
}

/// A result together with the points behind its relevance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplainedResult {
    /// The result as served.
    #[serde(flatten)]
    pub result: SearchResult,
    /// Per-rule points; `result.relevance` is the base point plus their sum.
    pub breakdown: ScoreBreakdown,
}

/// One document in the corpus listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    /// Document slug.
    pub slug: String,
    /// Declared title, or the slug.
    pub title: String,
    /// Declared category, or `Uncategorized`.
    pub category: String,
    /// Keyword tags.
    pub tags: Vec<String>,
    /// Declared date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Abstract text, possibly empty.
    pub description: String,
    /// Number of sections at any depth.
    pub sections: usize,
    /// Link to the document.
    pub url: String,
}

impl DocumentSummary {
    /// Summarizes a document.
    pub(crate) fn of(document: &Document, url_prefix: &str) -> Self {
        let metadata = document.metadata();
        let slug = document.slug.clone();
        Self {
            title: metadata.title_or(&slug).to_string(),
            category: metadata.category_or_default().to_string(),
            url: document_url(url_prefix, &slug, None),
            sections: document.sections().len(),
            tags: metadata.tags,
            date: metadata.date,
            description: metadata.description,
            slug,
        }
    }
}

/// Builds `{prefix}/{slug}`, with `#{section_id}` appended when present.
pub fn document_url(prefix: &str, slug: &str, section_id: Option<&str>) -> String {
    match section_id {
        Some(id) => format!("{prefix}/{slug}#{id}"),
        None => format!("{prefix}/{slug}"),
    }
}
