//! Relevance scoring.
//!
//! Scores are additive integer points. Every document that reaches the scorer has
//! already passed the content gate, so it starts from [`BASE_POINTS`]; each field or
//! section where the query occurs adds its bonus on top:
//!
//! | Where the query occurs          | Points                 |
//! |---------------------------------|------------------------|
//! | declared title                  | [`TITLE_POINTS`]       |
//! | declared category               | [`CATEGORY_POINTS`]    |
//! | any tag                         | [`TAG_POINTS`]         |
//! | description                     | [`DESCRIPTION_POINTS`] |
//! | a section title (first only)    | [`SECTION_TITLE_POINTS`] |
//! | each section body scanned       | [`SECTION_BODY_POINTS`] |
//!
//! Sections are scanned in document order. The first section whose title contains the
//! query ends the scan and becomes the match location, replacing any earlier body
//! match; body points already earned stay. Without a title match, the first section
//! whose body contains the query is the location and supplies an excerpt.

use serde::Serialize;
use texsearch_document::{Metadata, Section};

use crate::{NormalizedQuery, snippet::excerpt};

/// Points for any document that contains the query.
pub const BASE_POINTS: u32 = 1;
/// Bonus when the declared title contains the query.
pub const TITLE_POINTS: u32 = 10;
/// Bonus when the declared category contains the query.
pub const CATEGORY_POINTS: u32 = 5;
/// Bonus when at least one tag contains the query.
pub const TAG_POINTS: u32 = 8;
/// Bonus when the description contains the query.
pub const DESCRIPTION_POINTS: u32 = 5;
/// Bonus for the first section whose title contains the query.
pub const SECTION_TITLE_POINTS: u32 = 15;
/// Bonus for every scanned section whose body contains the query.
pub const SECTION_BODY_POINTS: u32 = 2;

/// Points contributed by each rule, excluding the base point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Title bonus.
    pub title: u32,
    /// Category bonus.
    pub category: u32,
    /// Tag bonus.
    pub tags: u32,
    /// Description bonus.
    pub description: u32,
    /// Section-title bonus.
    pub section_title: u32,
    /// Accumulated section-body bonuses.
    pub section_body: u32,
}

impl ScoreBreakdown {
    /// Sum of all bonuses.
    pub fn bonus(&self) -> u32 {
        self.title
            + self.category
            + self.tags
            + self.description
            + self.section_title
            + self.section_body
    }

    /// Final relevance: the base point plus all bonuses.
    pub fn relevance(&self) -> u32 {
        BASE_POINTS + self.bonus()
    }
}

/// The section chosen as the match location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMatch {
    /// Section id used as the URL fragment.
    pub id: String,
    /// Section title, verbatim.
    pub title: String,
}

impl SectionMatch {
    /// Captures the location of a section.
    fn of(section: &Section<'_>) -> Self {
        Self {
            id: section.id.clone(),
            title: section.title.to_string(),
        }
    }
}

/// Outcome of scoring one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    /// Points per rule.
    pub breakdown: ScoreBreakdown,
    /// Matching section, if any section title or body contains the query.
    pub section: Option<SectionMatch>,
    /// `Section: {title}` for a title match, otherwise an excerpt.
    pub match_context: Option<String>,
}

impl Score {
    /// Final relevance.
    pub fn relevance(&self) -> u32 {
        self.breakdown.relevance()
    }
}

/// Scores a document that is already known to contain the query.
///
/// `content` is the full document text and is only used for the fallback excerpt when
/// no section matches.
pub fn score_document(
    query: &NormalizedQuery,
    content: &str,
    metadata: &Metadata,
    sections: &[Section<'_>],
    context_radius: usize,
) -> Score {
    let mut breakdown = ScoreBreakdown::default();

    if metadata.title.as_deref().is_some_and(|t| query.is_in(t)) {
        breakdown.title = TITLE_POINTS;
    }
    if metadata.category.as_deref().is_some_and(|c| query.is_in(c)) {
        breakdown.category = CATEGORY_POINTS;
    }
    if metadata.tags.iter().any(|tag| query.is_in(tag)) {
        breakdown.tags = TAG_POINTS;
    }
    if query.is_in(&metadata.description) {
        breakdown.description = DESCRIPTION_POINTS;
    }

    let mut section = None;
    let mut match_context = None;

    for candidate in sections {
        if query.is_in(candidate.title) {
            breakdown.section_title = SECTION_TITLE_POINTS;
            match_context = Some(format!("Section: {}", candidate.title));
            section = Some(SectionMatch::of(candidate));
            break;
        }

        if query.is_in(candidate.body) {
            breakdown.section_body += SECTION_BODY_POINTS;
            if section.is_none() {
                section = Some(SectionMatch::of(candidate));
                match_context = excerpt(candidate.body, query, context_radius);
            }
        }
    }

    if section.is_none() {
        match_context = excerpt(content, query, context_radius);
    }

    Score {
        breakdown,
        section,
        match_context,
    }
}
