//! Full-scan search over a directory of LaTeX tutorials.
//!
//! There is no index. Each query lists the document directory, reads every document,
//! skips those that do not contain the query, and scores the rest with a fixed additive
//! point scheme over their metadata fields and sections. Results come back sorted by
//! descending relevance.
//!
//! # Example
//!
//! ```no_run
//! use texsearch_engine::{DocumentStore, Searcher};
//!
//! let searcher = Searcher::new(DocumentStore::new("tutorials", "tex"), "/tutorials");
//! for result in searcher.search("breadth first") {
//!     println!("{} {} {}", result.relevance, result.title, result.url);
//! }
//! ```

#![warn(missing_docs)]

mod error;
mod query;
mod result;
mod score;
mod search;
mod snippet;
mod store;

pub use error::EngineError;
pub use query::NormalizedQuery;
pub use result::{DocumentSummary, ExplainedResult, ResultKind, SearchResult, document_url};
pub use score::{
    BASE_POINTS, CATEGORY_POINTS, DESCRIPTION_POINTS, SECTION_BODY_POINTS, SECTION_TITLE_POINTS,
    Score, ScoreBreakdown, SectionMatch, TAG_POINTS, TITLE_POINTS, score_document,
};
pub use search::Searcher;
pub use snippet::{excerpt, find_ignore_case};
pub use store::DocumentStore;
