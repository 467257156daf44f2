//! Search orchestration.
//!
//! Every call re-scans the whole corpus: list the documents, read each one, drop those
//! whose text does not contain the query, then extract, segment and score the rest.
//! Failures degrade to fewer results: a missing directory yields nothing, an unreadable
//! document is skipped. Nothing is cached between calls, so a [`Searcher`] can be cloned
//! freely and used from several threads at once.

use std::path::{Path, PathBuf};

use texsearch_config::Config;
use texsearch_document::{Document, Metadata};
use tracing::{debug, info, warn};

use crate::{
    DocumentStore, EngineError, NormalizedQuery,
    result::{DocumentSummary, ExplainedResult, SearchResult},
    score::score_document,
};

/// Runs queries against a document store.
#[derive(Debug, Clone)]
pub struct Searcher {
    /// Where documents are read from.
    store: DocumentStore,
    /// Prefix for result URLs.
    url_prefix: String,
    /// Characters either side of a match in excerpts.
    context_radius: usize,
    /// Result cap; `None` for unlimited.
    limit: Option<usize>,
}

impl Searcher {
    /// Creates a searcher over `store` with default settings.
    pub fn new(store: DocumentStore, url_prefix: impl Into<String>) -> Self {
        Self {
            store,
            url_prefix: url_prefix.into(),
            context_radius: texsearch_config::DEFAULT_CONTEXT_RADIUS,
            limit: None,
        }
    }

    /// Creates a searcher from the merged configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            DocumentStore::from_corpus(&config.corpus),
            config.corpus.url_prefix.clone(),
        )
        .with_context_radius(config.search.context_radius)
        .with_limit(config.search.max_results())
    }

    /// Sets the excerpt radius in characters.
    pub fn with_context_radius(mut self, radius: usize) -> Self {
        self.context_radius = radius;
        self
    }

    /// Caps the number of results. `Some(0)` counts as unlimited.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit.filter(|&n| n > 0);
        self
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// Returns the result cap.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Searches the corpus, returning results by descending relevance.
    ///
    /// An empty or whitespace-only query returns no results without touching the file
    /// system. Documents with equal relevance keep their file-name order.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        self.search_explained(query)
            .into_iter()
            .map(|explained| explained.result)
            .collect()
    }

    /// Like [`Searcher::search`], keeping the per-rule points of every result.
    pub fn search_explained(&self, query: &str) -> Vec<ExplainedResult> {
        let Some(query) = NormalizedQuery::new(query) else {
            return Vec::new();
        };

        let files = self.candidates();
        let mut results: Vec<ExplainedResult> = files
            .iter()
            .filter_map(|path| match self.score_file(path, &query) {
                Ok(result) => result,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable document");
                    None
                }
            })
            .collect();

        // Stable, so ties stay in scan order
        results.sort_by(|a, b| b.result.relevance.cmp(&a.result.relevance));

        let matched = results.len();
        if let Some(limit) = self.limit {
            results.truncate(limit);
        }

        info!(
            query = %query,
            scanned = files.len(),
            matched,
            returned = results.len(),
            "search complete"
        );
        results
    }

    /// Summarizes every readable document, in file-name order.
    pub fn list_documents(&self) -> Vec<DocumentSummary> {
        self.candidates()
            .iter()
            .filter_map(|path| match self.store.read(path) {
                Ok(document) => Some(DocumentSummary::of(&document, &self.url_prefix)),
                Err(e) => {
                    warn!(error = %e, "skipping unreadable document");
                    None
                }
            })
            .collect()
    }

    /// Lists candidate files, treating a listing failure as an empty corpus.
    fn candidates(&self) -> Vec<PathBuf> {
        match self.store.list() {
            Ok(files) => {
                debug!(dir = %self.store.dir().display(), count = files.len(), "listed documents");
                files
            }
            Err(e @ EngineError::MissingDirectory { .. }) => {
                warn!(error = %e, "no documents to search");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "failed to list documents");
                Vec::new()
            }
        }
    }

    /// Reads and scores one file; `Ok(None)` when it does not contain the query.
    fn score_file(
        &self,
        path: &Path,
        query: &NormalizedQuery,
    ) -> Result<Option<ExplainedResult>, EngineError> {
        let document = self.store.read(path)?;
        Ok(self.score(&document, query))
    }

    /// Scores a document already in memory.
    fn score(&self, document: &Document, query: &NormalizedQuery) -> Option<ExplainedResult> {
        if !query.is_in(&document.content) {
            debug!(slug = %document.slug, "no match");
            return None;
        }

        let metadata = Metadata::extract(&document.content);
        let sections = document.sections();
        let score = score_document(
            query,
            &document.content,
            &metadata,
            &sections,
            self.context_radius,
        );
        let breakdown = score.breakdown;

        debug!(slug = %document.slug, relevance = score.relevance(), "matched");

        Some(ExplainedResult {
            result: SearchResult::new(&document.slug, metadata, score, &self.url_prefix),
            breakdown,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const GRAPH_SEARCH: &str = "\\title{Graph Search}\\category{Algorithms}\\keywords{BFS, DFS}\
                                \\section{Overview}BFS explores graphs breadth-first.\\end{document}";

    struct TestCorpus {
        temp: TempDir,
    }

    impl TestCorpus {
        fn new() -> Self {
            Self {
                temp: TempDir::new().unwrap(),
            }
        }

        fn add(&self, name: &str, content: &str) -> &Self {
            fs::write(self.temp.path().join(name), content).unwrap();
            self
        }

        fn searcher(&self) -> Searcher {
            Searcher::new(DocumentStore::new(self.temp.path(), "tex"), "/tutorials")
        }
    }

    #[test]
    fn empty_query_returns_nothing_without_io() {
        // An empty needle is contained in every text, so any scan would match all of these
        let corpus = TestCorpus::new();
        corpus
            .add("graph-search.tex", GRAPH_SEARCH)
            .add("heaps.tex", "\\title{Heaps}\\section{Intro}priority queues")
            .add("blank.tex", "");
        let searcher = corpus.searcher();

        assert!(searcher.search("").is_empty());
        assert!(searcher.search("  ").is_empty());
        assert!(searcher.search_explained(" \t\n").is_empty());
        assert_eq!(searcher.search("queues").len(), 1);
    }

    #[test]
    fn content_gate_precedes_metadata_fallbacks() {
        // The title falls back to the slug, but the text never mentions the query
        let corpus = TestCorpus::new();
        let path = corpus.temp.path().join("heap.tex");
        fs::write(&path, "\\section{Intro}priority queues").unwrap();
        let searcher = corpus.searcher();

        let document = searcher.store().read(&path).unwrap();
        let query = NormalizedQuery::new("heap").unwrap();
        assert!(searcher.score(&document, &query).is_none());
        assert!(searcher.search("heap").is_empty());
        assert_eq!(searcher.list_documents()[0].title, "heap");
    }

    #[test]
    fn dot_prefixed_documents_are_searched() {
        let corpus = TestCorpus::new();
        corpus.add(".notes.tex", "heap");

        let results = corpus.searcher().search("heap");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].slug, ".notes");
    }

    #[test]
    fn body_match_always_has_context() {
        let corpus = TestCorpus::new();
        corpus.add("greek.tex", "\\section{Intro}Η ΟΔΟΣ είναι");

        let results = corpus.searcher().search("ΟΔΟΣ");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].section_id.as_deref(), Some("intro"));
        assert_eq!(
            results[0].match_context.as_deref(),
            Some("...Η ΟΔΟΣ είναι...")
        );
    }

    #[test]
    fn missing_directory_yields_empty() {
        let corpus = TestCorpus::new();
        let searcher = Searcher::new(
            DocumentStore::new(corpus.temp.path().join("tutorials"), "tex"),
            "/tutorials",
        );
        assert!(searcher.search("anything").is_empty());
        assert!(searcher.list_documents().is_empty());
    }

    #[test]
    fn non_matching_documents_are_excluded() {
        let corpus = TestCorpus::new();
        corpus
            .add("heaps.tex", "\\title{Heaps}\\section{Intro}priority queues")
            .add("tries.tex", "\\title{Tries}\\section{Intro}prefix trees");

        let results = corpus.searcher().search("prefix");
        let slugs: Vec<&str> = results.iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs, vec!["tries"]);
    }

    #[test]
    fn graph_search_round_trip() {
        let corpus = TestCorpus::new();
        corpus.add("graph-search.tex", GRAPH_SEARCH);

        let results = corpus.searcher().search("bfs");
        assert_eq!(results.len(), 1);

        let result = &results[0];
        assert_eq!(result.title, "Graph Search");
        assert_eq!(result.category, "Algorithms");
        assert_eq!(result.tags, vec!["BFS", "DFS"]);
        assert_eq!(result.relevance, 1 + 8 + 2);
        assert_eq!(result.section_id.as_deref(), Some("overview"));
        assert_eq!(result.section_title.as_deref(), Some("Overview"));
        assert_eq!(result.url, "/tutorials/graph-search#overview");
        assert!(result.date.is_none());
        let context = result.match_context.as_deref().unwrap();
        assert!(context.starts_with("...") && context.ends_with("..."));
        assert!(context.contains("BFS explores"));
    }

    #[test]
    fn title_match_outranks_body_match() {
        let corpus = TestCorpus::new();
        corpus
            .add("a-body.tex", "\\title{Sorting}\\section{Notes}uses a heap internally")
            .add("b-title.tex", "\\title{Heap Basics}\\section{Notes}intro");

        let results = corpus.searcher().search("heap");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].slug, "b-title");
        assert!(results[0].relevance > results[1].relevance);
    }

    #[test]
    fn section_title_match_sets_context() {
        let corpus = TestCorpus::new();
        corpus.add(
            "dp.tex",
            "\\title{DP}\\section{Intro}memo\\subsection{Memoization Tables}fill",
        );

        let results = corpus.searcher().search("memo");
        let result = &results[0];
        assert_eq!(result.section_title.as_deref(), Some("Memoization Tables"));
        assert_eq!(result.section_id.as_deref(), Some("memoization-tables"));
        assert_eq!(
            result.match_context.as_deref(),
            Some("Section: Memoization Tables")
        );
        assert_eq!(result.url, "/tutorials/dp#memoization-tables");
    }

    #[test]
    fn results_sorted_and_at_least_one() {
        let corpus = TestCorpus::new();
        corpus
            .add("one.tex", "tree mentioned in passing")
            .add("two.tex", "\\title{Tree}\\keywords{tree}\\section{Tree}tree")
            .add("three.tex", "\\keywords{trees}\\section{A}tree");

        let results = corpus.searcher().search("TREE");
        assert_eq!(results.len(), 3);
        for pair in results.windows(2) {
            assert!(pair[0].relevance >= pair[1].relevance);
        }
        assert!(results.iter().all(|r| r.relevance >= 1));
    }

    #[test]
    fn ties_keep_file_name_order() {
        let corpus = TestCorpus::new();
        corpus
            .add("c.tex", "graph")
            .add("a.tex", "graph")
            .add("b.tex", "graph");

        let slugs: Vec<String> = corpus
            .searcher()
            .search("graph")
            .into_iter()
            .map(|r| r.slug)
            .collect();
        assert_eq!(slugs, vec!["a", "b", "c"]);
    }

    #[test]
    fn unreadable_file_is_skipped() {
        let corpus = TestCorpus::new();
        corpus.add("good.tex", "stack and queue");
        fs::write(corpus.temp.path().join("bad.tex"), [0xff, 0xfe, b's', b't']).unwrap();

        let results = corpus.searcher().search("stack");
        let slugs: Vec<&str> = results.iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs, vec!["good"]);
    }

    #[test]
    fn limit_truncates_after_sorting() {
        let corpus = TestCorpus::new();
        corpus
            .add("a.tex", "heap")
            .add("b.tex", "\\title{Heap}")
            .add("c.tex", "\\keywords{heap}");

        let results = corpus.searcher().with_limit(Some(2)).search("heap");
        let slugs: Vec<&str> = results.iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "c"]);
    }

    #[test]
    fn zero_limit_is_unlimited() {
        let corpus = TestCorpus::new();
        corpus.add("a.tex", "heap").add("b.tex", "heap");
        let searcher = corpus.searcher().with_limit(Some(0));
        assert_eq!(searcher.limit(), None);
        assert_eq!(searcher.search("heap").len(), 2);
    }

    #[test]
    fn explained_relevance_matches_breakdown() {
        let corpus = TestCorpus::new();
        corpus.add("graph-search.tex", GRAPH_SEARCH);

        let explained = corpus.searcher().search_explained("bfs");
        let first = &explained[0];
        assert_eq!(first.breakdown.tags, 8);
        assert_eq!(first.breakdown.section_body, 2);
        assert_eq!(first.result.relevance, 1 + first.breakdown.bonus());
    }

    #[test]
    fn context_radius_is_configurable() {
        let corpus = TestCorpus::new();
        corpus.add("long.tex", &format!("\\section{{S}}{}KEY{}", "x".repeat(30), "y".repeat(30)));

        let results = corpus.searcher().with_context_radius(5).search("key");
        assert_eq!(results[0].match_context.as_deref(), Some("...xxxxxKEYyyyyy..."));
    }

    #[test]
    fn from_config_applies_settings() {
        let corpus = TestCorpus::new();
        corpus.add("a.tex", "heap").add("b.tex", "heap");

        let mut config = Config::with_base(corpus.temp.path());
        config.corpus.path = corpus.temp.path().to_path_buf();
        config.corpus.url_prefix = "/docs".to_string();
        config.search.limit = 1;

        let results = Searcher::from_config(&config).search("heap");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url, "/docs/a");
    }

    #[test]
    fn list_documents_summarizes_all() {
        let corpus = TestCorpus::new();
        corpus
            .add("graph-search.tex", GRAPH_SEARCH)
            .add("untitled.tex", "plain text")
            .add("ignored.md", "# not a document");

        let docs = corpus.searcher().list_documents();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].slug, "graph-search");
        assert_eq!(docs[0].title, "Graph Search");
        assert_eq!(docs[0].sections, 1);
        assert_eq!(docs[0].url, "/tutorials/graph-search");
        assert_eq!(docs[1].title, "untitled");
        assert_eq!(docs[1].category, "Uncategorized");
    }
}
