//! Query normalization.

use std::fmt;

/// A trimmed, lowercased, non-empty query string.
///
/// Every containment check in the engine compares this against lowercased text, so
/// matching is case-insensitive and exact otherwise: no tokenization, stemming or
/// fuzziness.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedQuery(String);

impl NormalizedQuery {
    /// Normalizes a raw query, returning `None` when nothing is left to search for.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_lowercase()))
    }

    /// Returns the normalized text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if `text` contains the query, ignoring case.
    pub fn is_in(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.0)
    }
}

impl fmt::Display for NormalizedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_are_rejected() {
        assert!(NormalizedQuery::new("").is_none());
        assert!(NormalizedQuery::new(" \t\n ").is_none());
    }

    #[test]
    fn trims_and_lowercases() {
        let query = NormalizedQuery::new("  Binary Search ").unwrap();
        assert_eq!(query.as_str(), "binary search");
    }

    #[test]
    fn inner_whitespace_is_kept() {
        let query = NormalizedQuery::new("a  b").unwrap();
        assert_eq!(query.as_str(), "a  b");
        assert!(!query.is_in("a b"));
    }

    #[test]
    fn containment_ignores_case() {
        let query = NormalizedQuery::new("BFS").unwrap();
        assert!(query.is_in("Use bfs here"));
        assert!(query.is_in("BFS"));
        assert!(!query.is_in("DFS"));
    }
}
