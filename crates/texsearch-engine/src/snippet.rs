//! Match excerpts.
//!
//! An excerpt is the text around the first occurrence of the query: up to `radius`
//! characters before and after it, with markup commands replaced by spaces, trimmed, and
//! wrapped in `...` on both sides.

use std::ops::Range;

use texsearch_document::strip_markup;

use crate::NormalizedQuery;

/// Wraps an excerpt body.
const ELLIPSIS: &str = "...";

/// Finds the first case-insensitive occurrence of `query` in `text`.
///
/// Returns the byte range of the occurrence in the original text. The text is folded with
/// [`str::to_lowercase`], the same fold [`NormalizedQuery::is_in`] uses, so context-dependent
/// mappings such as a word-final `Σ` agree with the match test. Lowercasing may change the
/// byte length of a character, so offsets in the folded text are mapped back through the
/// character that produced them.
pub fn find_ignore_case(text: &str, query: &NormalizedQuery) -> Option<Range<usize>> {
    let needle = query.as_str();
    let folded = text.to_lowercase();

    // Original byte span of the character behind each folded byte
    let mut origin: Vec<Range<usize>> = Vec::with_capacity(folded.len());
    let mut lowered = folded.chars();
    for (start, c) in text.char_indices() {
        let span = start..start + c.len_utf8();
        // A character folds to the same number of characters with or without context
        for lower in lowered.by_ref().take(c.to_lowercase().count()) {
            origin.extend((0..lower.len_utf8()).map(|_| span.clone()));
        }
    }

    let at = folded.find(needle)?;
    let first = origin.get(at)?;
    let last = origin.get(at + needle.len() - 1)?;
    Some(first.start..last.end)
}

/// Builds the excerpt around the first occurrence of `query` in `text`.
///
/// Returns `None` when `text` does not contain the query.
pub fn excerpt(text: &str, query: &NormalizedQuery, radius: usize) -> Option<String> {
    let found = find_ignore_case(text, query)?;

    let start = text[..found.start]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map_or(found.start, |(i, _)| i);

    let end = text[found.end..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(i, _)| found.end + i);

    let cleaned = strip_markup(&text[start..end]);
    Some(format!("{ELLIPSIS}{}{ELLIPSIS}", cleaned.trim()))
}
