//! Heading identifiers.
//!
//! Two schemes coexist and are deliberately kept apart:
//!
//! - [`section_id`] builds the fragment used in search result URLs: the title lowercased,
//!   with each whitespace run replaced by one hyphen. Punctuation is kept.
//! - [`anchor_slug`] builds the ids the rendered table of contents assigns to headings:
//!   lowercase, characters outside `[A-Za-z0-9_]`, whitespace and `-` removed, whitespace
//!   and hyphen runs collapsed to one hyphen, leading and trailing hyphens trimmed.
//!
//! For titles made of letters, digits and single spaces both agree. For anything with
//! punctuation they differ, and a result link may not land on its heading. Use
//! [`anchors_agree`] to detect those titles.

/// Derives the result-URL fragment for a section title.
pub fn section_id(title: &str) -> String {
    let mut id = String::with_capacity(title.len());
    let mut in_whitespace = false;

    for c in title.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                id.push('-');
            }
            in_whitespace = true;
        } else {
            id.push(c);
            in_whitespace = false;
        }
    }

    id
}

/// Derives the table-of-contents anchor for a heading.
pub fn anchor_slug(heading: &str) -> String {
    let slug: String = heading
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                Some(c.to_ascii_lowercase())
            } else if c.is_whitespace() || c == '-' {
                Some('-')
            } else {
                None
            }
        })
        .collect();

    // Collapse consecutive hyphens
    let mut result = String::with_capacity(slug.len());
    let mut prev_hyphen = false;
    for c in slug.chars() {
        if c == '-' {
            if !prev_hyphen {
                result.push('-');
            }
            prev_hyphen = true;
        } else {
            result.push(c);
            prev_hyphen = false;
        }
    }

    result.trim_matches('-').to_string()
}

/// Returns true when a title produces the same id under both schemes.
pub fn anchors_agree(title: &str) -> bool {
    section_id(title) == anchor_slug(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_id_basic() {
        assert_eq!(section_id("Overview"), "overview");
        assert_eq!(section_id("Error Handling Patterns"), "error-handling-patterns");
    }

    #[test]
    fn test_section_id_collapses_whitespace_runs() {
        assert_eq!(section_id("Breadth \t First\n Search"), "breadth-first-search");
    }

    #[test]
    fn test_section_id_keeps_punctuation() {
        assert_eq!(section_id("Big-O: A Primer!"), "big-o:-a-primer!");
    }

    #[test]
    fn test_section_id_keeps_edge_whitespace() {
        assert_eq!(section_id(" Padded "), "-padded-");
    }

    #[test]
    fn test_section_id_lowercases_unicode() {
        assert_eq!(section_id("Größe Ändern"), "größe-ändern");
    }

    #[test]
    fn test_section_id_uses_word_final_sigma() {
        assert_eq!(section_id("ΟΔΟΣ Χάρτης"), "οδος-χάρτης");
    }

    #[test]
    fn test_anchor_slug_strips_punctuation() {
        assert_eq!(anchor_slug("Big-O: A Primer!"), "big-o-a-primer");
    }

    #[test]
    fn test_anchor_slug_collapses_hyphens() {
        assert_eq!(anchor_slug("Hello  --  World"), "hello-world");
    }

    #[test]
    fn test_anchor_slug_trims_edges() {
        assert_eq!(anchor_slug("  Hello World  "), "hello-world");
    }

    #[test]
    fn test_anchor_slug_keeps_underscores() {
        assert_eq!(anchor_slug("my_function_name"), "my_function_name");
    }

    #[test]
    fn test_anchor_slug_drops_non_ascii() {
        assert_eq!(anchor_slug("Héllo Wörld"), "hllo-wrld");
    }

    #[test]
    fn test_anchor_slug_all_punctuation_is_empty() {
        assert_eq!(anchor_slug("!@#$%^&*()"), "");
    }

    #[test]
    fn test_anchors_agree() {
        assert!(anchors_agree("Dynamic Programming"));
        assert!(!anchors_agree("Chapter 1: Introduction"));
        assert!(!anchors_agree("Big-O"));
    }
}
