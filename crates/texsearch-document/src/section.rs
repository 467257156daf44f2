//! Section segmentation.
//!
//! A section starts at a heading command (`\section{}`, `\subsection{}` or
//! `\subsubsection{}`) and its body runs up to the next heading command at any of those
//! levels, a `\end{document}` marker, or the end of the text, whichever comes first.
//! Bodies therefore never overlap; text before the first heading belongs to no section.

use std::{fmt, ops::Range, sync::LazyLock};

use regex::Regex;

use crate::slug::section_id;

/// A heading command with a non-empty title.
static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(section|subsection|subsubsection)\{([^}]+)\}")
        .expect("heading pattern is a valid regex")
});

/// Anything that terminates a section body.
static BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(?:section|subsection|subsubsection)\{|\\end\{document\}")
        .expect("boundary pattern is a valid regex")
});

/// Heading depth of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionLevel {
    /// `\section{}`
    Section,
    /// `\subsection{}`
    Subsection,
    /// `\subsubsection{}`
    Subsubsection,
}

impl SectionLevel {
    /// Maps a heading command name to its level.
    fn from_command(command: &str) -> Option<Self> {
        match command {
            "section" => Some(Self::Section),
            "subsection" => Some(Self::Subsection),
            "subsubsection" => Some(Self::Subsubsection),
            _ => None,
        }
    }

    /// Nesting depth, starting at 1 for top-level sections.
    pub fn depth(self) -> usize {
        match self {
            Self::Section => 1,
            Self::Subsection => 2,
            Self::Subsubsection => 3,
        }
    }

    /// The command name that introduces this level.
    pub fn command(self) -> &'static str {
        match self {
            Self::Section => "section",
            Self::Subsection => "subsection",
            Self::Subsubsection => "subsubsection",
        }
    }
}

impl fmt::Display for SectionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// A titled, contiguous span of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    /// Heading depth.
    pub level: SectionLevel,
    /// Heading text, verbatim.
    pub title: &'a str,
    /// Identifier used as the result URL fragment.
    pub id: String,
    /// Text following the heading up to the next boundary.
    pub body: &'a str,
    /// Byte range of `body` within the document.
    pub span: Range<usize>,
}

/// Splits a document into its ordered sections.
pub fn segment_sections(content: &str) -> Vec<Section<'_>> {
    let mut sections = Vec::new();
    let mut pos = 0;

    while let Some(caps) = HEADING.captures_at(content, pos) {
        let (Some(heading), Some(command), Some(title)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            break;
        };
        let Some(level) = SectionLevel::from_command(command.as_str()) else {
            break;
        };

        let start = heading.end();
        let end = BOUNDARY
            .find_at(content, start)
            .map_or(content.len(), |m| m.start());

        sections.push(Section {
            level,
            title: title.as_str(),
            id: section_id(title.as_str()),
            body: &content[start..end],
            span: start..end,
        });

        pos = end;
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_levels() {
        let content = "\\section{Intro}A\\subsection{Setup}B\\subsubsection{Detail}C";
        let sections = segment_sections(content);

        let summary: Vec<(SectionLevel, &str, &str)> = sections
            .iter()
            .map(|s| (s.level, s.title, s.body))
            .collect();
        assert_eq!(
            summary,
            vec![
                (SectionLevel::Section, "Intro", "A"),
                (SectionLevel::Subsection, "Setup", "B"),
                (SectionLevel::Subsubsection, "Detail", "C"),
            ]
        );
    }

    #[test]
    fn test_preamble_not_assigned() {
        let content = "\\title{T}\nPreamble text.\n\\section{First}\nBody.\n";
        let sections = segment_sections(content);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].body, "\nBody.\n");
        assert!(!sections[0].body.contains("Preamble"));
    }

    #[test]
    fn test_end_document_terminates_body() {
        let content = "\\section{Last}Final words.\\end{document}\nTrailing junk";
        let sections = segment_sections(content);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].body, "Final words.");
    }

    #[test]
    fn test_heading_after_end_document_still_found() {
        let content = "\\section{A}x\\end{document}\\section{B}y";
        let titles: Vec<&str> = segment_sections(content).iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_spans_are_contiguous() {
        let content = "pre\\section{One}first\\subsection{Two}second\\section{Three}third";
        let sections = segment_sections(content);
        assert_eq!(sections.len(), 3);
        for pair in sections.windows(2) {
            let heading = &content[pair[0].span.end..pair[1].span.start];
            assert!(heading.starts_with('\\'), "gap should be a heading: {heading}");
        }
        for section in &sections {
            assert_eq!(&content[section.span.clone()], section.body);
        }
    }

    #[test]
    fn test_empty_title_heading_ends_body_but_starts_nothing() {
        let content = "\\section{Kept}body\\section{}orphan\\section{Next}tail";
        let sections = segment_sections(content);
        let titles: Vec<&str> = sections.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Kept", "Next"]);
        assert_eq!(sections[0].body, "body");
    }

    #[test]
    fn test_starred_heading_is_not_a_section() {
        let content = "\\section*{Unnumbered}text";
        assert!(segment_sections(content).is_empty());
    }

    #[test]
    fn test_section_ids() {
        let content = "\\section{Breadth First  Search}x";
        assert_eq!(segment_sections(content)[0].id, "breadth-first-search");
    }

    #[test]
    fn test_no_headings() {
        assert!(segment_sections("Just prose.").is_empty());
    }

    #[test]
    fn test_level_depth_and_display() {
        assert_eq!(SectionLevel::Section.depth(), 1);
        assert_eq!(SectionLevel::Subsubsection.depth(), 3);
        assert_eq!(SectionLevel::Subsection.to_string(), "subsection");
    }
}
