//! ANSI styling for short output fragments.

use std::ops::Range;

/// Resets all styling.
pub(crate) const RESET: &str = "\x1b[0m";

/// The roles a fragment of CLI output can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Result titles and file names: bold cyan.
    Header,
    /// Block labels such as `Metadata:`: bold.
    Subheader,
    /// Secondary facts and notes: dim.
    Dim,
    /// Problems worth a look: yellow.
    Warning,
    /// The query inside a match context: bold yellow.
    Match,
}

impl Tone {
    /// Escape sequence opening this tone.
    fn open(self) -> &'static str {
        match self {
            Self::Header => "\x1b[1m\x1b[36m",
            Self::Subheader => "\x1b[1m",
            Self::Dim => "\x1b[2m",
            Self::Warning => "\x1b[33m",
            Self::Match => "\x1b[1m\x1b[33m",
        }
    }
}

/// Wraps `text` in `tone`.
pub fn paint(tone: Tone, text: &str) -> String {
    format!("{}{text}{RESET}", tone.open())
}

/// Paints a header.
pub fn header(text: &str) -> String {
    paint(Tone::Header, text)
}

/// Paints a subheader.
pub fn subheader(text: &str) -> String {
    paint(Tone::Subheader, text)
}

/// Paints secondary text.
pub fn dim(text: &str) -> String {
    paint(Tone::Dim, text)
}

/// Paints a warning.
pub fn warning(text: &str) -> String {
    paint(Tone::Warning, text)
}

/// Returns `text` with the byte range `matched` painted as a match.
///
/// An out-of-bounds or non-boundary range leaves the text unstyled.
pub fn mark(text: &str, matched: Range<usize>) -> String {
    let (Some(before), Some(hit), Some(after)) = (
        text.get(..matched.start),
        text.get(matched.clone()),
        text.get(matched.end..),
    ) else {
        return text.to_string();
    };
    format!("{before}{}{after}", paint(Tone::Match, hit))
}

/// A dimmed horizontal rule.
pub fn rule(width: usize) -> String {
    dim(&"─".repeat(width))
}

/// Indents every line of `content` by `spaces`.
pub fn indent(content: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    content
        .lines()
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_wraps_and_resets() {
        assert_eq!(header("Graph Search"), "\x1b[1m\x1b[36mGraph Search\x1b[0m");
        assert_eq!(dim("faint"), "\x1b[2mfaint\x1b[0m");
    }

    #[test]
    fn test_mark() {
        let marked = mark("use BFS here", 4..7);
        assert_eq!(marked, "use \x1b[1m\x1b[33mBFS\x1b[0m here");
    }

    #[test]
    fn test_mark_bad_range_is_unstyled() {
        assert_eq!(mark("short", 3..20), "short");
        assert_eq!(mark("héllo", 2..3), "héllo");
    }

    #[test]
    fn test_rule_width_counts_chars() {
        let r = rule(4);
        assert_eq!(r.trim_start_matches("\x1b[2m").trim_end_matches(RESET), "────");
    }

    #[test]
    fn test_indent() {
        assert_eq!(indent("a\nb", 2), "  a\n  b");
    }
}
