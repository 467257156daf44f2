//! Syntax highlighting of whole sources.

use std::fmt;

use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::{SyntaxReference, SyntaxSet},
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra},
};

use crate::style::RESET;

/// Source languages the CLI prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// Tutorial documents.
    Latex,
    /// texsearch configuration.
    Toml,
}

impl Language {
    /// File extension syntect knows the language by.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Latex => "tex",
            Self::Toml => "toml",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latex => f.write_str("LaTeX"),
            Self::Toml => f.write_str("TOML"),
        }
    }
}

/// Colors sources for a 24-bit terminal.
///
/// Loading the syntax definitions is not free; build one per command and reuse it.
pub struct Highlighter {
    /// Syntax definitions, including LaTeX and TOML.
    syntaxes: SyntaxSet,
    /// Lazily decoded themes.
    themes: EmbeddedLazyThemeSet,
    /// Theme used for every language.
    theme: EmbeddedThemeName,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a highlighter using the Dracula theme.
    pub fn new() -> Self {
        Self {
            syntaxes: extra_newlines(),
            themes: extra(),
            theme: EmbeddedThemeName::Dracula,
        }
    }

    /// Renders `content` as `language`, ending with a style reset.
    pub fn render(&self, content: &str, language: Language) -> String {
        let syntax = self.syntax_for(language);
        let mut lines = HighlightLines::new(syntax, self.themes.get(self.theme));

        let mut output = String::with_capacity(content.len() * 2);
        for line in LinesWithEndings::from(content) {
            // A line syntect chokes on is printed as-is rather than dropped.
            let regions: Vec<(Style, &str)> = lines
                .highlight_line(line, &self.syntaxes)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            output.push_str(&as_24_bit_terminal_escaped(&regions, false));
        }
        output.push_str(RESET);
        output
    }

    /// Looks up the syntax for `language`, falling back to plain text.
    fn syntax_for(&self, language: Language) -> &SyntaxReference {
        self.syntaxes
            .find_syntax_by_extension(language.extension())
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text())
    }
}
