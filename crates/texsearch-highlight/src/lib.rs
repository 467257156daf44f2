//! Terminal rendering for texsearch.
//!
//! Two concerns live here. [`Highlighter`] colors LaTeX sources (`inspect --source`) and
//! TOML settings (`config`, `init`). The [`style`] helpers wrap short fragments of CLI
//! output in ANSI styles: headings, dimmed notes, warnings, and the marker placed around
//! the query inside a match context.

#![warn(missing_docs)]

mod source;
pub mod style;

pub use source::{Highlighter, Language};
pub use style::{Tone, dim, header, indent, mark, paint, rule, subheader, warning};
