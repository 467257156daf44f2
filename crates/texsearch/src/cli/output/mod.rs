//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use serde::Serialize;
use texsearch_engine::{ExplainedResult, NormalizedQuery, ScoreBreakdown, find_ignore_case};
pub use texsearch_highlight::{dim, header, mark, subheader, warning};

/// Rendering style for search results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    /// A block per result with metadata and match context.
    Full,
    /// One line per result.
    List,
}

/// Prints `value` as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints search results as text.
pub fn print_results(results: &[ExplainedResult], query: &str, mode: DisplayMode, explain: bool) {
    if results.is_empty() {
        println!("{}", dim("No results found."));
        return;
    }

    let query = NormalizedQuery::new(query);
    for explained in results {
        let formatted = match mode {
            DisplayMode::Full => format_result(explained, query.as_ref()),
            DisplayMode::List => format_list_line(explained),
        };
        print!("{formatted}");
        if explain {
            print!("{}", format_breakdown(&explained.breakdown));
        }
        if mode == DisplayMode::Full || explain {
            println!();
        }
    }
}

/// Formats one result as a multi-line block.
pub fn format_result(explained: &ExplainedResult, query: Option<&NormalizedQuery>) -> String {
    let result = &explained.result;
    let mut out = String::new();

    out.push_str(&format!("{} {}\n", header(&result.title), dim(&result.url)));

    let mut facts = vec![
        format!("relevance {}", result.relevance),
        result.category.clone(),
    ];
    if !result.tags.is_empty() {
        facts.push(format!("tags: {}", result.tags.join(", ")));
    }
    if let Some(date) = &result.date {
        facts.push(date.clone());
    }
    out.push_str(&format!("   {}\n", dim(&facts.join(" · "))));

    if let Some(context) = &result.match_context {
        out.push_str(&format!("   {}\n", highlight_query(context, query)));
    }

    out
}

/// Formats one result as a single line.
pub fn format_list_line(explained: &ExplainedResult) -> String {
    let result = &explained.result;
    format!(
        "{:>4}  {} {}\n",
        result.relevance,
        subheader(&result.title),
        dim(&result.url)
    )
}

/// Formats the non-zero contributions behind a relevance score.
pub fn format_breakdown(breakdown: &ScoreBreakdown) -> String {
    let rules = [
        ("title", breakdown.title),
        ("category", breakdown.category),
        ("tags", breakdown.tags),
        ("description", breakdown.description),
        ("section title", breakdown.section_title),
        ("section body", breakdown.section_body),
    ];

    let mut out = format!("   {}\n", dim("+1  base"));
    for (rule, points) in rules.into_iter().filter(|(_, points)| *points > 0) {
        out.push_str(&format!("   {}\n", dim(&format!("+{points:<2} {rule}"))));
    }
    out.push_str(&format!("   {}\n", dim(&format!("={:<2} total", breakdown.relevance()))));
    out
}

/// Marks the first occurrence of the query in `text`.
fn highlight_query(text: &str, query: Option<&NormalizedQuery>) -> String {
    match query.and_then(|q| find_ignore_case(text, q)) {
        Some(range) => mark(text, range),
        None => text.to_string(),
    }
}
