//! Implementation of `texsearch search`.

use std::process::ExitCode;

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{DisplayMode, print_json, print_results},
};

/// Searches the corpus and prints matching documents.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let mut searcher = ctx.searcher();
    if cmd.limit.is_some() {
        searcher = searcher.with_limit(cmd.limit);
    }

    let query = cmd.query();
    let results = searcher.search_explained(&query);

    if cmd.output.json {
        if cmd.explain {
            return print_json(&results);
        }
        let plain: Vec<_> = results.into_iter().map(|r| r.result).collect();
        return print_json(&plain);
    }

    let mode = if cmd.output.list {
        DisplayMode::List
    } else {
        DisplayMode::Full
    };
    print_results(&results, &query, mode, cmd.explain);
    ExitCode::SUCCESS
}
