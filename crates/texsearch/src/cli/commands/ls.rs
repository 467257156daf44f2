//! Implementation of `texsearch ls`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use texsearch_config::format_path_for_display;

use crate::cli::{args::LsCommand, context::CommandContext, output::dim};

/// Lists every readable document in the corpus.
pub fn run(ctx: &CommandContext, cmd: &LsCommand) -> ExitCode {
    let docs = ctx.searcher().list_documents();

    if docs.is_empty() {
        let corpus = &ctx.config.corpus;
        println!(
            "{}",
            dim(&format!(
                "No .{} documents in {}.",
                corpus.extension,
                format_path_for_display(&corpus.path, Some(ctx.cwd.as_path()))
            ))
        );
        return ExitCode::SUCCESS;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);

    let mut columns = vec!["Slug", "Title", "Category", "Tags", "Date"];
    if cmd.long {
        columns.extend(["Sections", "URL"]);
    }
    table.set_header(columns);

    for doc in &docs {
        let mut row = vec![
            Cell::new(&doc.slug),
            Cell::new(&doc.title),
            Cell::new(&doc.category),
            Cell::new(doc.tags.join(", ")),
            Cell::new(doc.date.as_deref().unwrap_or("")),
        ];
        if cmd.long {
            row.push(Cell::new(doc.sections));
            row.push(Cell::new(&doc.url));
        }
        table.add_row(row);
    }

    println!("{table}");
    println!("{}", dim(&format!("{} documents", docs.len())));
    ExitCode::SUCCESS
}
