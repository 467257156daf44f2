//! Implementation of `texsearch inspect`.

use std::{path::Path, process::ExitCode};

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use texsearch_document::{DocumentError, Section, anchor_slug, anchors_agree, read_document};
use texsearch_engine::document_url;
use texsearch_highlight::{Highlighter, Language, rule};

use crate::cli::{
    args::InspectCommand,
    context::CommandContext,
    output::{dim, header, subheader, warning},
};

/// Shows how a document's metadata and sections are parsed.
pub fn run(ctx: &CommandContext, cmd: &InspectCommand) -> ExitCode {
    let path = Path::new(&cmd.file);
    let corpus = &ctx.config.corpus;

    if !path.exists() {
        eprintln!("error: file not found: {}", cmd.file);
        return ExitCode::FAILURE;
    }

    let document = match read_document(path, &corpus.extension) {
        Ok(document) => document,
        Err(e @ DocumentError::UnsupportedFileType { .. }) => {
            eprintln!("error: {e}");
            eprintln!("Supported type: .{}", corpus.extension);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let metadata = document.metadata();
    let sections = document.sections();

    println!("--- {} ---", header(&path.display().to_string()));
    println!("{}", subheader("Metadata:"));
    print_field("slug", Some(document.slug.as_str()), "");
    print_field("title", metadata.title.as_deref(), "falls back to slug");
    print_field(
        "category",
        metadata.category.as_deref(),
        "falls back to Uncategorized",
    );
    let tags = metadata.tags.join(", ");
    print_field("tags", (!tags.is_empty()).then_some(tags.as_str()), "");
    print_field("date", metadata.date.as_deref(), "");
    print_field(
        "abstract",
        (!metadata.description.is_empty()).then_some(metadata.description.as_str()),
        "",
    );
    let url = document_url(&corpus.url_prefix, &document.slug, None);
    print_field("url", Some(url.as_str()), "");
    println!();

    println!(
        "{}",
        subheader(&format!("Sections ({}):", sections.len()))
    );
    if sections.is_empty() {
        println!("   {}", dim("(none)"));
    } else {
        println!("{}", section_table(&sections));
        print_anchor_mismatches(&sections);
    }

    if cmd.source {
        println!();
        println!("{}", rule(60));
        let highlighter = Highlighter::new();
        print!("{}", highlighter.render(&document.content, Language::Latex));
        println!();
        println!("{}", rule(60));
    }

    ExitCode::SUCCESS
}

/// Prints one metadata field, with a dimmed note when the field is absent.
fn print_field(name: &str, value: Option<&str>, fallback: &str) {
    let label = format!("{name}:");
    match value {
        Some(value) => println!("   {label:<10} {value}"),
        None if fallback.is_empty() => println!("   {label:<10} {}", dim("(none)")),
        None => println!("   {label:<10} {}", dim(&format!("(none, {fallback})"))),
    }
}

/// Builds a table of the section sequence.
fn section_table(sections: &[Section<'_>]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["#", "Level", "Title", "Id", "Chars"]);

    for (i, section) in sections.iter().enumerate() {
        let indent = "  ".repeat(section.level.depth() - 1);
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(section.level),
            Cell::new(format!("{indent}{}", section.title)),
            Cell::new(&section.id),
            Cell::new(section.body.chars().count()),
        ]);
    }

    table
}

/// Warns about sections whose result-link id won't match the rendered heading anchor.
fn print_anchor_mismatches(sections: &[Section<'_>]) {
    let mismatched: Vec<&Section<'_>> = sections
        .iter()
        .filter(|section| !anchors_agree(section.title))
        .collect();

    if mismatched.is_empty() {
        return;
    }

    println!();
    println!(
        "{}",
        warning(&format!(
            "{} section id(s) differ from the table-of-contents anchor:",
            mismatched.len()
        ))
    );
    for section in mismatched {
        println!(
            "   {} {} {}",
            section.id,
            dim("vs"),
            anchor_slug(section.title)
        );
    }
}
