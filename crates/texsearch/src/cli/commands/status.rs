//! Implementation of `texsearch status`.

use std::process::ExitCode;

use texsearch_config::{ConfigWarning, discover_config_files, format_path_for_display};

use crate::cli::{
    context::CommandContext,
    output::{dim, subheader, warning},
};

/// Shows configuration files, the corpus, and validation warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let cwd = &ctx.cwd;
    let config = &ctx.config;

    let config_files = discover_config_files(cwd);
    println!("{}", subheader("Config files:"));
    if config_files.is_empty() {
        println!("   {}", dim("(none, using defaults)"));
    } else {
        for path in &config_files {
            let display_path = format_path_for_display(path, Some(cwd.as_path()));
            println!("   {display_path}");
        }
    }
    println!();

    let corpus = &config.corpus;
    let base = config.config_root.as_deref().unwrap_or(cwd.as_path());
    let display_path = format_path_for_display(&corpus.path, Some(base));
    let document_count = ctx.searcher().store().list().map_or(0, |files| files.len());

    println!("{}", subheader("Corpus:"));
    if corpus.path.is_dir() {
        println!("   {display_path}");
    } else {
        println!("   {display_path} {}", warning("[missing]"));
    }
    println!(
        "   {}",
        dim(&format!(
            "{document_count} .{} documents, urls under {}",
            corpus.extension, corpus.url_prefix
        ))
    );
    println!();

    println!("{}", subheader("Search:"));
    let limit = config
        .search
        .max_results()
        .map_or_else(|| "unlimited".to_string(), |n| n.to_string());
    println!(
        "   {}",
        dim(&format!(
            "context radius {}, limit {limit}",
            config.search.context_radius
        ))
    );
    println!();

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    for w in warnings {
        let hint = match w {
            ConfigWarning::CorpusPathMissing { .. } => {
                "Hint: create the directory or set [corpus] path in .texsearch.toml"
            }
            ConfigWarning::CorpusPathNotDirectory { .. } => {
                "Hint: [corpus] path must point to a directory"
            }
            ConfigWarning::NoDocuments { .. } => {
                "Hint: check [corpus] extension matches your document files"
            }
        };
        println!("{}", dim(hint));
    }
}
