//! Clap argument definitions for the `texsearch` CLI.

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "texsearch")]
#[command(about = "Search LaTeX tutorials by title, category, tags, abstract and section")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output one line per result
    #[arg(long, conflicts_with = "json")]
    pub list: bool,

    /// Output results as JSON, the same shape the HTTP endpoint serves
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `texsearch search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Query words, joined with single spaces into one query
    #[arg(required = true)]
    pub queries: Vec<String>,

    /// Maximum results to return [default: search.limit from config, 0 = unlimited]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,

    /// Show how each result's relevance was computed
    #[arg(long)]
    pub explain: bool,
}

impl SearchCommand {
    /// Returns the query as a single string.
    pub fn query(&self) -> String {
        self.queries.join(" ")
    }
}

/// Arguments for `texsearch ls`.
#[derive(Args, Debug, Clone)]
pub struct LsCommand {
    /// Show detailed information.
    #[arg(short = 'l', long)]
    pub long: bool,
}

/// Arguments for `texsearch inspect`.
#[derive(Args, Debug, Clone)]
pub struct InspectCommand {
    /// Document to inspect
    pub file: String,

    /// Also print the highlighted source
    #[arg(long)]
    pub source: bool,
}

/// Arguments for `texsearch init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.texsearch.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `texsearch serve`.
#[derive(Args, Debug, Clone)]
pub struct ServeCommand {
    /// Address to listen on [default: server.bind from config]
    #[arg(short = 'b', long)]
    pub bind: Option<String>,
}

/// Supported `texsearch` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search the tutorials and print matching documents
    #[command(after_help = "\
MATCHING:
  The query is matched as one case-insensitive substring; words are not
  split. A document matches only if its text contains the query.

SCORING:
  +1   any match            +10  title
  +5   category             +8   any tag
  +5   abstract             +15  first section title
  +2   each section body (until a section title matches)

EXAMPLES:
  texsearch search bfs
  texsearch search breadth first --list
  texsearch search dynamic programming -n 3 --explain
  texsearch search heap --json")]
    Search(SearchCommand),

    /// List every document in the corpus
    Ls(LsCommand),

    /// Show how texsearch parses a document
    Inspect(InspectCommand),

    /// Serve the search endpoint over HTTP
    Serve(ServeCommand),

    /// Initialize texsearch configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,

    /// Show status and validate configuration
    Status,
}

impl Commands {
    /// Log filter used when `TEXSEARCH_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Self::Serve(_) => "info",
            _ => "warn",
        }
    }
}

/// Parses CLI arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn search_words_are_joined() {
        let cli = Cli::try_parse_from(["texsearch", "search", "breadth", "first"]).unwrap();
        let Commands::Search(cmd) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(cmd.query(), "breadth first");
        assert_eq!(cmd.limit, None);
    }

    #[test]
    fn list_and_json_conflict() {
        let parsed = Cli::try_parse_from(["texsearch", "search", "x", "--list", "--json"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn serve_logs_at_info() {
        let cli = Cli::try_parse_from(["texsearch", "serve"]).unwrap();
        assert_eq!(cli.command.default_log_filter(), "info");
        let cli = Cli::try_parse_from(["texsearch", "status"]).unwrap();
        assert_eq!(cli.command.default_log_filter(), "warn");
    }
}
