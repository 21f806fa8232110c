//! Clap derive structures for the `bookly` CLI.
//!
//! Defines the command tree, global flags, and shared enums.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// bookly -- manage a Bookly book collection from the command line
#[derive(Debug, Parser)]
#[command(
    name = "bookly",
    version,
    about = "Manage a Bookly book collection from the command line",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Server base address (overrides the config file)
    #[arg(long, short = 'u', env = "BOOKLY_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(long, short = 'o', default_value = "table", global = true)]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one uid per line (scripting)
    Plain,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the collection, optionally filtered by a free-text query
    #[command(alias = "ls")]
    List(ListArgs),

    /// Create a book
    #[command(alias = "add")]
    Create(FieldArgs),

    /// Edit an existing book
    Edit(EditArgs),

    /// Delete a book
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Free-text filter matched against title, author, publisher, and
    /// language (case-insensitive substring)
    pub query: Option<String>,
}

/// Book field flags shared by `create` and `edit`.
#[derive(Debug, Args)]
pub struct FieldArgs {
    /// Book title
    #[arg(long)]
    pub title: Option<String>,

    /// Author name
    #[arg(long)]
    pub author: Option<String>,

    /// Publisher (may be empty)
    #[arg(long)]
    pub publisher: Option<String>,

    /// Publication date, YYYY-MM-DD
    #[arg(long = "date")]
    pub published_date: Option<String>,

    /// Page count
    #[arg(long = "pages")]
    pub page_count: Option<f64>,

    /// Language
    #[arg(long)]
    pub language: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Book uid (or an unambiguous prefix of one)
    pub uid: String,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Book uid (or an unambiguous prefix of one)
    pub uid: String,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved configuration
    Show,
    /// Write a default config file
    Init,
    /// Print the config file location
    Path,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
