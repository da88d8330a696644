//! CLI argument definitions for the catalogue browser.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "catalogue",
    version,
    about = "Browse the research-variable catalogue",
    long_about = "Query a catalogue GraphQL endpoint for harmonised variables,\n\
                  the keyword taxonomy, contributing cohorts and variable mappings.\n\
                  Every query is scoped to a single release."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Where to connect and which release to query.
///
/// Precedence: these flags, then `CATALOGUE_*` environment variables, then
/// the settings file, then built-in defaults.
#[derive(Args)]
pub struct ConnectionArgs {
    /// JSON settings file.
    #[arg(long = "settings", value_name = "PATH", global = true)]
    pub settings: Option<PathBuf>,

    /// GraphQL endpoint URL.
    #[arg(long = "endpoint", value_name = "URL", global = true)]
    pub endpoint: Option<String>,

    /// Resource acronym of the release to query.
    #[arg(long = "release-acronym", value_name = "ACRONYM", global = true)]
    pub release_acronym: Option<String>,

    /// Version of the release to query.
    #[arg(long = "release-version", value_name = "VERSION", global = true)]
    pub release_version: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List variables of the release, optionally narrowed by keywords.
    Variables(VariablesArgs),

    /// Show the full record of one variable.
    Variable(VariableArgs),

    /// Print the keyword taxonomy.
    Keywords(KeywordsArgs),

    /// List contributing cohorts and databanks.
    Cohorts(CohortsArgs),

    /// List mappings onto the variables of the current overview.
    Mappings(SelectionArgs),
}

/// Keyword and search selection shared by overview commands.
#[derive(Args, Clone, Default)]
pub struct SelectionArgs {
    /// Keyword to filter by; repeat for several.
    #[arg(short = 'k', long = "keyword", value_name = "KEYWORD")]
    pub keywords: Vec<String>,

    /// Free-text search passed to the server.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct VariablesArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Also fetch and print the mappings onto the listed variables.
    #[arg(long = "with-mappings")]
    pub with_mappings: bool,
}

#[derive(Args)]
pub struct VariableArgs {
    /// Exact variable name.
    #[arg(value_name = "NAME")]
    pub name: String,
}

#[derive(Args)]
pub struct KeywordsArgs {
    /// Mark these keywords as selected in the output.
    #[arg(short = 'k', long = "keyword", value_name = "KEYWORD")]
    pub selected: Vec<String>,

    /// Print only the subtree below this keyword.
    #[arg(long = "under", value_name = "KEYWORD")]
    pub under: Option<String>,
}

#[derive(Args)]
pub struct CohortsArgs {
    /// Only cohorts of this type (case-insensitive).
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
