//! CLI argument definitions for the rule table normalizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rulegen",
    version,
    about = "Rule table normalizer - Convert rule CSVs to an ordered pattern map",
    long_about = "Convert a CSV of named matching rules into the REGEX_PATTERNS\n\
                  OrderedDict code block consumed by the analysis notebook.\n\
                  Rows are validated, given defaults, and ordered by priority."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

#[derive(Subcommand)]
pub enum Command {
    /// Generate the pattern map from a rule CSV file.
    Generate(GenerateArgs),

    /// List the default color palette assigned to rules without a color.
    Palette,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Path to the rule CSV file.
    #[arg(value_name = "CSV_FILE")]
    pub input: PathBuf,

    /// Write the generated code to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Emit the full structured result as JSON on stdout.
    #[arg(long = "json")]
    pub json: bool,
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
