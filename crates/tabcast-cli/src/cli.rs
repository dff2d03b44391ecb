//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tabcast",
    version,
    about = "Convert delimited tabular data to typed JSON, driven by a column schema",
    long_about = "Convert a delimited text file into a JSON document of typed records.\n\n\
                  A YAML schema declares, per output field, the source column index,\n\
                  target type, coercion policy, and default. Rows are processed in\n\
                  parallel, with optional duplicate suppression across all schema\n\
                  columns."
)]
pub struct Cli {
    /// Input delimited-text file.
    #[arg(long = "input", short = 'i', value_name = "CSV")]
    pub input: PathBuf,

    /// YAML schema configuration file.
    #[arg(long = "config", short = 'c', value_name = "YAML")]
    pub config: PathBuf,

    /// Output JSON file.
    #[arg(long = "output", short = 'o', value_name = "JSON")]
    pub output: PathBuf,

    /// Worker-pool size (default: logical CPU count).
    #[arg(long = "workers", value_name = "N")]
    pub workers: Option<usize>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
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
