//! CLI argument definitions for regscan.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "regscan",
    version,
    about = "Link global drug approvals to the Korean market",
    long_about = "Resolve ingredient names against the MFDS ingredient master and the HIRA\n\
                  price list, classify each ingredient's domestic market status and score\n\
                  its relevance to Korea."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Run configuration file (default: ./regscan.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

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
    /// Analyze global approval statuses against the domestic market.
    Analyze(AnalyzeArgs),

    /// Resolve ingredient names against the reference tables.
    Lookup(LookupArgs),
}

/// Reference table locations; each flag overrides the config file.
#[derive(Args, Default)]
pub struct TableArgs {
    /// Ingredient master CSV.
    #[arg(long = "master", value_name = "PATH")]
    pub master: Option<PathBuf>,

    /// ATC code mapping CSV.
    #[arg(long = "atc-mapping", value_name = "PATH")]
    pub secondary: Option<PathBuf>,

    /// HIRA reimbursement (price list) JSON.
    #[arg(long = "reimbursement", value_name = "PATH")]
    pub reimbursement: Option<PathBuf>,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Global approval statuses JSON.
    #[arg(value_name = "STATUSES")]
    pub statuses: Option<PathBuf>,

    #[command(flatten)]
    pub tables: TableArgs,

    /// Domestic clinical trials JSON.
    #[arg(long = "trials", value_name = "PATH")]
    pub trials: Option<PathBuf>,

    /// Reimbursed ATC class prefix (repeatable, e.g. --atc-prefix L01).
    #[arg(long = "atc-prefix", value_name = "PREFIX")]
    pub atc_prefixes: Vec<String>,

    /// Reference date for elapsed-time notes (default: today).
    #[arg(long = "as-of", value_name = "YYYY-MM-DD")]
    pub as_of: Option<NaiveDate>,

    /// Price ceiling (KRW) above which an ingredient is noted as high cost.
    #[arg(long = "high-cost-threshold", value_name = "KRW")]
    pub high_cost_threshold: Option<f64>,

    /// Write impacts and the batch summary as JSON to this path.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct LookupArgs {
    /// Ingredient names to resolve.
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,

    #[command(flatten)]
    pub tables: TableArgs,

    /// Print match results as JSON instead of a table.
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
