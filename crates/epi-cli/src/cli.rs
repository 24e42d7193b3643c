//! CLI argument definitions for the trend engine.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "epi-trends",
    version,
    about = "Monthly trend engine for clinical event extracts",
    long_about = "Compute monthly first-diagnosis counts and visit-normalized\n\
                  relative prevalence from clinical event extracts, compared\n\
                  against a fixed baseline mean with a 95% confidence interval."
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

    /// Allow person-level values in logs (redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Monthly counts of first diagnoses, with a baseline overlay.
    Incidence(IncidenceArgs),

    /// Monthly first-diagnosis counts normalized by unique visitors.
    Prevalence(PrevalenceArgs),
}

#[derive(Parser)]
pub struct IncidenceArgs {
    /// Path to the conditions CSV extract.
    #[arg(value_name = "CONDITIONS_CSV")]
    pub conditions: PathBuf,

    #[command(flatten)]
    pub trend: TrendArgs,
}

#[derive(Parser)]
pub struct PrevalenceArgs {
    /// Path to the conditions CSV extract.
    #[arg(value_name = "CONDITIONS_CSV")]
    pub conditions: PathBuf,

    /// Visit CSV extracts (repeat the flag for each care setting).
    #[arg(long = "visits", value_name = "CSV", required = true)]
    pub visits: Vec<PathBuf>,

    /// Column holding the visit date in the visit extracts.
    #[arg(long = "visit-date-column", default_value = "VISIT_START_DATE")]
    pub visit_date_column: String,

    #[command(flatten)]
    pub trend: TrendArgs,
}

#[derive(Args)]
pub struct TrendArgs {
    /// Earliest admissible first-diagnosis date (ISO format).
    #[arg(long = "cutoff", default_value = "2018-01-01")]
    pub cutoff: NaiveDate,

    /// Number of leading months forming the baseline window.
    #[arg(long = "baseline-months", default_value_t = 24)]
    pub baseline_months: usize,

    /// Column holding the person identifier.
    #[arg(long = "person-column", default_value = "PERSON_ID")]
    pub person_column: String,

    /// Column holding the diagnosis date in the conditions extract.
    #[arg(long = "date-column", default_value = "CONDITION_START_DATE")]
    pub date_column: String,

    /// Output directory for generated files (default: <CONDITIONS_CSV dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
