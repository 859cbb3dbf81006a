//! CLI argument definitions for the surveillance dashboard.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use surv_model::{CaseStatus, Disease, MacroRegion, SURVEILLANCE_DATASET_URL, Severity};

#[derive(Parser)]
#[command(
    name = "surv",
    version,
    about = "Disease surveillance dashboard for the terminal",
    long_about = "Explore disease surveillance data from the terminal.\n\n\
                  Loads the national arbovirus notification CSV or generates mock\n\
                  case batches, applies filters and renders the dashboard charts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

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

    /// Allow row-level record values in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Render tables or print JSON.
    #[arg(long = "output", value_enum, default_value = "table", global = true)]
    pub output: OutputArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate mock cases for a disease and show the dashboard.
    Cases(CasesArgs),

    /// Load surveillance notifications and show the dashboard.
    Surveillance(SurveillanceArgs),

    /// Monthly actual-versus-expected trend.
    Trend(SeriesArgs),

    /// Weekly forecast with prediction intervals.
    Forecast(SeriesArgs),

    /// National comparison across diseases.
    Compare,

    /// Risk level and notes for a disease and region.
    Insights(InsightArgs),

    /// List supported diseases and their profiles.
    Diseases,
}

#[derive(Args)]
pub struct CasesArgs {
    #[arg(long, default_value = "dengue")]
    pub disease: Disease,

    /// Number of cases to generate.
    #[arg(long, default_value_t = 1000)]
    pub count: usize,

    /// Seed for reproducible batches.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Simulated source latency in milliseconds.
    #[arg(long = "latency-ms", default_value_t = 1000)]
    pub latency_ms: u64,

    /// Case-insensitive match on name, id or region.
    #[arg(long)]
    pub search: Option<String>,

    /// Exact region, e.g. "Sudeste - São Paulo".
    #[arg(long)]
    pub region: Option<String>,

    #[arg(long)]
    pub status: Option<CaseStatus>,

    #[arg(long)]
    pub severity: Option<Severity>,

    #[command(flatten)]
    pub dates: DateRangeArgs,
}

#[derive(Args)]
pub struct SurveillanceArgs {
    /// CSV location: an http(s) URL or a local path.
    #[arg(long, default_value = SURVEILLANCE_DATASET_URL)]
    pub source: String,

    /// HTTP timeout in seconds.
    #[arg(long = "timeout-secs", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Case-insensitive match on municipality, UF or health facility.
    #[arg(long)]
    pub search: Option<String>,

    #[arg(long)]
    pub uf: Option<String>,

    #[arg(long)]
    pub municipality: Option<String>,

    /// Exact hospitalization value, e.g. "Sim".
    #[arg(long)]
    pub hospitalization: Option<String>,

    /// Exact fever value, e.g. "Sim".
    #[arg(long)]
    pub fever: Option<String>,

    /// Year used to derive ages from birth years (default: current year).
    #[arg(long = "current-year")]
    pub current_year: Option<i32>,

    #[command(flatten)]
    pub dates: DateRangeArgs,
}

#[derive(Args)]
pub struct DateRangeArgs {
    /// Inclusive lower bound (YYYY-MM-DD).
    #[arg(long = "from", value_name = "DATE")]
    pub from: Option<NaiveDate>,

    /// Inclusive upper bound (YYYY-MM-DD).
    #[arg(long = "to", value_name = "DATE")]
    pub to: Option<NaiveDate>,
}

#[derive(Args)]
pub struct SeriesArgs {
    #[arg(long, default_value = "dengue")]
    pub disease: Disease,

    #[arg(long, default_value = "all")]
    pub region: MacroRegion,

    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args)]
pub struct InsightArgs {
    #[arg(long, default_value = "dengue")]
    pub disease: Disease,

    #[arg(long, default_value = "all")]
    pub region: MacroRegion,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
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
