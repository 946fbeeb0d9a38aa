//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use insights_match::{DEFAULT_THRESHOLD, SimilarityScorer};

#[derive(Parser)]
#[command(
    name = "listing-insights",
    version,
    about = "Listing Insights - enrich property listings with neighborhood demographics",
    long_about = "Join messy property listings against canonical neighborhood demographics.\n\n\
                  Postal codes are reconciled by partial string similarity, listings are\n\
                  inner-joined on the resolved codes, and each matched listing gains a\n\
                  price-per-square-foot valuation metric."
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
    /// Run the enrichment pipeline and print a summary.
    Run(RunArgs),

    /// Show how raw postal-code values resolve against the canonical set.
    Resolve(ResolveArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the demographics CSV (canonical zip_code column).
    #[arg(value_name = "DEMOGRAPHICS_CSV")]
    pub demographics: PathBuf,

    /// Path to the listings CSV (postal_code, listing_price, sq_ft, raw_address).
    #[arg(value_name = "LISTINGS_CSV")]
    pub listings: PathBuf,

    /// Minimum acceptable similarity score (0-100).
    #[arg(long = "threshold", default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Similarity function used to score prefixes against canonical codes.
    #[arg(long = "scorer", value_enum, default_value = "partial-ratio")]
    pub scorer: ScorerArg,

    /// Write the enriched table to a CSV file.
    #[arg(long = "export", value_name = "PATH")]
    pub export: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ResolveArgs {
    /// Path to the demographics CSV providing the canonical codes.
    #[arg(value_name = "DEMOGRAPHICS_CSV")]
    pub demographics: PathBuf,

    /// Raw postal-code values to resolve.
    #[arg(value_name = "QUERY", required = true)]
    pub queries: Vec<String>,

    /// Minimum acceptable similarity score (0-100).
    #[arg(long = "threshold", default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Similarity function used to score prefixes against canonical codes.
    #[arg(long = "scorer", value_enum, default_value = "partial-ratio")]
    pub scorer: ScorerArg,
}

/// CLI scorer choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ScorerArg {
    PartialRatio,
    Ratio,
    JaroWinkler,
}

impl From<ScorerArg> for SimilarityScorer {
    fn from(arg: ScorerArg) -> Self {
        match arg {
            ScorerArg::PartialRatio => SimilarityScorer::PartialRatio,
            ScorerArg::Ratio => SimilarityScorer::Ratio,
            ScorerArg::JaroWinkler => SimilarityScorer::JaroWinkler,
        }
    }
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
