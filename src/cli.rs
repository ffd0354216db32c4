use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use purl_licenses::application::dto::OutputFormat;
use purl_licenses::license_resolution::domain::SourceId;
use purl_licenses::license_resolution::policies::MergeStrategy;

/// Resolve SPDX licenses for package URLs
#[derive(Parser, Debug)]
#[command(name = "purl-licenses")]
#[command(version)]
#[command(about = "Resolve SPDX licenses for package URLs (PURLs)", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a config file (defaults to ./purl-licenses.config.yml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// License data snapshot (JSON)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Resolve component versions through this service instead of the snapshot
    #[arg(long, global = true, value_name = "URL")]
    pub resolver_url: Option<String>,

    /// Output format: json or text
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the licenses of one or more components
    Resolve(ResolveArgs),
    /// Show details of an SPDX license
    Details(DetailsArgs),
}

#[derive(ClapArgs, Debug)]
pub struct ResolveArgs {
    /// Package URLs, optionally with an inline version (pkg:npm/react@18.2.0)
    #[arg(
        value_name = "PURL",
        required_unless_present = "input",
        conflicts_with = "input"
    )]
    pub purls: Vec<String>,

    /// Version requirement applied to every PURL given on the command line
    #[arg(short, long, value_name = "REQ")]
    pub requirement: Option<String>,

    /// Batch request file: {"components": [{"purl": "...", "requirement": "..."}]}
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Number of components resolved concurrently
    #[arg(long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// How licenses from several detection sources are combined: merge_all or single_best
    #[arg(long, value_name = "STRATEGY")]
    pub merge_strategy: Option<MergeStrategy>,

    /// Detection source to include; can be specified multiple times
    #[arg(long = "source", value_name = "SOURCE")]
    pub sources: Vec<SourceId>,
}

#[derive(ClapArgs, Debug)]
pub struct DetailsArgs {
    /// SPDX license identifier (case-insensitive)
    #[arg(value_name = "SPDX-ID")]
    pub license_id: String,

    /// Skip OSADL compatibility enrichment
    #[arg(long)]
    pub no_osadl: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
