use crate::prd::show::Section;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "prdtool",
    version,
    about = "Product Requirements Document creation, validation and quality scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress informational output; reports and errors still print
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new draft PRD file
    Init(InitCommand),
    /// Check a PRD for missing required fields
    Validate(ValidateCommand),
    /// Display PRD contents, whole or one section
    Show(ShowCommand),
    /// Score a PRD against the quality rubric
    Score(ScoreCommand),
    /// Print the effective category weights
    Weights,
}

#[derive(Args)]
pub struct InitCommand {
    /// PRD file to create (defaults to the configured file, then PRD.json)
    pub path: Option<PathBuf>,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub owner: String,
    /// PRD id (generated as PREFIX-YYYY-DDD when omitted)
    #[arg(long)]
    pub id: Option<String>,
}

#[derive(Args)]
pub struct ValidateCommand {
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct ShowCommand {
    pub path: Option<PathBuf>,
    /// Show a single section
    #[arg(short, long, value_enum)]
    pub section: Option<Section>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub path: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
