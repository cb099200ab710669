use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cardiorisk",
    version,
    about = "Rule-based cardiovascular risk scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a health profile and print the assessment
    Assess(AssessCommand),
    /// Print the prediction service payload for a health profile
    Payload(PayloadCommand),
    /// Print the active scoring rule table
    Rules,
}

#[derive(Args)]
pub struct AssessCommand {
    /// Profile file (.toml or .json)
    pub profile: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Saved prediction service response to merge into the local assessment
    #[arg(long)]
    pub remote_response: Option<PathBuf>,
    /// Fail instead of falling back to the local score when the response is unusable
    #[arg(long, requires = "remote_response")]
    pub strict_remote: bool,
    /// Reject values outside the intake form's slider ranges
    #[arg(long)]
    pub enforce_form_ranges: bool,
}

#[derive(Args)]
pub struct PayloadCommand {
    pub profile: PathBuf,
    #[arg(long)]
    pub enforce_form_ranges: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
