pub mod members;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Export a Slack workspace's member directory as CSV
#[derive(Parser, Debug)]
#[command(name = "slack-members")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Channel or group ID (accepted for compatibility; the whole workspace is exported)
    pub channel_id: Option<String>,

    /// Output format [default: csv, or output.default_format from config]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// File holding the Slack API token
    #[arg(long, env = "SLACK_MEMBERS_KEY_FILE")]
    pub key_file: Option<PathBuf>,

    /// Slack Web API base URL
    #[arg(long, env = "SLACK_MEMBERS_API_URL", hide = true)]
    pub api_url: Option<String>,

    /// List channel IDs and names instead of members
    #[arg(long)]
    pub list_channels: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Quoted CSV with a header row (default)
    #[default]
    Csv,
    /// JSON output
    Json,
    /// Table output (best for humans)
    Table,
}

impl OutputFormat {
    /// Resolve the configured default, ignoring unknown names
    pub fn from_config(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }
}
