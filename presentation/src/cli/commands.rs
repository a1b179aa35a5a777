//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for drafted responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Readable cards
    Cards,
    /// The escaped markup the page would show
    Html,
    /// JSON output
    Json,
}

impl From<OutputFormat> for feedback_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Cards => Self::Cards,
            OutputFormat::Html => Self::Html,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for feedback-client
#[derive(Parser, Debug)]
#[command(name = "feedback-client")]
#[command(author, version, about = "Upload customer reviews for analysis and draft replies")]
#[command(long_about = r#"
feedback-client talks to a feedback analysis service.

  analyze   Upload a CSV or TXT file of reviews; prints the results page URL
  suggest   Draft replies to negative reviews, read from a saved results
            page and/or given on the command line

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./feedback.toml       Project-level config
3. ~/.config/feedback-client/config.toml   Global config

Example:
  feedback-client analyze reviews.csv --type advanced
  feedback-client suggest --page results.html
  feedback-client suggest --review "Too slow" --review "Rude staff" --format json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the feedback service (overrides config)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Upload a review file to the analysis endpoint
    Analyze {
        /// CSV or TXT file with one review per row/line
        file: Option<PathBuf>,

        /// Analysis type label sent with the file
        #[arg(short = 't', long = "type", value_name = "LABEL", default_value = "basic")]
        analysis_type: String,
    },

    /// Draft responses to negative reviews
    Suggest {
        /// Saved results page to read negative reviews from
        #[arg(short, long, value_name = "HTML_FILE")]
        page: Option<PathBuf>,

        /// Negative review text (can be specified multiple times)
        #[arg(short, long, value_name = "TEXT")]
        review: Vec<String>,

        /// Output format (defaults to the configured format, then cards)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
}
