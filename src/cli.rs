use clap::{Parser, Subcommand};
use crate::ai_provider::AiProvider;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "packwise")]
#[command(about = "AI travel packing assistant: describe a trip, swipe through the list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// AI provider (gemini/claude/codex)
    #[arg(long, default_value = "gemini", global = true)]
    pub ai_provider: AiProvider,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a packing plan from a trip description and save it as JSON
    Plan {
        /// Trip description (prompted for when omitted)
        trip: Option<String>,

        /// Quick tag (repeatable): Domestic, Family Visit, Hiking, ...
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Output plan file
        #[arg(short, long, default_value = "plan.json")]
        output: PathBuf,

        /// Ignore the plan cache
        #[arg(long)]
        no_cache: bool,
    },

    /// Full flow: plan, luggage, swipe game, checklist
    Pack {
        /// Reuse a saved plan instead of generating one
        #[arg(short, long)]
        plan: Option<PathBuf>,

        /// Trip description
        #[arg(long)]
        trip: Option<String>,

        /// Quick tag (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Output checklist file
        #[arg(short, long, default_value = "checklist.json")]
        output: PathBuf,

        /// Swipe threshold (default from config)
        #[arg(long)]
        threshold: Option<f64>,

        /// Ignore the plan cache
        #[arg(long)]
        no_cache: bool,
    },

    /// Ask the assistant about a saved plan
    Chat {
        /// Saved plan file
        #[arg(required = true)]
        plan: PathBuf,

        /// One question, non-interactive
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Show totals for a saved checklist
    Summary {
        /// Checklist JSON file
        #[arg(required = true)]
        checklist: PathBuf,

        /// Plan file for the weather line
        #[arg(short, long)]
        plan: Option<PathBuf>,
    },

    /// Export a checklist to JSON/Markdown/Excel
    Export {
        /// Checklist JSON file
        #[arg(required = true)]
        input: PathBuf,

        /// Output format (json/markdown/excel/all)
        #[arg(short, long, default_value = "markdown")]
        format: ExportFormat,

        /// Output file or directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Document title
        #[arg(short, long, default_value = "My Packing List")]
        title: String,

        /// Plan file for the weather/luggage header
        #[arg(short, long)]
        plan: Option<PathBuf>,
    },

    /// Show or edit settings
    Config {
        /// Store the Gemini API key
        #[arg(long)]
        set_api_key: Option<String>,

        /// Override the model name
        #[arg(long)]
        set_model: Option<String>,

        /// Print settings
        #[arg(long)]
        show: bool,
    },

    /// Plan cache management
    Cache {
        /// Delete the cache
        #[arg(long)]
        clear: bool,

        /// Print cache info
        #[arg(long)]
        info: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    #[default]
    Markdown,
    Excel,
    All,
}

impl ExportFormat {
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            ExportFormat::Json => Some("json"),
            ExportFormat::Markdown => Some("md"),
            ExportFormat::Excel => Some("xlsx"),
            ExportFormat::All => None,
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "all" => Ok(ExportFormat::All),
            _ => Err(format!("Unknown format: {}. Use json, markdown, excel, or all", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Markdown => write!(f, "markdown"),
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::All => write!(f, "all"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_export_format() {
        assert_eq!("MD".parse::<ExportFormat>(), Ok(ExportFormat::Markdown));
        assert_eq!("xlsx".parse::<ExportFormat>(), Ok(ExportFormat::Excel));
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_parse_plan_with_tags() {
        let cli = Cli::try_parse_from(["packwise", "plan", "Paris weekend", "-t", "Business", "--tag", "International"]).unwrap();
        match cli.command {
            Commands::Plan { trip, tags, .. } => {
                assert_eq!(trip.as_deref(), Some("Paris weekend"));
                assert_eq!(tags, vec!["Business", "International"]);
            }
            _ => panic!("expected plan command"),
        }
        assert_eq!(cli.ai_provider, AiProvider::Gemini);
    }
}
