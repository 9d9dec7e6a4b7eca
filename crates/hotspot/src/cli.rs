use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "hotspot",
    version,
    about = "Batch importer for GitHub issue hotspot analysis"
)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'o', value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Path to a TOML config file
    #[arg(long, env = "HOTSPOT_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// GitHub API base URL (overrides config file)
    #[arg(long, env = "HOTSPOT_URL", global = true)]
    pub url: Option<String>,

    /// API token (overrides config file; optional for public repositories)
    #[arg(long, env = "HOTSPOT_TOKEN", global = true)]
    pub token: Option<String>,

    /// Root directory of the issue cache (overrides config file)
    #[arg(long, env = "HOTSPOT_CACHE_DIR", global = true, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Issue state filter for live listings
#[derive(ValueEnum, Clone, Debug, Copy, Default, PartialEq, Eq)]
pub enum IssueState {
    #[default]
    Open,
    Closed,
    All,
}

impl IssueState {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
            IssueState::All => "all",
        }
    }
}

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Maximum number of pages to traverse (bounds API usage; default 3)
    #[arg(long, value_name = "N")]
    pub max_pages: Option<usize>,

    /// Issue state filter
    #[arg(long, value_enum, default_value_t = IssueState::Open)]
    pub state: IssueState,

    /// Listing page size
    #[arg(long, value_name = "N")]
    pub per_page: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan live issues and report hotspot activity
    #[command(visible_alias = "s")]
    Scan {
        /// Repository to scan, as "owner/name"
        repo: String,

        #[command(flatten)]
        fetch: FetchArgs,
    },
    /// Fetch live issues into the local cache for offline replay
    #[command(visible_alias = "f")]
    Fetch {
        /// Repository to fetch, as "owner/name"
        repo: String,

        #[command(flatten)]
        fetch: FetchArgs,
    },
    /// Replay cached issues through the hotspot report
    #[command(visible_alias = "r")]
    Replay {
        /// Repository to replay, as "owner/name"
        repo: String,
    },
    /// Cache inspection and cleanup
    Cache {
        #[command(subcommand)]
        action: CacheCommands,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Print the cache root path
    Path,
    /// Remove the cached issues for a repository
    Clear {
        /// Repository to remove, as "owner/name"
        repo: String,
    },
}
