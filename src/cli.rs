use clap::{ArgAction, Parser};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Rank the languages used across a GitHub user's own repositories.
///
/// Every option falls back to the environment variable named in its help text.
/// Numeric settings are kept as raw strings here and validated by `Config`.
#[derive(Parser, Debug)]
#[command(name = "toplangs", version)]
pub struct Cli {
    /// GitHub login that owns the repositories
    #[arg(long, env = "GITHUB_USERNAME")]
    pub username: Option<String>,

    /// Personal access token used as a bearer credential
    #[arg(long, env = "GITHUB_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Comma-separated languages to leave out, e.g. "HTML,CSS"
    #[arg(long, env = "IGNORE_LANGUAGES")]
    pub ignore_languages: Option<String>,

    /// Upper bound on repository pages; the bound itself is not fetched
    #[arg(long, env = "MAX_PAGE")]
    pub max_page: Option<String>,

    /// Number of languages to print (default 10)
    #[arg(long = "show", env = "SHOW_NUM")]
    pub show_num: Option<String>,

    /// Base URL of the REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Print the ranking as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}
