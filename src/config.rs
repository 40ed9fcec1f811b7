use crate::cli::Cli;
use crate::error::TopLangsError;
use std::fmt;

pub const DEFAULT_SHOW_NUM: usize = 10;

/// Settings for one run, validated once at startup.
#[derive(Clone, PartialEq)]
pub struct Config {
    pub username: String,
    pub token: String,
    pub ignore_languages: Vec<String>,
    pub max_page: u32,
    pub show_num: usize,
    pub api_url: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("username", &self.username)
            .field("token", &"[REDACTED]")
            .field("ignore_languages", &self.ignore_languages)
            .field("max_page", &self.max_page)
            .field("show_num", &self.show_num)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self, TopLangsError> {
        let username = required(cli.username.as_deref(), "GITHUB_USERNAME")?;
        let token = required(cli.token.as_deref(), "GITHUB_ACCESS_TOKEN")?;
        let max_page = parse_max_page(cli.max_page.as_deref())?;

        Ok(Self {
            username,
            token,
            ignore_languages: parse_ignore_list(cli.ignore_languages.as_deref().unwrap_or("")),
            max_page,
            show_num: parse_show_num(cli.show_num.as_deref()),
            api_url: cli.api_url.clone(),
        })
    }
}

fn required(value: Option<&str>, key: &'static str) -> Result<String, TopLangsError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(TopLangsError::MissingSetting(key)),
    }
}

fn parse_max_page(raw: Option<&str>) -> Result<u32, TopLangsError> {
    let raw = raw.ok_or(TopLangsError::MissingSetting("MAX_PAGE"))?;
    match raw.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(TopLangsError::InvalidNumber {
            key: "MAX_PAGE",
            value: raw.to_string(),
        }),
    }
}

fn parse_show_num(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return DEFAULT_SHOW_NUM;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        log::warn!("SHOW_NUM {raw:?} is not a valid count, showing {DEFAULT_SHOW_NUM}");
        DEFAULT_SHOW_NUM
    })
}

/// Splits a comma-separated list, trimming names and dropping blanks.
pub fn parse_ignore_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
