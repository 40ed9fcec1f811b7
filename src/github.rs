use crate::stats::LanguageBytes;
use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde::de::DeserializeOwned;

pub const PER_PAGE: usize = 100;
const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(rename = "fork")]
    pub is_fork: bool,
}

/// The two read-only endpoints the ranking needs.
pub trait GithubApi {
    /// One page (1-indexed) of repositories owned by the authenticated user.
    async fn owned_repos_page(&self, page: u32) -> Result<Vec<Repository>>;

    /// Unfiltered language byte counts for `owner/repo`.
    async fn repo_languages(&self, owner: &str, repo: &str) -> Result<LanguageBytes>;
}

#[derive(Clone)]
pub struct GithubClient {
    http: Client,
    token: String,
    api_url: String,
}

impl GithubClient {
    pub fn new(token: &str, api_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            token: token.to_string(),
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Authenticated GET that turns any non-2xx status into an error.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.api_url, path);

        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await
            .with_context(|| format!("Network error requesting {url}"))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("GitHub API returned HTTP {} for {url}: {body}", status.as_u16());
        }

        resp.json()
            .await
            .with_context(|| format!("Failed to parse JSON from {url}"))
    }
}

impl GithubApi for GithubClient {
    async fn owned_repos_page(&self, page: u32) -> Result<Vec<Repository>> {
        let query = [
            ("visibility", "all".to_string()),
            ("affiliation", "owner".to_string()),
            ("per_page", PER_PAGE.to_string()),
            ("page", page.to_string()),
        ];
        self.get_json("/user/repos", &query).await
    }

    async fn repo_languages(&self, owner: &str, repo: &str) -> Result<LanguageBytes> {
        self.get_json(&format!("/repos/{owner}/{repo}/languages"), &[])
            .await
    }
}

/// Collect every owned repository, one page at a time.
///
/// Pages are requested while the counter is strictly below `max_page`, so
/// page `max_page` itself is never fetched. An empty or short page ends the
/// listing early.
pub async fn list_owned_repos<A: GithubApi>(api: &A, max_page: u32) -> Result<Vec<Repository>> {
    if max_page <= 1 {
        log::warn!("MAX_PAGE is {max_page}; no repository pages will be requested");
    }

    let mut repos = Vec::new();
    let mut page = 1u32;

    while page < max_page {
        let batch = api
            .owned_repos_page(page)
            .await
            .with_context(|| format!("Failed to list repositories (page {page})"))?;
        let len = batch.len();
        log::debug!("page {page}: {len} repositories");

        repos.extend(batch);
        if len < PER_PAGE {
            break;
        }
        page += 1;
    }

    Ok(repos)
}

/// Language byte counts for one repository, minus the ignored languages.
pub async fn fetch_repo_languages<A: GithubApi>(
    api: &A,
    owner: &str,
    repo: &str,
    ignore: &[String],
) -> Result<LanguageBytes> {
    let mut languages = api
        .repo_languages(owner, repo)
        .await
        .with_context(|| format!("Failed to fetch languages for {owner}/{repo}"))?;

    languages.retain(|language, _| !ignore.iter().any(|i| i == language));
    Ok(languages)
}
