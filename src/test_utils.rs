#![cfg(test)]

use crate::github::{GithubApi, Repository};
use crate::stats::LanguageBytes;
use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory `GithubApi` that records every request it serves.
#[derive(Default)]
pub struct FakeApi {
    pages: Vec<Vec<Repository>>,
    languages: HashMap<String, LanguageBytes>,
    failing_page: Option<u32>,
    page_requests: Mutex<Vec<u32>>,
    language_requests: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page `n` (1-indexed) serves `pages[n - 1]`; later pages are empty.
    pub fn with_pages(mut self, pages: Vec<Vec<Repository>>) -> Self {
        self.pages = pages;
        self
    }

    pub fn with_languages(mut self, repo: &str, languages: LanguageBytes) -> Self {
        self.languages.insert(repo.to_string(), languages);
        self
    }

    pub fn failing_page(mut self, page: u32) -> Self {
        self.failing_page = Some(page);
        self
    }

    pub fn page_requests(&self) -> Vec<u32> {
        self.page_requests.lock().unwrap().clone()
    }

    pub fn language_requests(&self) -> Vec<String> {
        self.language_requests.lock().unwrap().clone()
    }
}

impl GithubApi for FakeApi {
    async fn owned_repos_page(&self, page: u32) -> Result<Vec<Repository>> {
        self.page_requests.lock().unwrap().push(page);
        if self.failing_page == Some(page) {
            return Err(anyhow!("GitHub API returned HTTP 502"));
        }
        Ok(self
            .pages
            .get(page as usize - 1)
            .cloned()
            .unwrap_or_default())
    }

    async fn repo_languages(&self, owner: &str, repo: &str) -> Result<LanguageBytes> {
        self.language_requests
            .lock()
            .unwrap()
            .push(format!("{owner}/{repo}"));
        self.languages
            .get(repo)
            .cloned()
            .ok_or_else(|| anyhow!("GitHub API returned HTTP 404"))
    }
}

pub fn repo(name: &str, is_fork: bool) -> Repository {
    Repository {
        name: name.to_string(),
        is_fork,
    }
}

/// `count` non-fork repositories named `<prefix>-0`, `<prefix>-1`, ...
pub fn repos(prefix: &str, count: usize) -> Vec<Repository> {
    (0..count).map(|i| repo(&format!("{prefix}-{i}"), false)).collect()
}

pub fn bytes(entries: &[(&str, u64)]) -> LanguageBytes {
    entries.iter().map(|(l, b)| (l.to_string(), *b)).collect()
}
