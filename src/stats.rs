use crate::error::TopLangsError;
use crate::github::{GithubApi, Repository, fetch_repo_languages};
use anyhow::Result;
use std::collections::BTreeMap;

/// Bytes of source per language name.
pub type LanguageBytes = BTreeMap<String, u64>;

/// Share of all bytes per language name, in percent with two decimals.
pub type LanguagePercentages = BTreeMap<String, f64>;

#[derive(Debug, Default, PartialEq)]
pub struct Aggregate {
    pub languages: LanguageBytes,
    pub repo_count: usize,
    pub fork_count: usize,
}

/// Adds `other` into `total`, summing languages present in both.
pub fn merge(total: &mut LanguageBytes, other: LanguageBytes) {
    for (language, bytes) in other {
        let entry = total.entry(language).or_insert(0);
        *entry = entry.saturating_add(bytes);
    }
}

/// Sum language bytes over every non-fork repository, one request at a time.
pub async fn aggregate<A: GithubApi>(
    api: &A,
    owner: &str,
    repos: &[Repository],
    ignore: &[String],
) -> Result<Aggregate> {
    let mut total = Aggregate {
        repo_count: repos.len(),
        ..Aggregate::default()
    };

    for repo in repos {
        if repo.is_fork {
            total.fork_count += 1;
            continue;
        }
        log::debug!("fetching languages for {}", repo.name);
        let languages = fetch_repo_languages(api, owner, &repo.name, ignore).await?;
        merge(&mut total.languages, languages);
    }

    log::info!(
        "{} repositories, {} forked (skipped)",
        total.repo_count,
        total.fork_count
    );

    Ok(total)
}

/// Converts byte counts into percentages of the overall total.
pub fn percentages(languages: &LanguageBytes) -> Result<LanguagePercentages, TopLangsError> {
    let total: u128 = languages.values().map(|&b| u128::from(b)).sum();
    if total == 0 {
        return Err(TopLangsError::NoLanguageData);
    }

    Ok(languages
        .iter()
        .map(|(language, &bytes)| {
            let share = bytes as f64 / total as f64 * 100.0;
            (language.clone(), round2(share))
        })
        .collect())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
