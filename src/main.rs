mod cli;
mod config;
mod error;
mod github;
mod report;
mod stats;
mod test_utils;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::Config;
use github::{GithubApi, GithubClient};
use report::RankedLanguage;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::debug!("{config:?}");

    match run(&config, cli.json).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error fetching repository languages: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config, json: bool) -> Result<()> {
    let client = GithubClient::new(&config.token, &config.api_url)?;
    let ranked = top_languages(&client, config).await?;

    if json {
        println!("{}", report::render_json(&ranked)?);
    } else {
        print!("{}", report::render_text(&ranked));
    }

    Ok(())
}

/// List, aggregate, convert to percentages and rank.
async fn top_languages<A: GithubApi>(api: &A, config: &Config) -> Result<Vec<RankedLanguage>> {
    let repos = github::list_owned_repos(api, config.max_page).await?;
    let total =
        stats::aggregate(api, &config.username, &repos, &config.ignore_languages).await?;
    let percentages = stats::percentages(&total.languages)?;

    Ok(report::rank(&percentages, config.show_num))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TopLangsError;
    use crate::test_utils::{FakeApi, bytes, repo};
    use pretty_assertions::assert_eq;

    fn config(ignore: &[&str]) -> Config {
        Config {
            username: "octocat".into(),
            token: "token".into(),
            ignore_languages: ignore.iter().map(|s| s.to_string()).collect(),
            max_page: 10,
            show_num: 10,
            api_url: cli::DEFAULT_API_URL.into(),
        }
    }

    #[tokio::test]
    async fn two_repositories_end_to_end() {
        let api = FakeApi::new()
            .with_pages(vec![vec![repo("repo1", false), repo("repo2", false)]])
            .with_languages("repo1", bytes(&[("TypeScript", 800), ("JavaScript", 200)]))
            .with_languages("repo2", bytes(&[("TypeScript", 200)]));

        let ranked = top_languages(&api, &config(&[])).await.unwrap();

        assert_eq!(
            report::render_text(&ranked),
            "1. TypeScript 83.33%\n2. JavaScript 16.67%\n"
        );
        assert_eq!(api.page_requests(), vec![1]);
    }

    #[tokio::test]
    async fn forked_languages_do_not_reach_the_ranking() {
        let api = FakeApi::new()
            .with_pages(vec![vec![repo("mine", false), repo("upstream", true)]])
            .with_languages("mine", bytes(&[("Rust", 3), ("Shell", 1)]))
            .with_languages("upstream", bytes(&[("C", 1_000_000)]));

        let ranked = top_languages(&api, &config(&[])).await.unwrap();

        assert_eq!(report::render_text(&ranked), "1. Rust 75%\n2. Shell 25%\n");
    }

    #[tokio::test]
    async fn everything_ignored_is_no_language_data() {
        let api = FakeApi::new()
            .with_pages(vec![vec![repo("site", false)]])
            .with_languages("site", bytes(&[("HTML", 10), ("CSS", 5)]));

        let err = top_languages(&api, &config(&["HTML", "CSS"]))
            .await
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<TopLangsError>(),
            Some(&TopLangsError::NoLanguageData)
        );
    }

    #[tokio::test]
    async fn show_num_truncates_the_ranking() {
        let api = FakeApi::new()
            .with_pages(vec![vec![repo("r", false)]])
            .with_languages("r", bytes(&[("A", 5), ("B", 3), ("C", 2)]));
        let mut config = config(&[]);
        config.show_num = 2;

        let ranked = top_languages(&api, &config).await.unwrap();

        assert_eq!(report::render_text(&ranked), "1. A 50%\n2. B 30%\n");
    }
}
