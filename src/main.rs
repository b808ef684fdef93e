// src/main.rs
// =============================================================================
// This is the entry point of the CLI application.
//
// What happens here:
// 1. Parse command-line arguments into an explicit Config
// 2. Resolve the target account (waiting out a rate limit if necessary)
// 3. Enumerate its repositories and crawl each one in turn
// 4. Write the accumulated broken links to a timestamped CSV report
// 5. Exit with a proper code (0 = clean, 1 = broken links, 2 = error)
//
// Everything runs sequentially: one request in flight at a time. A failure
// inside one repository is logged and the run moves on to the next.
// =============================================================================

mod checker;
mod cli;
mod crawl;
mod github;
mod links;
mod report;
#[cfg(test)]
mod testutil;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;

use checker::LinkChecker;
use cli::{Cli, Config};
use crawl::crawl_repository;
use github::{with_rate_limit_retry, GithubClient};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let config = Cli::parse().into_config();

    if config.token.is_none() {
        println!(
            "⚠️  No GitHub token provided. Rate limits are stricter for \
             unauthenticated requests (60 requests/hour)."
        );
        println!(
            "   Pass --token or set the GITHUB_TOKEN environment variable \
             with a Personal Access Token for higher limits."
        );
    }

    let client = GithubClient::new(config.token.as_deref())
        .context("failed to construct the GitHub client")?;
    let checker = LinkChecker::new(config.retries).context("failed to construct the HTTP checker")?;

    // Account resolution and repository enumeration happen before the main
    // loop; failures here are fatal.
    println!("🔍 Resolving account {}...", config.username);
    let account = with_rate_limit_retry(|| client.get_user(&config.username))
        .await
        .with_context(|| format!("error accessing user {}", config.username))?;

    let repos = with_rate_limit_retry(|| client.list_repos(&account.login))
        .await
        .with_context(|| format!("error listing repositories of {}", account.login))?;
    println!("📦 Found {} repositories", repos.len());

    let mut broken_links = Vec::new();
    for repo in &repos {
        println!("Processing repository: {}", repo.name);
        broken_links.extend(crawl_repository(&client, &checker, repo).await);
    }

    let report_path = report_path(&config);
    let any_broken = report::write_report(&broken_links, &report_path)?;

    if any_broken {
        println!("❌ {} broken link(s) found", broken_links.len());
        Ok(1)
    } else {
        Ok(0)
    }
}

fn report_path(config: &Config) -> std::path::PathBuf {
    let filename = format!("broken_links_{}.csv", Local::now().format("%Y%m%d_%H%M%S"));
    config.output_dir.join(filename)
}
