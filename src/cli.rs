// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the CLI surface is described by a struct and
// clap generates the parsing code, --help output, and env fallbacks.
//
// The parsed arguments are converted into an explicit `Config` struct which
// is handed through the rest of the program. Nothing else reads ambient
// environment state.
// =============================================================================

use std::path::PathBuf;

use clap::Parser;

use crate::checker::DEFAULT_RETRIES;

#[derive(Parser, Debug)]
#[command(
    name = "repo-link-audit",
    version,
    about = "Scan every repository of a GitHub account for broken links",
    long_about = "repo-link-audit walks all repositories owned by a GitHub account, extracts \
                  links from markdown, reStructuredText, and plain-text files, validates each \
                  link over HTTP, and writes a CSV report of the broken ones."
)]
pub struct Cli {
    /// GitHub username whose repositories will be scanned
    pub username: String,

    /// Personal access token for the GitHub API
    ///
    /// Falls back to the GITHUB_TOKEN environment variable. Without a token
    /// requests are unauthenticated and subject to much stricter rate limits
    /// (60 requests/hour).
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Directory the CSV report is written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Attempts per link before it is reported as broken
    #[arg(long, default_value_t = DEFAULT_RETRIES, value_parser = clap::value_parser!(u32).range(1..))]
    pub retries: u32,
}

/// Resolved run configuration, built once from the CLI.
#[derive(Debug, Clone)]
pub struct Config {
    pub username: String,
    pub token: Option<String>,
    pub output_dir: PathBuf,
    pub retries: u32,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            username: self.username,
            token: self.token,
            output_dir: self.output_dir,
            retries: self.retries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["repo-link-audit", "octocat"]);
        assert_eq!(cli.username, "octocat");
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert_eq!(cli.retries, DEFAULT_RETRIES);
    }

    #[test]
    fn test_explicit_flags() {
        let cli = Cli::parse_from([
            "repo-link-audit",
            "octocat",
            "--token",
            "t0ken",
            "--output-dir",
            "/tmp/reports",
            "--retries",
            "4",
        ]);
        let config = cli.into_config();
        assert_eq!(config.token.as_deref(), Some("t0ken"));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/reports"));
        assert_eq!(config.retries, 4);
    }

    #[test]
    fn test_zero_retries_rejected() {
        let result = Cli::try_parse_from(["repo-link-audit", "octocat", "--retries", "0"]);
        assert!(result.is_err());
    }
}
