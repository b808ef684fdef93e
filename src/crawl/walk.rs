// src/crawl/walk.rs
// =============================================================================
// Depth-first traversal of one repository's file tree.
//
// How it works:
// 1. Start with the repository root on an explicit path stack
// 2. List the directory via the contents API; push subdirectories
// 3. For files with a text-like extension (.md, .rst, .txt): download the
//    raw content, extract links, resolve them, and check each one
// 4. Every link that fails validation becomes a LinkRecord in the
//    accumulator, which the walk owns and returns by value
//
// Failure handling:
// - Rate-limit errors on a listing are waited out and the same path is
//   retried (bounded; see github::with_rate_limit_retry)
// - Any other listing error logs and skips that subtree
// - Per-file download/decode errors log and skip just that file
// Nothing here aborts the walk of the repository.
// =============================================================================

use crate::checker::LinkChecker;
use crate::github::{with_rate_limit_retry, ContentEntry, GithubClient, RepositoryContext};
use crate::links::{extract_links, resolve_link};

/// File extensions whose contents are scanned for links.
const TEXT_EXTENSIONS: [&str; 3] = [".md", ".rst", ".txt"];

/// One broken link, as discovered during a crawl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    /// Repository full name, e.g. "acme/widgets".
    pub repo: String,
    /// Path of the file the link was found in.
    pub file: String,
    /// The link exactly as it appeared in the file.
    pub link: String,
    /// The absolute URL that was checked.
    pub full_url: String,
    /// Terminal HTTP status, or None for a transport-level failure.
    pub status: Option<u16>,
}

/// Walks `repo` and returns a record for every broken link found.
pub async fn crawl_repository(
    github: &GithubClient,
    checker: &LinkChecker,
    repo: &RepositoryContext,
) -> Vec<LinkRecord> {
    let mut records = Vec::new();
    let mut stack = vec![String::new()];

    while let Some(path) = stack.pop() {
        let entries = match list_directory(github, repo, &path).await {
            Ok(entries) => entries,
            Err(e) => {
                println!(
                    "  ⚠️  Error accessing path '{}' in repo {}: {}",
                    path, repo.name, e
                );
                continue;
            }
        };

        for entry in entries {
            if entry.is_dir() {
                stack.push(entry.path);
            } else if entry.is_file() && is_text_file(&entry.path) {
                if let Err(e) = scan_file(github, checker, repo, &entry, &mut records).await {
                    println!(
                        "  ⚠️  Error processing file {} in repo {}: {}",
                        entry.path, repo.name, e
                    );
                }
            }
        }
    }

    records
}

// Lists one directory, sleeping through rate limits before giving up.
async fn list_directory(
    github: &GithubClient,
    repo: &RepositoryContext,
    path: &str,
) -> Result<Vec<ContentEntry>, crate::github::GithubError> {
    with_rate_limit_retry(|| github.list_contents(&repo.full_name, path)).await
}

// Downloads one file and records every link in it that fails validation.
async fn scan_file(
    github: &GithubClient,
    checker: &LinkChecker,
    repo: &RepositoryContext,
    entry: &ContentEntry,
    records: &mut Vec<LinkRecord>,
) -> anyhow::Result<()> {
    let download_url = entry
        .download_url
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("no download URL"))?;
    let text = github.fetch_raw(download_url).await?;

    for link in extract_links(&text) {
        let full_url = resolve_link(&link, repo);
        let outcome = checker.check(&full_url).await;
        if !outcome.valid {
            records.push(LinkRecord {
                repo: repo.full_name.clone(),
                file: entry.path.clone(),
                link,
                full_url,
                status: outcome.status,
            });
        }
    }

    Ok(())
}

fn is_text_file(path: &str) -> bool {
    TEXT_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}
