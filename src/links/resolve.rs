// src/links/resolve.rs
// =============================================================================
// This module converts an extracted link into an absolute, checkable URL.
//
// Rules:
// - Links that already carry an http:// or https:// scheme pass through
//   unchanged, which also makes resolution idempotent.
// - Anything else is treated as a path relative to the repository root and
//   mapped onto a GitHub blob URL for the repository's default branch.
//
// The relative mapping is a heuristic: `../` segments, anchors, and query
// strings are passed through verbatim as part of the path.
// =============================================================================

use crate::github::RepositoryContext;

/// Resolves `link` against `repo`, returning an absolute URL.
pub fn resolve_link(link: &str, repo: &RepositoryContext) -> String {
    if link.starts_with("http://") || link.starts_with("https://") {
        return link.to_string();
    }

    // Relative to the repository root; a single leading slash is dropped.
    let path = link.strip_prefix('/').unwrap_or(link);
    format!(
        "https://github.com/{}/blob/{}/{}",
        repo.full_name, repo.default_branch, path
    )
}
