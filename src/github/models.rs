// src/github/models.rs
// =============================================================================
// serde models for the slices of the GitHub API we consume.
//
// Only the fields this tool reads are declared; serde ignores the rest of
// each response object.
// =============================================================================

use serde::Deserialize;

/// The resolved target account.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub login: String,
}

/// Per-repository context, straight from the repository listing.
///
/// `full_name` and `default_branch` are what relative links are resolved
/// against; nothing else about a repository matters here.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryContext {
    pub name: String,
    pub full_name: String,
    pub default_branch: String,
}

/// One entry of a directory listing from the contents API.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentEntry {
    pub path: String,
    /// "file", "dir", "symlink", or "submodule".
    #[serde(rename = "type")]
    pub kind: String,
    /// Raw-content URL; absent for directories and submodules.
    pub download_url: Option<String>,
}

impl ContentEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == "dir"
    }

    pub fn is_file(&self) -> bool {
        self.kind == "file"
    }
}
