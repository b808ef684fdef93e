// src/links/mod.rs
// =============================================================================
// This module turns raw file text into checkable URLs.
//
// Submodules:
// - extract: Pulls candidate link targets out of a block of text
// - resolve: Converts possibly-relative links into absolute GitHub URLs
//
// This file (mod.rs) is the module root - it re-exports the public API so
// callers write `links::extract_links()` instead of reaching into submodules.
// =============================================================================

mod extract;
mod resolve;

pub use extract::extract_links;
pub use resolve::resolve_link;
