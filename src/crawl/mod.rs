// src/crawl/mod.rs
// =============================================================================
// This module walks a repository's file tree and validates the links it
// contains.
//
// Submodules:
// - walk: depth-first traversal over the contents API plus the per-file
//   extract -> resolve -> check pipeline
// =============================================================================

mod walk;

pub use walk::{crawl_repository, LinkRecord};
