// src/checker/mod.rs
// =============================================================================
// This module contains the link validation logic.
//
// Submodules:
// - http: Issues HEAD/GET probes against a URL and classifies the outcome
//
// This file (mod.rs) is the module root - it re-exports the public API that
// other parts of the application use.
// =============================================================================

mod http;

pub use http::{CheckOutcome, LinkChecker, DEFAULT_RETRIES};
