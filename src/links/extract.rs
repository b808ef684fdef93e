// src/links/extract.rs
// =============================================================================
// This module extracts candidate link targets from raw text.
//
// Two rules are applied independently and unioned:
// - Markdown-style [label](target) - captures the target, which may be a
//   relative path like "docs/readme.md"
// - Bare URLs: http:// or https:// followed by a restricted character class
//   (unreserved URL characters plus percent-encoded octets)
//
// Extraction is purely textual. No URL-syntax validation happens here; a
// relative target is resolved later, a garbage target simply fails its
// HTTP check. Exact-string duplicates are collapsed via set semantics.
//
// The bare-URL pattern is deliberately lenient and may keep trailing
// punctuation such as ')' or '.' attached to a match.
// =============================================================================

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

// [label](target) - the label must be non-empty, the target is anything up
// to the closing parenthesis.
fn markdown_link() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[[^\]]+\]\(([^)]+)\)").expect("markdown link pattern"))
}

// Scheme-prefixed URLs. The character class covers alphanumerics, the
// unreserved/sub-delim range $ through _, a handful of extra marks, and
// percent-encoded octets.
fn bare_url() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"https?://(?:[a-zA-Z0-9]|[$-_@.&+]|[!*(),]|%[0-9a-fA-F]{2})+")
            .expect("bare url pattern")
    })
}

/// Extracts all candidate link targets from `text`.
///
/// The result is deduplicated; it is returned sorted so repeated runs over
/// the same input produce the same order.
pub fn extract_links(text: &str) -> Vec<String> {
    let mut found = BTreeSet::new();

    for capture in markdown_link().captures_iter(text) {
        found.insert(capture[1].to_string());
    }

    for m in bare_url().find_iter(text) {
        found.insert(m.as_str().to_string());
    }

    found.into_iter().collect()
}
