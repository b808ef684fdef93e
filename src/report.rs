// src/report.rs
// =============================================================================
// CSV report of broken links.
//
// Columns: Repository, File, Link, Full URL, Status Code - one row per
// record, in the order the crawl accumulated them. A record without a
// numeric status (transport failure) renders the literal marker "Error".
//
// No file is created when there is nothing to report. Fields containing a
// separator, quote, or newline are quoted per RFC 4180.
// =============================================================================

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::crawl::LinkRecord;

const HEADER: &str = "Repository,File,Link,Full URL,Status Code";

/// Writes `records` to `path`. Returns true when a file was written.
pub fn write_report(records: &[LinkRecord], path: &Path) -> Result<bool> {
    if records.is_empty() {
        println!("✅ No broken links found.");
        return Ok(false);
    }

    let mut out = String::new();
    out.push_str(HEADER);
    out.push_str("\r\n");
    for record in records {
        let status = record
            .status
            .map(|s| s.to_string())
            .unwrap_or_else(|| "Error".to_string());
        let row = [
            record.repo.as_str(),
            record.file.as_str(),
            record.link.as_str(),
            record.full_url.as_str(),
            status.as_str(),
        ];
        let cells: Vec<Cow<'_, str>> = row.iter().map(|f| csv_field(f)).collect();
        out.push_str(&cells.join(","));
        out.push_str("\r\n");
    }

    fs::write(path, out).with_context(|| format!("failed to write {}", path.display()))?;
    println!("📄 Broken links written to {}", path.display());
    Ok(true)
}

// RFC 4180 quoting: wrap in double quotes when the field contains a comma,
// quote, or line break; embedded quotes are doubled.
fn csv_field(field: &str) -> Cow<'_, str> {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
