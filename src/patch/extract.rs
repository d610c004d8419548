//! Diff extraction from a single message body.
//!
//! When the classifier recorded diff sections, those line ranges are
//! authoritative and are selected exactly. Bodies without usable metadata go
//! through the scanner in [`crate::patch::heuristic`] instead. Either way the
//! result only ever contains lines physically present in the body, and
//! "no diff here" is an empty string, not an error.

use crate::models::PatchMetadata;
use crate::patch::heuristic;
use crate::patch::lines::body_lines;

/// Extract the diff content of one message.
///
/// Metadata wins when it carries at least one diff section; otherwise the
/// heuristic scanner takes over. A missing or empty body yields `""`.
pub fn extract_patch_text(body: Option<&str>, metadata: Option<&PatchMetadata>) -> String {
    let Some(body) = body else {
        return String::new();
    };
    if body.is_empty() {
        return String::new();
    }

    match metadata {
        Some(meta) if meta.has_diff_sections() => extract_metadata_sections(body, meta),
        _ => heuristic::scan_for_diff(body),
    }
}

/// Collect the lines named by the classifier's diff sections, in metadata
/// order (never re-sorted).
///
/// `end_line` is clamped to the last line of the body. Sections that start
/// past the end, or whose `end_line` precedes their `start_line`, select
/// nothing and are skipped.
fn extract_metadata_sections(body: &str, metadata: &PatchMetadata) -> String {
    let lines = body_lines(body);
    let last = lines.len() - 1;

    let mut selected: Vec<&str> = Vec::new();
    for section in &metadata.diff_sections {
        if section.end_line < section.start_line || section.start_line > last {
            log::debug!(
                "skipping diff section {}..={} over {} body lines",
                section.start_line,
                section.end_line,
                lines.len()
            );
            continue;
        }

        let end = section.end_line.min(last);
        selected.extend_from_slice(&lines[section.start_line..=end]);
    }

    selected.join("\n")
}
