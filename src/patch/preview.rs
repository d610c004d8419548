//! Bounded previews for collapsed message summaries.

use crate::models::PatchMetadata;
use crate::patch::fold::fold_range;
use crate::patch::lines::body_lines;

/// Number of leading body lines used when the patch starts at line zero.
pub const DEFAULT_PREVIEW_LINES: usize = 3;

/// Build a short non-diff preview of a message body.
///
/// Everything before the fold range is the preview; bodies with no fold
/// range come back unchanged, since there is no diff to hide. When the patch
/// starts on the very first line the preview would be empty, so the first
/// `fallback_line_count` lines of the whole body stand in — a non-empty body
/// never previews as empty. Outside that fallback, no line at or beyond
/// `fold.start` ever appears in the preview.
pub fn build_patch_preview(
    body: Option<&str>,
    metadata: Option<&PatchMetadata>,
    fallback_line_count: usize,
) -> String {
    let Some(body) = body else {
        return String::new();
    };

    let Some(fold) = fold_range(body, metadata) else {
        return body.to_string();
    };

    let lines = body_lines(body);
    let cut = fold.start.min(lines.len());
    let prefix = &lines[..cut];

    if prefix.is_empty() {
        return lines[..fallback_line_count.min(lines.len())].join("\n");
    }

    prefix.join("\n")
}
