//! Thread-level aggregation of per-message diffs.

use crate::models::{AggregatedThreadDiff, ThreadMessage};
use crate::patch::extract::extract_patch_text;

/// Merge the diff content of every message in a thread into one view.
///
/// Messages are visited in the order given — thread ordering, chronological
/// or hierarchical, is the thread view's responsibility. Each message
/// contributes its extracted diff with trailing whitespace trimmed; messages
/// that contribute nothing are left out of both the combined text and the
/// contributor listing. Contributions are joined with one blank line, in
/// order, with no hunk merging, no dedup, and no reordering by file.
///
/// A thread with zero qualifying messages yields an empty combined text and
/// an empty contributor list.
pub fn aggregate_thread_diff(messages: &[ThreadMessage]) -> AggregatedThreadDiff {
    let mut parts: Vec<String> = Vec::new();
    let mut contributing = Vec::new();

    for message in messages {
        let extracted =
            extract_patch_text(message.body.as_deref(), message.patch_metadata.as_ref());
        let trimmed = extracted.trim_end();
        if trimmed.is_empty() {
            continue;
        }

        log::trace!(
            "email {} contributes {} diff lines",
            message.email.message_id,
            trimmed.split('\n').count()
        );

        parts.push(trimmed.to_string());
        contributing.push(message.email.clone());
    }

    log::debug!(
        "aggregated thread diff from {} of {} messages",
        contributing.len(),
        messages.len()
    );

    AggregatedThreadDiff {
        combined_text: parts.join("\n\n"),
        contributing_emails: contributing,
    }
}
