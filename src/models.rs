use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::MetadataError;

// ===== Patch Metadata (produced by the upstream classifier) =====

/// One contiguous span of patch-related lines.
///
/// Line numbers are zero-based offsets into the body split on `'\n'`,
/// inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchSection {
    pub start_line: usize,
    pub end_line: usize,
}

/// Line-range metadata recorded by the classifier for an email body.
///
/// Stored alongside the email as a JSON value and handed to the renderer
/// as-is; [`PatchMetadata::from_value`] is the decode boundary. Every field
/// defaults so partial classifier output still decodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchMetadata {
    /// Inline diff hunks, in body order as the classifier saw them.
    #[serde(default)]
    pub diff_sections: Vec<PatchSection>,
    /// The diffstat block, when one precedes the diff.
    #[serde(default)]
    pub diffstat_section: Option<PatchSection>,
    /// Trailer blocks (Signed-off-by and friends).
    #[serde(default)]
    pub trailer_sections: Vec<PatchSection>,
    /// The `---` separator between the commit message and the patch payload.
    #[serde(default)]
    pub separator_line: Option<usize>,
}

impl PatchMetadata {
    /// Decode metadata from the JSON value stored on an email row.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, MetadataError> {
        Ok(serde_json::from_value(value.clone())?)
    }

    /// True when the classifier marked at least one inline diff section.
    pub fn has_diff_sections(&self) -> bool {
        !self.diff_sections.is_empty()
    }

    /// True when no section of any kind was recorded.
    pub fn is_empty(&self) -> bool {
        self.diff_sections.is_empty()
            && self.diffstat_section.is_none()
            && self.trailer_sections.is_empty()
            && self.separator_line.is_none()
    }
}

// ===== Fold Range =====

/// Minimal line range enclosing every patch-related section of a body.
///
/// Inclusive on both ends. Lines `[0, start)` are the unfolded prefix,
/// `[start, end]` the collapsible block, `(end, line_count)` the unfolded
/// suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoldRange {
    pub start: usize,
    pub end: usize,
}

// ===== Thread Aggregation =====

/// Identity of an email, as surfaced in the "included patches" listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRef {
    pub id: i32,
    pub message_id: String,
    pub subject: String,
    pub date: DateTime<Utc>,
}

/// One message of an already-ordered thread.
///
/// Thread ordering (chronological or hierarchical) is the thread view's
/// responsibility; aggregation preserves whatever order it is given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadMessage {
    pub email: EmailRef,
    pub body: Option<String>,
    pub patch_metadata: Option<PatchMetadata>,
}

/// Combined diff view over a whole thread.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedThreadDiff {
    pub combined_text: String,
    pub contributing_emails: Vec<EmailRef>,
}

// ===== Patch Series =====

/// Position of an email inside a patch series, parsed from its subject.
///
/// `[PATCH 2/5] Fix leak` yields `{ version: None, number: 2, total: 5 }`;
/// `[PATCH v3 0/5] ...` marks the cover letter of a v3 series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchSeriesInfo {
    pub version: Option<u32>,
    pub number: u32,
    pub total: u32,
}
