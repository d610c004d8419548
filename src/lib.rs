//! Patch extraction core for a mailing-list archive browser.
//!
//! Mailing list emails routinely carry unified diffs inline in their bodies.
//! This crate takes a raw body string plus optional classifier metadata and
//! produces everything the reading UI needs to render patches sensibly:
//!
//! - the diff content of a single message ([`extract_patch_text`])
//! - the collapsible line range and its prefix/folded/suffix split
//!   ([`fold_range`], [`split_at_fold`])
//! - a short non-diff preview for collapsed summaries
//!   ([`build_patch_preview`])
//! - one combined diff over a whole thread, with provenance
//!   ([`aggregate_thread_diff`])
//!
//! Every operation is a pure function of `(body, metadata)`, total over its
//! inputs, and cheap enough to recompute per render. [`ExtractionCache`]
//! offers optional content-keyed memoization for render hosts that want it.

pub mod error;
pub mod models;
pub mod patch;

pub use error::MetadataError;
pub use models::{
    AggregatedThreadDiff, EmailRef, FoldRange, PatchMetadata, PatchSection, PatchSeriesInfo,
    ThreadMessage,
};
pub use patch::{
    DEFAULT_PREVIEW_LINES, ExtractionCache, FoldedBody, aggregate_thread_diff,
    build_patch_preview, extract_patch_text, fold_range, patch_series_info, split_at_fold,
};
