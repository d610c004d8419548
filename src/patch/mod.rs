//! Patch extraction and folding over email bodies
//!
//! Mailing list messages mix conversation and unified-diff payloads in one
//! plain-text body. This module turns such a body, plus optional classifier
//! metadata, into the precise strings and line ranges the reading UI needs.
//!
//! ## Pipeline
//!
//! 1. **Line normalization** (`lines`): the body is split on `'\n'` into an
//!    indexed sequence; every other component works on that sequence.
//! 2. **Extraction** (`extract`): classifier-recorded diff sections are
//!    selected exactly; bodies without usable metadata fall back to the
//!    line scanner in `heuristic`.
//! 3. **Folding** (`fold`) and **previews** (`preview`): independent
//!    consumers of the same metadata, producing the collapse range and a
//!    bounded non-diff summary for the UI.
//! 4. **Aggregation** (`thread`): per-message extraction folded across an
//!    ordered thread into one combined diff with provenance.
//!
//! All of it is pure and synchronous; `cache` adds optional caller-owned
//! memoization keyed on content.

pub mod cache;
pub mod extract;
pub mod fold;
pub mod heuristic;
pub mod lines;
pub mod preview;
pub mod series;
pub mod thread;

// Re-export main types and functions
pub use cache::ExtractionCache;
pub use extract::extract_patch_text;
pub use fold::{FoldedBody, fold_range, split_at_fold};
pub use preview::{DEFAULT_PREVIEW_LINES, build_patch_preview};
pub use series::patch_series_info;
pub use thread::aggregate_thread_diff;
