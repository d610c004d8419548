//! Content-keyed memoization for per-message extraction.
//!
//! Extraction is recomputed on every render. A render host that redraws the
//! same messages can hold an `ExtractionCache` and reuse results for
//! unchanged `(body, metadata)` pairs. Each host owns its own instance —
//! there is no global cache — so concurrent renders of different messages
//! never share mutable state.

use std::sync::Arc;

use dashmap::DashMap;
use sha2::{Digest, Sha256};

use crate::models::{PatchMetadata, PatchSection};
use crate::patch::extract::extract_patch_text;

/// Cache key: SHA-256 over the body bytes and the metadata section bounds.
type ContentKey = [u8; 32];

/// Thread-safe memo table for extracted diffs, keyed by content.
#[derive(Debug, Default)]
pub struct ExtractionCache {
    entries: DashMap<ContentKey, Arc<str>>,
}

impl ExtractionCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Return the extracted diff for `(body, metadata)`, computing on miss.
    ///
    /// Extraction is pure, so a racing double-compute for the same key is
    /// harmless: both sides produce identical text.
    pub fn get_or_extract(&self, body: Option<&str>, metadata: Option<&PatchMetadata>) -> Arc<str> {
        let key = content_key(body, metadata);

        if let Some(hit) = self.entries.get(&key) {
            return Arc::clone(&hit);
        }

        let extracted: Arc<str> = Arc::from(extract_patch_text(body, metadata));
        self.entries.insert(key, Arc::clone(&extracted));
        extracted
    }

    /// Number of distinct `(body, metadata)` pairs cached so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Hash body and metadata into a fixed-size key.
///
/// Presence tags keep `None`, `Some` empty, and absent collections from
/// colliding; lengths prefix the variable parts so concatenations cannot
/// alias each other.
fn content_key(body: Option<&str>, metadata: Option<&PatchMetadata>) -> ContentKey {
    let mut hasher = Sha256::new();

    match body {
        Some(body) => {
            hasher.update([1u8]);
            hasher.update((body.len() as u64).to_le_bytes());
            hasher.update(body.as_bytes());
        }
        None => hasher.update([0u8]),
    }

    match metadata {
        Some(meta) => {
            hasher.update([1u8]);
            hash_sections(&mut hasher, &meta.diff_sections);
            match &meta.diffstat_section {
                Some(section) => {
                    hasher.update([1u8]);
                    hash_section(&mut hasher, section);
                }
                None => hasher.update([0u8]),
            }
            hash_sections(&mut hasher, &meta.trailer_sections);
            match meta.separator_line {
                Some(line) => {
                    hasher.update([1u8]);
                    hasher.update((line as u64).to_le_bytes());
                }
                None => hasher.update([0u8]),
            }
        }
        None => hasher.update([0u8]),
    }

    hasher.finalize().into()
}

fn hash_sections(hasher: &mut Sha256, sections: &[PatchSection]) {
    hasher.update((sections.len() as u64).to_le_bytes());
    for section in sections {
        hash_section(hasher, section);
    }
}

fn hash_section(hasher: &mut Sha256, section: &PatchSection) {
    hasher.update((section.start_line as u64).to_le_bytes());
    hasher.update((section.end_line as u64).to_le_bytes());
}
