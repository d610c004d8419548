use thiserror::Error;

/// Errors from decoding classifier-produced patch metadata.
///
/// Extraction itself never fails: malformed line ranges are clamped or
/// skipped and absent metadata selects the heuristic path. The one fallible
/// seam is the JSON boundary where metadata arrives from the archive API.
/// Callers that hit a decode error should treat the metadata as absent.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("failed to decode patch metadata: {0}")]
    Decode(#[from] serde_json::Error),
}
