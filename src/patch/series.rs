//! Patch series markers in email subjects
//!
//! Mailing list patches usually arrive as a series with subjects like:
//! - [PATCH 0/5] Cover letter describing the series
//! - [PATCH 1/5] First actual patch
//! - [PATCH v2 3/10] Versioned resend
//!
//! The "included patches" listing next to an aggregated thread diff labels
//! each contributor with its position in the series, parsed here. Threading
//! itself never uses this — it is display metadata only.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::PatchSeriesInfo;

/// Lazy-initialized regex for matching patch series patterns
static SERIES_REGEX: OnceLock<Regex> = OnceLock::new();

/// Get the compiled patch series regex
///
/// Pattern matches:
/// - [PATCH 2/5] - basic patch series
/// - [PATCH v2 3/10] - versioned series
/// - [RFC PATCH 1/3] - RFC patches
/// - [PATCH v3 0/5] - versioned cover letter
fn series_regex() -> &'static Regex {
    SERIES_REGEX.get_or_init(|| {
        Regex::new(r"\[.*?PATCH\s*(?:v(\d+))?\s*(\d+)/(\d+)\s*\]")
            .expect("Invalid patch series regex")
    })
}

/// Extract patch series position from an email subject.
///
/// Returns `None` for subjects without a series marker, including plain
/// `[PATCH]` subjects that are not part of a numbered series.
pub fn patch_series_info(subject: &str) -> Option<PatchSeriesInfo> {
    let caps = series_regex().captures(subject)?;

    let version = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok());
    let number = caps.get(2)?.as_str().parse::<u32>().ok()?;
    let total = caps.get(3)?.as_str().parse::<u32>().ok()?;

    Some(PatchSeriesInfo {
        version,
        number,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_series() {
        assert_eq!(
            patch_series_info("[PATCH 2/5] Fix memory leak"),
            Some(PatchSeriesInfo {
                version: None,
                number: 2,
                total: 5
            })
        );
    }

    #[test]
    fn test_versioned_series() {
        assert_eq!(
            patch_series_info("[PATCH v2 3/10] Add new feature"),
            Some(PatchSeriesInfo {
                version: Some(2),
                number: 3,
                total: 10
            })
        );
    }

    #[test]
    fn test_cover_letter() {
        assert_eq!(
            patch_series_info("[PATCH v3 0/5] Cover letter"),
            Some(PatchSeriesInfo {
                version: Some(3),
                number: 0,
                total: 5
            })
        );
    }

    #[test]
    fn test_rfc_series() {
        assert_eq!(
            patch_series_info("[RFC PATCH 1/3] Experimental feature"),
            Some(PatchSeriesInfo {
                version: None,
                number: 1,
                total: 3
            })
        );
    }

    #[test]
    fn test_reply_prefix_still_matches() {
        assert_eq!(
            patch_series_info("Re: [PATCH 4/4] Cleanup"),
            Some(PatchSeriesInfo {
                version: None,
                number: 4,
                total: 4
            })
        );
    }

    #[test]
    fn test_no_marker() {
        assert_eq!(patch_series_info("Regular email subject"), None);
        assert_eq!(patch_series_info("[PATCH] Single patch"), None);
    }
}
