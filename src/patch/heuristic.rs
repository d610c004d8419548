//! Fallback diff detection for bodies without classifier metadata.

use regex::Regex;
use std::sync::OnceLock;

/// Lazy-initialized regex matching the first line of unified diff content
static DIFF_START_REGEX: OnceLock<Regex> = OnceLock::new();

/// Get the compiled diff-start regex
///
/// Matches lines that begin with:
/// - `diff --git` - git diff header
/// - `---` / `+++` - old/new file markers
/// - `@@` - hunk header
fn diff_start_regex() -> &'static Regex {
    DIFF_START_REGEX.get_or_init(|| {
        Regex::new(r"^(?:diff --git|---|\+\+\+|@@)").expect("Invalid diff start regex")
    })
}

/// Scan a body for inline diff content.
///
/// A single boolean tracks the scan: before the first line matching the
/// diff-start pattern nothing is emitted; from that line on, every remaining
/// line is emitted, and there is no transition back. Prose trailing a real
/// patch is therefore kept with the patch; this is a known limitation of the
/// everything-after-the-first-marker policy, not a full diff parse.
///
/// Returns `""` when no line ever matches.
pub fn scan_for_diff(body: &str) -> String {
    let mut in_diff = false;
    let mut collected: Vec<&str> = Vec::new();

    for line in body.split('\n') {
        if !in_diff && diff_start_regex().is_match(line) {
            in_diff = true;
        }
        if in_diff {
            collected.push(line);
        }
    }

    collected.join("\n")
}
