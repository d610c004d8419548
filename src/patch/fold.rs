//! Fold range computation for the collapsed patch view.
//!
//! The reading UI collapses the patch payload of a message behind a single
//! expandable block. The fold range is the minimal line span enclosing every
//! section the classifier recorded — diff hunks, diffstat, trailers, and the
//! `---` separator, which counts as a one-line section.

use crate::models::{FoldRange, PatchMetadata};
use crate::patch::lines::{body_lines, clamp_line};

/// Compute the minimal line range enclosing every patch-related section.
///
/// Returns `None` when metadata is absent, records no sections at all, or
/// the clamped range collapses with `end < start` (a fold lying entirely
/// outside the body). Never returns a zero-length stand-in for "nothing".
pub fn fold_range(body: &str, metadata: Option<&PatchMetadata>) -> Option<FoldRange> {
    let metadata = metadata?;

    let mut bounds: Option<(usize, usize)> = None;
    for (start, end) in section_bounds(metadata) {
        bounds = Some(match bounds {
            Some((lo, hi)) => (lo.min(start), hi.max(end)),
            None => (start, end),
        });
    }
    let (start, end) = bounds?;

    let line_count = body_lines(body).len();
    let start = clamp_line(start, line_count);
    let end = clamp_line(end, line_count);

    if end < start {
        return None;
    }

    Some(FoldRange { start, end })
}

/// Every section of the metadata as `(start, end)` bounds, with the
/// separator widened to a single-line section.
fn section_bounds(metadata: &PatchMetadata) -> impl Iterator<Item = (usize, usize)> + '_ {
    metadata
        .diff_sections
        .iter()
        .chain(metadata.diffstat_section.iter())
        .chain(metadata.trailer_sections.iter())
        .map(|section| (section.start_line, section.end_line))
        .chain(metadata.separator_line.map(|line| (line, line)))
}

/// A body partitioned around its fold range for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldedBody<'a> {
    /// Lines before the fold, shown unfolded.
    pub prefix: Vec<&'a str>,
    /// The collapsible block. Empty when nothing is foldable.
    pub folded: Vec<&'a str>,
    /// Lines after the fold, shown unfolded.
    pub suffix: Vec<&'a str>,
}

/// Slice a body into unfolded prefix, collapsible block, and unfolded suffix.
///
/// Without a fold range — or if the folded block ever slices empty, which a
/// clamped range should not allow — the whole body comes back as the prefix
/// so the renderer shows it unfolded.
pub fn split_at_fold<'a>(body: &'a str, metadata: Option<&PatchMetadata>) -> FoldedBody<'a> {
    let lines = body_lines(body);

    let Some(range) = fold_range(body, metadata) else {
        return FoldedBody {
            prefix: lines,
            folded: Vec::new(),
            suffix: Vec::new(),
        };
    };

    let folded: Vec<&str> = lines[range.start..=range.end].to_vec();
    if folded.is_empty() {
        return FoldedBody {
            prefix: lines,
            folded: Vec::new(),
            suffix: Vec::new(),
        };
    }

    FoldedBody {
        prefix: lines[..range.start].to_vec(),
        folded,
        suffix: lines[range.end + 1..].to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PatchSection;

    fn section(start_line: usize, end_line: usize) -> PatchSection {
        PatchSection {
            start_line,
            end_line,
        }
    }

    fn body_of(n: usize) -> String {
        (0..n).map(|i| format!("line{i}")).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn fold_range_none_without_metadata() {
        assert_eq!(fold_range("a\nb", None), None);
    }

    #[test]
    fn fold_range_none_for_empty_metadata() {
        assert_eq!(fold_range("a\nb", Some(&PatchMetadata::default())), None);
    }

    #[test]
    fn fold_range_spans_all_section_kinds() {
        let body = body_of(12);
        let metadata = PatchMetadata {
            diff_sections: vec![section(5, 8)],
            diffstat_section: Some(section(2, 3)),
            trailer_sections: vec![section(9, 10)],
            separator_line: Some(4),
        };

        assert_eq!(
            fold_range(&body, Some(&metadata)),
            Some(FoldRange { start: 2, end: 10 })
        );
    }

    #[test]
    fn fold_range_separator_alone_is_single_line() {
        let body = body_of(6);
        let metadata = PatchMetadata {
            separator_line: Some(3),
            ..Default::default()
        };

        assert_eq!(
            fold_range(&body, Some(&metadata)),
            Some(FoldRange { start: 3, end: 3 })
        );
    }

    #[test]
    fn fold_range_clamps_into_body() {
        let body = body_of(4);
        let metadata = PatchMetadata {
            diff_sections: vec![section(2, 40)],
            ..Default::default()
        };

        assert_eq!(
            fold_range(&body, Some(&metadata)),
            Some(FoldRange { start: 2, end: 3 })
        );
    }

    #[test]
    fn fold_range_idempotent() {
        let body = body_of(8);
        let metadata = PatchMetadata {
            diff_sections: vec![section(1, 6)],
            ..Default::default()
        };

        assert_eq!(
            fold_range(&body, Some(&metadata)),
            fold_range(&body, Some(&metadata))
        );
    }

    #[test]
    fn fold_range_inverted_bounds_yield_none() {
        let body = body_of(10);
        let metadata = PatchMetadata {
            diff_sections: vec![section(7, 2)],
            ..Default::default()
        };

        assert_eq!(fold_range(&body, Some(&metadata)), None);
    }

    #[test]
    fn split_at_fold_partitions_body() {
        let body = "intro\nmore\n---\ndiff --git a b\n+x\nbye";
        let metadata = PatchMetadata {
            diff_sections: vec![section(3, 4)],
            separator_line: Some(2),
            ..Default::default()
        };

        let folded = split_at_fold(body, Some(&metadata));
        assert_eq!(folded.prefix, vec!["intro", "more"]);
        assert_eq!(folded.folded, vec!["---", "diff --git a b", "+x"]);
        assert_eq!(folded.suffix, vec!["bye"]);

        let mut reassembled = folded.prefix.clone();
        reassembled.extend(&folded.folded);
        reassembled.extend(&folded.suffix);
        assert_eq!(reassembled, body_lines(body));
    }

    #[test]
    fn split_at_fold_whole_body_fold() {
        let body = "diff --git a b\n+x";
        let metadata = PatchMetadata {
            diff_sections: vec![section(0, 1)],
            ..Default::default()
        };

        let folded = split_at_fold(body, Some(&metadata));
        assert!(folded.prefix.is_empty());
        assert_eq!(folded.folded, vec!["diff --git a b", "+x"]);
        assert!(folded.suffix.is_empty());
    }

    #[test]
    fn split_at_fold_unfoldable_body_is_all_prefix() {
        let body = "just\nprose";
        let folded = split_at_fold(body, None);
        assert_eq!(folded.prefix, vec!["just", "prose"]);
        assert!(folded.folded.is_empty());
        assert!(folded.suffix.is_empty());
    }
}
