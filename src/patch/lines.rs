//! Line indexing over raw message bodies.
//!
//! Classifier line numbers are zero-based offsets into the body split on
//! `'\n'`. The split is done here, once, the same way for every component.
//! `str::lines` would be wrong for this: it drops the empty slot after a
//! trailing newline and swallows `\r`, shifting indices relative to what the
//! classifier recorded.

/// Split a message body into its indexable line sequence.
///
/// Never empty: even `""` splits into a single empty line.
pub fn body_lines(body: &str) -> Vec<&str> {
    body.split('\n').collect()
}

/// Clamp a line index into `[0, line_count - 1]`.
pub(crate) fn clamp_line(index: usize, line_count: usize) -> usize {
    index.min(line_count.saturating_sub(1))
}
