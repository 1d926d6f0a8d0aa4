//! Rightmost placeholder-run scanning.

/// Character that requests frame numbering in an output template.
pub const PLACEHOLDER: char = '#';

/// A template split around its rightmost run of placeholder characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderRun<'a> {
    /// Text before the run.
    pub prefix: &'a str,
    /// Number of placeholder characters in the run (always >= 1).
    pub run_length: usize,
    /// Text after the run.
    pub remainder: &'a str,
}

/// Finds the rightmost maximal run of `#` in `text`.
///
/// Returns `None` when the text has no placeholder at all. Earlier runs are
/// left untouched inside `prefix`.
pub fn scan(text: &str) -> Option<PlaceholderRun<'_>> {
    let end = text.rfind(PLACEHOLDER)? + PLACEHOLDER.len_utf8();
    let start = text[..end]
        .rfind(|c: char| c != PLACEHOLDER)
        .map(|i| i + text[i..].chars().next().map_or(1, char::len_utf8))
        .unwrap_or(0);

    Some(PlaceholderRun {
        prefix: &text[..start],
        run_length: end - start,
        remainder: &text[end..],
    })
}
