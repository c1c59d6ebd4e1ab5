//! Search-match highlighting for model labels

use super::search::match_len_at;

/// A run of label text, either matching the search query or not
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Slice of the original label
    pub text: &'a str,
    /// Whether this run matched the query
    pub emphasized: bool,
}

impl<'a> Segment<'a> {
    /// Plain, non-matching text
    #[must_use]
    pub const fn plain(text: &'a str) -> Self {
        Self {
            text,
            emphasized: false,
        }
    }

    /// Matching text
    #[must_use]
    pub const fn emphasized(text: &'a str) -> Self {
        Self {
            text,
            emphasized: true,
        }
    }
}

/// Split `label` on case-insensitive occurrences of `query`.
///
/// Matches are found left to right without overlap. Empty runs are dropped,
/// so an empty label yields no segments and an empty query yields the whole
/// label as one plain segment.
#[must_use]
pub fn highlight_segments<'a>(label: &'a str, query: &str) -> Vec<Segment<'a>> {
    if label.is_empty() {
        return Vec::new();
    }
    if query.is_empty() {
        return vec![Segment::plain(label)];
    }

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < label.len() {
        match match_len_at(&label[pos..], query) {
            Some(len) if len > 0 => {
                if plain_start < pos {
                    segments.push(Segment::plain(&label[plain_start..pos]));
                }
                segments.push(Segment::emphasized(&label[pos..pos + len]));
                pos += len;
                plain_start = pos;
            }
            _ => {
                pos += label[pos..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    if plain_start < label.len() {
        segments.push(Segment::plain(&label[plain_start..]));
    }

    segments
}
