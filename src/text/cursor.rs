//! Caret, selection and tag insertion
//!
//! Positions are `char` offsets into the whole buffer (not line/column), the
//! same shape a textarea reports through `selectionStart`/`selectionEnd`.
//! Conversion from the browser's UTF-16 offsets happens in `offsets`.

use serde::{Deserialize, Serialize};

/// A range of text from start (inclusive) to end (exclusive), in chars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Order the endpoints and clamp both to `max`
    pub fn normalized(&self, max: usize) -> Self {
        let a = self.start.min(max);
        let b = self.end.min(max);
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if a position is contained within this range
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }
}

/// Selection state (anchor + head)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Where the selection started
    pub anchor: usize,
    /// Current caret position
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.head
    }

    /// Get the range covered by this selection (ordered start to end)
    pub fn range(&self) -> TextRange {
        TextRange::new(self.anchor.min(self.head), self.anchor.max(self.head))
    }
}

/// Result of inserting a tag into a buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagInsertion {
    pub new_text: String,
    /// First char of the inserted tag
    pub new_selection_start: usize,
    /// One past the last char of the inserted tag
    pub new_selection_end: usize,
}

impl TagInsertion {
    pub fn selection(&self) -> Selection {
        Selection::new(self.new_selection_start, self.new_selection_end)
    }
}

/// Byte index of the `pos`-th char, or `text.len()` past the end
pub fn byte_index(text: &str, pos: usize) -> usize {
    text.char_indices()
        .nth(pos)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

/// Insert `tag` over the selection `[caret_start, caret_end)`.
///
/// A non-empty selection is replaced by the tag. The returned selection
/// spans exactly the inserted chars so the caller can highlight them.
/// Offsets past the end clamp to the text length and reversed ranges are
/// reordered. The tag is inserted as-is, with no bracket validation.
pub fn insert_tag(text: &str, caret_start: usize, caret_end: usize, tag: &str) -> TagInsertion {
    let char_len = text.chars().count();
    let range = TextRange::new(caret_start, caret_end).normalized(char_len);

    if range.start != caret_start.min(caret_end) || range.end != caret_start.max(caret_end) {
        log::warn!(
            "insert_tag: caret {}..{} clamped to {}..{} (text has {} chars)",
            caret_start,
            caret_end,
            range.start,
            range.end,
            char_len
        );
    }

    let before = &text[..byte_index(text, range.start)];
    let after = &text[byte_index(text, range.end)..];

    let mut new_text = String::with_capacity(before.len() + tag.len() + after.len());
    new_text.push_str(before);
    new_text.push_str(tag);
    new_text.push_str(after);

    TagInsertion {
        new_text,
        new_selection_start: range.start,
        new_selection_end: range.start + tag.chars().count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_at_caret() {
        let result = insert_tag("abcdef", 2, 2, "[X]");
        assert_eq!(result.new_text, "ab[X]cdef");
        assert_eq!(result.new_selection_start, 2);
        assert_eq!(result.new_selection_end, 5);
    }

    #[test]
    fn test_insert_replaces_selection() {
        let result = insert_tag("abcdef", 1, 4, "[Y]");
        assert_eq!(result.new_text, "a[Y]ef");
        assert_eq!(result.selection().range(), TextRange::new(1, 4));
    }

    #[test]
    fn test_insert_into_empty_text() {
        let result = insert_tag("", 0, 0, "[Intro]");
        assert_eq!(result.new_text, "[Intro]");
        assert_eq!(result.new_selection_start, 0);
        assert_eq!(result.new_selection_end, 7);
    }

    #[test]
    fn test_insert_empty_tag_deletes_selection() {
        let result = insert_tag("abcdef", 1, 3, "");
        assert_eq!(result.new_text, "adef");
        assert!(result.selection().is_collapsed());
    }

    #[test]
    fn test_insert_counts_chars_not_bytes() {
        let result = insert_tag("あいう", 1, 1, "[サビ]");
        assert_eq!(result.new_text, "あ[サビ]いう");
        assert_eq!(result.new_selection_start, 1);
        assert_eq!(result.new_selection_end, 5);
    }

    #[test]
    fn test_insert_clamps_out_of_range() {
        let result = insert_tag("abc", 10, 12, "[X]");
        assert_eq!(result.new_text, "abc[X]");
        assert_eq!(result.new_selection_start, 3);
        assert_eq!(result.new_selection_end, 6);
    }

    #[test]
    fn test_insert_reversed_range() {
        let result = insert_tag("abcdef", 4, 1, "[Y]");
        assert_eq!(result.new_text, "a[Y]ef");
        assert_eq!(result.new_selection_start, 1);
    }

    #[test]
    fn test_unbracketed_tag_accepted() {
        let result = insert_tag("ab", 1, 1, "Ad-lib");
        assert_eq!(result.new_text, "aAd-libb");
    }

    #[test]
    fn test_selection_range_backward() {
        let sel = Selection::new(5, 2);
        assert_eq!(sel.range(), TextRange::new(2, 5));
        assert!(!sel.is_collapsed());
    }

    #[test]
    fn test_text_range_contains() {
        let range = TextRange::new(2, 5);
        assert!(range.contains(2));
        assert!(range.contains(4));
        assert!(!range.contains(5)); // Exclusive end
        assert_eq!(range.len(), 3);
    }
}
