//! UTF-16 <-> char offset conversion
//!
//! Browser textareas measure `selectionStart`/`selectionEnd` in UTF-16 code
//! units. The core works in chars. Lyrics are mostly BMP (kana, kanji) where
//! the two agree, but emoji and rare kanji are surrogate pairs.

/// Convert a UTF-16 offset into a char offset.
///
/// An offset landing inside a surrogate pair resolves to the char that
/// contains it. Offsets past the end clamp to the char count.
pub fn utf16_to_char_offset(text: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (idx, ch) in text.chars().enumerate() {
        if units >= utf16_offset {
            return idx;
        }
        units += ch.len_utf16();
        if units > utf16_offset {
            return idx;
        }
    }
    text.chars().count()
}

/// Convert a char offset into a UTF-16 offset, clamping past the end
pub fn char_offset_to_utf16(text: &str, char_offset: usize) -> usize {
    text.chars().take(char_offset).map(char::len_utf16).sum()
}
