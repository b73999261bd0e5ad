//! Lyric text API
//!
//! Stateless bindings over the text core: spacing, sections, merge and tag
//! insertion. Caret offsets cross the boundary as UTF-16 code units (what a
//! textarea reports) and are converted to chars here.

use wasm_bindgen::prelude::*;

use crate::api::helpers::serialize;
use crate::structure::{merge_with_stats, parse_sections};
use crate::text::{
    char_offset_to_utf16, insert_tag as insert_tag_chars, utf16_to_char_offset, TagInsertion,
};
use crate::text::spacing;
use crate::{wasm_info, wasm_warn};

/// Double-space pasted or generated text for editing
#[wasm_bindgen(js_name = normalizeForEditing)]
pub fn normalize_for_editing(raw: &str) -> String {
    spacing::normalize_for_editing(raw)
}

/// Collapse double newlines for the clipboard
#[wasm_bindgen(js_name = compressForExport)]
pub fn compress_for_export(text: &str) -> String {
    spacing::compress_for_export(text)
}

/// Append generated lyrics to the existing structure text
#[wasm_bindgen(js_name = appendGeneratedLyrics)]
pub fn append_generated_lyrics(existing: &str, generated: &str) -> String {
    spacing::append_generated(existing, generated)
}

/// Split text into `{ title, content }` sections
#[wasm_bindgen(js_name = parseSections)]
pub fn parse_sections_js(text: &str) -> Result<JsValue, JsValue> {
    let sections = parse_sections(text);
    wasm_info!("parseSections: {} sections", sections.len());
    serialize(&sections, "Section serialization error")
}

/// Rebuild the structure text with the content view's line text
#[wasm_bindgen(js_name = mergeStructureAndContent)]
pub fn merge_structure_and_content(structure: &str, content: &str) -> String {
    let (merged, stats) = merge_with_stats(structure, content);
    if !stats.is_aligned() {
        wasm_warn!(
            "mergeStructureAndContent: {} missing, {} unused content lines",
            stats.missing,
            stats.unused
        );
    }
    merged
}

/// Insert `tag` over the UTF-16 selection `[start, end)`.
///
/// Returns `{ newText, newSelectionStart, newSelectionEnd }` with the
/// selection in UTF-16 units, ready for `setSelectionRange`.
#[wasm_bindgen(js_name = insertTag)]
pub fn insert_tag(text: &str, start: usize, end: usize, tag: &str) -> Result<JsValue, JsValue> {
    let insertion = insert_tag_utf16(text, start, end, tag);
    serialize(&insertion, "Tag insertion serialization error")
}

/// `insert_tag` with UTF-16 offsets in and out
pub fn insert_tag_utf16(text: &str, start: usize, end: usize, tag: &str) -> TagInsertion {
    let char_start = utf16_to_char_offset(text, start);
    let char_end = utf16_to_char_offset(text, end);
    let insertion = insert_tag_chars(text, char_start, char_end, tag);
    to_utf16_selection(insertion)
}

/// Re-express a char-offset insertion in UTF-16 units
pub(crate) fn to_utf16_selection(insertion: TagInsertion) -> TagInsertion {
    let new_selection_start = char_offset_to_utf16(&insertion.new_text, insertion.new_selection_start);
    let new_selection_end = char_offset_to_utf16(&insertion.new_text, insertion.new_selection_end);
    TagInsertion {
        new_selection_start,
        new_selection_end,
        ..insertion
    }
}
