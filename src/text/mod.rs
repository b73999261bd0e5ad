//! Layer 0: Lyric Text Core
//!
//! Pure text handling with no knowledge of songs beyond bracketed tag lines.
//! Everything here is a total function over strings.
//!
//! ## Modules
//!
//! - `line`: Line classification (tag / blank / content) and lyric views
//! - `spacing`: Double-spacing on ingestion, compression on export
//! - `cursor`: Caret, selection and tag insertion
//! - `offsets`: UTF-16 <-> char offset conversion for browser textareas

pub mod line;
pub mod spacing;
pub mod cursor;
pub mod offsets;

// Re-exports for convenience
pub use line::{LineKind, LyricText, ViewKind, is_tag_line, split_lines};
pub use spacing::{normalize_for_editing, compress_for_export, append_generated, normalize_line_endings};
pub use cursor::{TextRange, Selection, TagInsertion, insert_tag};
pub use offsets::{utf16_to_char_offset, char_offset_to_utf16};
