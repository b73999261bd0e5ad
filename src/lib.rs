//! Lyric Assistant WASM Module
//!
//! Core of the songwriting assistant: keeps lyrics in a double-spaced
//! editing form, splits them into tagged sections, merges a phonetic rewrite
//! back into the original structure for export, and inserts section tags at
//! the caret. Calls to the AI service stay in JavaScript; this module only
//! ever sees resolved strings.

pub mod text;
pub mod structure;
pub mod prompt;
pub mod session;
pub mod errors;
pub mod api;

// Re-export commonly used types
pub use text::{
    LineKind, LyricText, ViewKind, TextRange, Selection, TagInsertion,
    normalize_for_editing, compress_for_export, append_generated, insert_tag,
};
pub use structure::{Section, MergeStats, parse_sections, merge, merge_with_stats};
pub use session::{SongSession, PhoneticConverter};
pub use errors::{PresetError, CatalogError, PromptError, PhoneticError};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        api::helpers::log_warn(&format!("Logger already initialized: {}", e));
    }

    log::info!("Lyric assistant WASM module initialized");
}
