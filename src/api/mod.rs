//! Lyric Assistant WASM API
//!
//! This module provides the JavaScript-facing API for the lyric assistant.
//! It includes shared utilities for serialization, validation, and error
//! handling, and the bindings organized by functional domain.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, validation, error handling, and logging
//! - `lyrics`: Stateless text operations (spacing, sections, merge, tag insertion)
//! - `session`: The WASM-owned song session
//! - `prompt`: Vocabulary, style prompt and vocal presets

pub mod helpers;
pub mod lyrics;
pub mod session;
pub mod prompt;

pub use lyrics::{normalize_for_editing, compress_for_export, merge_structure_and_content, insert_tag};
pub use session::{reset_session, ingest_paste, export_text, lock_session};
