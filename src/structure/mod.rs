//! Layer 1: Song Structure
//!
//! Derives song structure from Layer 0 text: titled sections, and the
//! recombination of the structure and content views for export.
//!
//! ## Architecture
//!
//! Layer 1 is stateless. It analyzes text on demand and returns derived
//! values; nothing is stored between calls.
//!
//! ## Modules
//!
//! - `sections`: Section tagger (split at bracketed tag lines)
//! - `merge`: Structure-content merge engine

pub mod sections;
pub mod merge;

// Re-exports for convenience
pub use sections::{Section, parse_sections, INTRO_TITLE, WHOLE_SONG_TITLE};
pub use merge::{merge, merge_with_stats, pure_content_lines, MergeStats};
