//! Style prompt support
//!
//! Everything the prompt generator needs that isn't a call to the AI
//! service itself.
//!
//! - `vocal`: Vocal pad coordinates and their wording
//! - `style`: Generator instruction assembly and the 1000-char limit
//! - `catalog`: Embedded tag vocabulary and selectable style lists
//! - `presets`: Named vocal presets, persisted as JSON
//! - `analysis`: Folding artist/voice analysis results into the selections

pub mod vocal;
pub mod style;
pub mod catalog;
pub mod presets;
pub mod analysis;

pub use vocal::{VocalCoordinates, vocal_descriptor};
pub use style::{StyleList, StylePromptParams, build_style_instruction, clamp_style_prompt, toggle_selection, STYLE_PROMPT_LIMIT};
pub use catalog::{TagCategory, TagOption, Vocabulary, tag_catalog, vocabulary, wrap_custom_tag};
pub use presets::{PresetStore, VocalPreset};
pub use analysis::{AnalysisResult, apply_analysis, match_vocabulary};
