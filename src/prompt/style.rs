//! Style prompt assembly
//!
//! Builds the instruction sent to the external generator from the user's
//! vocal position and selections, and enforces Suno's style-field length
//! limit on whatever comes back.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::errors::PromptError;
use crate::prompt::presets::VocalPreset;
use crate::prompt::vocal::{VocalCoordinates, vocal_descriptor};

/// Suno's hard limit on the style field, in chars
pub const STYLE_PROMPT_LIMIT: usize = 1000;

const STYLE_TEMPLATE: &str = include_str!("templates/style_prompt.mustache");

/// Which multi-select list a toggle applies to
#[repr(u8)]
#[derive(Serialize_repr, Deserialize_repr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleList {
    Textures = 0,
    Genres = 1,
    Instruments = 2,
}

impl StyleList {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(StyleList::Textures),
            1 => Some(StyleList::Genres),
            2 => Some(StyleList::Instruments),
            _ => None,
        }
    }
}

/// User selections feeding the style prompt
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct StylePromptParams {
    pub vocal: VocalCoordinates,
    pub textures: Vec<String>,
    pub genres: Vec<String>,
    pub instruments: Vec<String>,
    /// Artist to borrow a style from; never named in the output
    pub artist: Option<String>,
}

impl StylePromptParams {
    pub fn list(&self, list: StyleList) -> &[String] {
        match list {
            StyleList::Textures => &self.textures,
            StyleList::Genres => &self.genres,
            StyleList::Instruments => &self.instruments,
        }
    }

    pub fn list_mut(&mut self, list: StyleList) -> &mut Vec<String> {
        match list {
            StyleList::Textures => &mut self.textures,
            StyleList::Genres => &mut self.genres,
            StyleList::Instruments => &mut self.instruments,
        }
    }

    /// Select `item` in `list`, or deselect it if already selected
    pub fn toggle(&mut self, list: StyleList, item: &str) {
        toggle_selection(self.list_mut(list), item);
    }

    /// Store an artist reference; blank input clears it
    pub fn set_artist(&mut self, artist: &str) {
        let artist = artist.trim();
        self.artist = (!artist.is_empty()).then(|| artist.to_string());
    }

    /// Take the pad position and textures from a preset.
    /// Genres, instruments and the artist are left alone.
    pub fn apply_preset(&mut self, preset: &VocalPreset) {
        self.vocal = preset.coordinates();
        self.textures = preset.textures.clone();
    }

    /// Snapshot the vocal settings under `name`
    pub fn to_preset(&self, name: &str) -> VocalPreset {
        VocalPreset::new(name, self.vocal.clamped(), self.textures.clone())
    }

    /// Back to the centered pad with nothing selected
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Serialize)]
struct StyleContext<'a> {
    limit: String,
    vocal: String,
    textures: String,
    genres: String,
    instruments: String,
    artist: &'a str,
}

/// Render the generator instruction for a set of selections
pub fn build_style_instruction(params: &StylePromptParams) -> Result<String, PromptError> {
    let artist = params
        .artist
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .unwrap_or("None");

    let context = StyleContext {
        limit: STYLE_PROMPT_LIMIT.to_string(),
        vocal: vocal_descriptor(params.vocal.clamped()),
        textures: params.textures.join(", "),
        genres: params.genres.join(", "),
        instruments: params.instruments.join(", "),
        artist,
    };

    let template = mustache::compile_str(STYLE_TEMPLATE)?;
    Ok(template.render_to_string(&context)?)
}

/// Trim a generated style prompt and cut it to `STYLE_PROMPT_LIMIT` chars
pub fn clamp_style_prompt(generated: &str) -> String {
    let trimmed = generated.trim();
    match trimmed.char_indices().nth(STYLE_PROMPT_LIMIT) {
        Some((cut, _)) => {
            log::debug!("clamp_style_prompt: truncated {} chars", trimmed.chars().count() - STYLE_PROMPT_LIMIT);
            trimmed[..cut].to_string()
        }
        None => trimmed.to_string(),
    }
}

/// Add `item` to `list` if absent, remove it if present
pub fn toggle_selection(list: &mut Vec<String>, item: &str) {
    if let Some(idx) = list.iter().position(|s| s == item) {
        list.remove(idx);
    } else {
        list.push(item.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> StylePromptParams {
        StylePromptParams {
            vocal: VocalCoordinates::new(70.0, 40.0),
            textures: vec!["Breathy".to_string(), "Clear".to_string()],
            genres: vec!["J-Pop".to_string(), "R&B".to_string()],
            instruments: vec!["Piano".to_string()],
            artist: None,
        }
    }

    #[test]
    fn test_instruction_lists_inputs() {
        let instruction = build_style_instruction(&params()).expect("template renders");
        assert!(instruction.contains("Vocal Characteristics: Female vocals, High pitch/Soprano"));
        assert!(instruction.contains("Vocal Textures: Breathy, Clear"));
        assert!(instruction.contains("Target Genres: J-Pop, R&B"));
        assert!(instruction.contains("Emphasized Instruments: Piano"));
        assert!(instruction.contains("Artist Style Reference: None"));
        assert!(instruction.contains("under 1000 characters"));
    }

    #[test]
    fn test_instruction_with_artist() {
        let mut p = params();
        p.artist = Some("  Some Band ".to_string());
        let instruction = build_style_instruction(&p).expect("template renders");
        assert!(instruction.contains("Artist Style Reference: Some Band"));
    }

    #[test]
    fn test_clamp_style_prompt() {
        assert_eq!(clamp_style_prompt("  pop, rock \n"), "pop, rock");

        let long = "あ".repeat(STYLE_PROMPT_LIMIT + 20);
        let clamped = clamp_style_prompt(&long);
        assert_eq!(clamped.chars().count(), STYLE_PROMPT_LIMIT);

        let exact = "a".repeat(STYLE_PROMPT_LIMIT);
        assert_eq!(clamp_style_prompt(&exact), exact);
    }

    #[test]
    fn test_toggle_by_list() {
        let mut p = params();
        p.toggle(StyleList::Genres, "Enka");
        p.toggle(StyleList::Instruments, "Piano");
        assert_eq!(p.list(StyleList::Genres), ["J-Pop", "R&B", "Enka"]);
        assert!(p.list(StyleList::Instruments).is_empty());
        assert_eq!(StyleList::from_u8(0), Some(StyleList::Textures));
        assert_eq!(StyleList::from_u8(3), None);
    }

    #[test]
    fn test_preset_round_trip_through_params() {
        let mut p = params();
        let preset = p.to_preset("Bright");
        p.reset();
        assert_eq!(p, StylePromptParams::default());

        p.genres.push("Rock".to_string());
        p.apply_preset(&preset);
        assert_eq!(p.vocal, VocalCoordinates::new(70.0, 40.0));
        assert_eq!(p.textures, vec!["Breathy", "Clear"]);
        assert_eq!(p.genres, vec!["Rock"]);
    }

    #[test]
    fn test_set_artist() {
        let mut p = params();
        p.set_artist("  Some Band ");
        assert_eq!(p.artist.as_deref(), Some("Some Band"));
        p.set_artist("   ");
        assert_eq!(p.artist, None);
    }

    #[test]
    fn test_toggle_selection() {
        let mut list = vec!["Pop".to_string()];
        toggle_selection(&mut list, "Rock");
        assert_eq!(list, vec!["Pop", "Rock"]);
        toggle_selection(&mut list, "Pop");
        assert_eq!(list, vec!["Rock"]);
    }
}
