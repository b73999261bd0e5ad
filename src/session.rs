//! Song editing session
//!
//! The single session-scoped state passed between the pure text core and the
//! interactive shell: both views of the current song, which view is active,
//! and the style prompt selections. Exactly one song is edited at a time and
//! only the active view is editable.

use serde::{Deserialize, Serialize};

use crate::errors::{PhoneticError, PresetError, PromptError};
use crate::prompt::analysis::{apply_analysis, AnalysisResult};
use crate::prompt::catalog::vocabulary;
use crate::prompt::presets::{PresetStore, VocalPreset};
use crate::prompt::style::{build_style_instruction, StyleList, StylePromptParams};
use crate::prompt::vocal::VocalCoordinates;
use crate::structure::{merge, parse_sections, Section};
use crate::text::{
    append_generated, compress_for_export, insert_tag, normalize_for_editing, LyricText,
    TagInsertion, ViewKind,
};

/// Boundary to the external phonetic conversion service.
///
/// Implementations return a content view whose non-blank, non-tag lines
/// follow the structure text line for line. The merge tolerates drift.
pub trait PhoneticConverter {
    fn convert(&self, structure: &str) -> Result<String, PhoneticError>;
}

impl<F> PhoneticConverter for F
where
    F: Fn(&str) -> Result<String, PhoneticError>,
{
    fn convert(&self, structure: &str) -> Result<String, PhoneticError> {
        self(structure)
    }
}

/// Complete session state
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SongSession {
    /// Structure view (double-spaced, authoritative for tags)
    pub original: LyricText,

    /// Content view (phonetic rewrite of `original`)
    pub phonetic: LyricText,

    /// View currently shown and editable
    pub active: ViewKind,

    /// Whether the active view is in raw-edit mode
    pub editing: bool,

    /// Section chosen for per-section work, if any
    pub selected_section: Option<usize>,

    /// Style prompt selections
    pub style: StylePromptParams,
}

impl Default for SongSession {
    fn default() -> Self {
        Self {
            original: LyricText::structure(""),
            phonetic: LyricText::content(""),
            active: ViewKind::default(),
            editing: false,
            selected_section: None,
            style: StylePromptParams::default(),
        }
    }
}

impl SongSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the structure view with freshly pasted text.
    ///
    /// Returns the normalized text, which is what should be sent for
    /// phonetic conversion.
    pub fn ingest_paste(&mut self, raw: &str) -> &str {
        self.original.text = normalize_for_editing(raw);
        self.editing = false;
        log::info!(
            "Ingested paste: {} content lines, tags {:?}",
            self.original.content_line_count(),
            self.original.tag_labels()
        );
        self.original.as_str()
    }

    /// Append generated lyrics to the structure view.
    ///
    /// Returns `false` (and changes nothing) when the generator produced no
    /// text.
    pub fn ingest_generated(&mut self, generated: &str) -> bool {
        if generated.trim().is_empty() {
            log::warn!("Lyric generation returned no text");
            return false;
        }
        self.original.text = append_generated(self.original.as_str(), generated);
        true
    }

    /// Store the result of a phonetic conversion.
    ///
    /// On failure the content view is left as it was and the error is handed
    /// back for display.
    pub fn apply_phonetic(&mut self, result: Result<String, PhoneticError>) -> Result<(), PhoneticError> {
        match result {
            Ok(text) => {
                self.phonetic.text = text.trim().to_string();
                let expected = self.original.content_line_count();
                let received = self.phonetic.content_line_count();
                if expected != received {
                    log::warn!(
                        "Phonetic view has {} content lines, structure has {}",
                        received,
                        expected
                    );
                }
                Ok(())
            }
            Err(e) => {
                log::error!("Phonetic conversion failed: {}", e);
                Err(e)
            }
        }
    }

    /// Convert the structure view with `converter`. A blank structure view
    /// clears the content view without calling the converter.
    pub fn convert_with<C: PhoneticConverter + ?Sized>(&mut self, converter: &C) -> Result<(), PhoneticError> {
        if self.original.is_blank() {
            self.phonetic.clear();
            return Ok(());
        }
        let result = converter.convert(self.original.as_str());
        self.apply_phonetic(result)
    }

    pub fn set_active(&mut self, view: ViewKind) {
        self.active = view;
    }

    pub fn current_text(&self) -> &str {
        self.view(self.active).as_str()
    }

    pub fn view(&self, kind: ViewKind) -> &LyricText {
        match kind {
            ViewKind::Structure => &self.original,
            ViewKind::Content => &self.phonetic,
        }
    }

    fn view_mut(&mut self, kind: ViewKind) -> &mut LyricText {
        match kind {
            ViewKind::Structure => &mut self.original,
            ViewKind::Content => &mut self.phonetic,
        }
    }

    pub fn set_current_text(&mut self, text: impl Into<String>) {
        self.view_mut(self.active).text = text.into();
    }

    /// Insert a tag into the active view over `[start, end)` (char offsets)
    pub fn insert_tag(&mut self, start: usize, end: usize, tag: &str) -> TagInsertion {
        let insertion = insert_tag(self.current_text(), start, end, tag);
        self.set_current_text(insertion.new_text.clone());
        insertion
    }

    /// Empty the active view and switch to edit mode.
    ///
    /// Returns `false` when there was nothing to clear.
    pub fn clear_active(&mut self) -> bool {
        if self.original.is_empty() && self.phonetic.is_empty() {
            return false;
        }
        self.set_current_text(String::new());
        self.editing = true;
        true
    }

    pub fn toggle_edit(&mut self) -> bool {
        self.editing = !self.editing;
        self.editing
    }

    /// Single-spaced text for the clipboard.
    ///
    /// Copying the content view merges it into the structure view first so
    /// tags and spacing come from the original lyrics.
    pub fn export_text(&self) -> String {
        let text = match self.active {
            ViewKind::Content if !self.original.is_empty() => {
                merge(self.original.as_str(), self.phonetic.as_str())
            }
            _ => self.current_text().to_string(),
        };
        compress_for_export(&text)
    }

    /// Sections of the song, preferring the structure view
    pub fn sections(&self) -> Vec<Section> {
        let source = if self.original.is_empty() {
            &self.phonetic
        } else {
            &self.original
        };
        parse_sections(source.as_str())
    }

    /// Re-derive sections and keep the selection valid.
    ///
    /// The first section is selected when nothing (or something that no
    /// longer exists) was selected.
    pub fn refresh_sections(&mut self) -> Vec<Section> {
        let sections = self.sections();
        self.selected_section = match self.selected_section {
            _ if sections.is_empty() => None,
            Some(idx) if idx < sections.len() => Some(idx),
            _ => Some(0),
        };
        sections
    }

    pub fn select_section(&mut self, idx: usize) -> Option<Section> {
        let section = self.sections().into_iter().nth(idx)?;
        self.selected_section = Some(idx);
        Some(section)
    }

    /// Select or deselect a texture, genre or instrument
    pub fn toggle_style(&mut self, list: StyleList, item: &str) {
        self.style.toggle(list, item);
    }

    /// Move the vocal pad (clamped into range)
    pub fn set_vocal(&mut self, x: f64, y: f64) {
        self.style.vocal = VocalCoordinates::new(x, y);
    }

    pub fn set_artist(&mut self, artist: &str) {
        self.style.set_artist(artist);
    }

    /// Take the pad position and textures from a saved preset
    pub fn load_preset(&mut self, preset: &VocalPreset) {
        log::info!("Loading vocal preset '{}'", preset.name);
        self.style.apply_preset(preset);
    }

    /// Save the current vocal settings into `store` under `name`
    pub fn save_preset(&self, store: &mut PresetStore, name: &str) -> Result<(), PresetError> {
        store.save(self.style.to_preset(name))
    }

    /// Fold an artist or voice analysis into the selections
    pub fn apply_analysis(&mut self, result: &AnalysisResult) {
        apply_analysis(&mut self.style, result, vocabulary());
    }

    /// Clear every style prompt setting
    pub fn reset_style(&mut self) {
        self.style.reset();
    }

    /// Generator instruction for the current selections
    pub fn style_instruction(&self) -> Result<String, PromptError> {
        build_style_instruction(&self.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hiragana(structure: &str) -> Result<String, PhoneticError> {
        Ok(structure.replace("空", "そら").replace("星", "ほし"))
    }

    #[test]
    fn test_paste_then_convert_then_export() {
        let mut session = SongSession::new();
        session.ingest_paste("[Verse]\r\n空\r\n星");
        assert_eq!(session.original, "[Verse]\n\n空\n\n星");

        session.convert_with(&hiragana).unwrap();
        session.set_active(ViewKind::Content);
        assert_eq!(session.export_text(), "[Verse]\nそら\nほし");

        session.set_active(ViewKind::Structure);
        assert_eq!(session.export_text(), "[Verse]\n空\n星");
    }

    #[test]
    fn test_failed_conversion_keeps_content() {
        let mut session = SongSession::new();
        session.phonetic = LyricText::content("old");
        session.ingest_paste("a");
        let failing = |_: &str| -> Result<String, PhoneticError> { Err(PhoneticError::MissingCredentials) };
        assert_eq!(session.convert_with(&failing), Err(PhoneticError::MissingCredentials));
        assert_eq!(session.phonetic, "old");
    }

    #[test]
    fn test_blank_structure_skips_converter() {
        let mut session = SongSession::new();
        session.phonetic = LyricText::content("stale");
        let never = |_: &str| -> Result<String, PhoneticError> { panic!("converter called") };
        session.convert_with(&never).unwrap();
        assert_eq!(session.phonetic, "");
    }

    #[test]
    fn test_insert_tag_into_active_view() {
        let mut session = SongSession::new();
        session.phonetic = LyricText::content("abc");
        session.set_active(ViewKind::Content);
        let insertion = session.insert_tag(1, 1, "[X]");
        assert_eq!(session.phonetic, "a[X]bc");
        assert_eq!(insertion.new_selection_end, 4);
        assert_eq!(session.original, "");
    }

    #[test]
    fn test_generated_lyrics_append() {
        let mut session = SongSession::new();
        assert!(!session.ingest_generated("   "));
        assert!(session.ingest_generated("[Chorus]\nla"));
        assert!(session.ingest_generated("more"));
        assert_eq!(session.original, "[Chorus]\n\nla\n\nmore");
    }

    #[test]
    fn test_clear_active() {
        let mut session = SongSession::new();
        assert!(!session.clear_active());
        session.ingest_paste("x");
        assert!(session.clear_active());
        assert_eq!(session.original, "");
        assert!(session.editing);
    }

    #[test]
    fn test_sections_fall_back_to_phonetic() {
        let mut session = SongSession::new();
        session.phonetic = LyricText::content("[Verse]\nそら");
        let sections = session.refresh_sections();
        assert_eq!(sections.len(), 1);
        assert_eq!(session.selected_section, Some(0));
    }

    #[test]
    fn test_selection_reset_when_sections_shrink() {
        let mut session = SongSession::new();
        session.ingest_paste("[A]\na\n[B]\nb");
        assert_eq!(session.select_section(1).map(|s| s.title), Some("B".to_string()));
        session.ingest_paste("[A]\na");
        session.refresh_sections();
        assert_eq!(session.selected_section, Some(0));
        assert!(session.select_section(5).is_none());
    }

    #[test]
    fn test_views_keep_their_kind() {
        let mut session = SongSession::new();
        session.ingest_paste("[Verse]\n空");
        session.convert_with(&hiragana).unwrap();
        assert_eq!(session.view(ViewKind::Structure).kind, ViewKind::Structure);
        assert_eq!(session.view(ViewKind::Content).kind, ViewKind::Content);
        assert_eq!(session.phonetic.tag_labels(), vec!["Verse"]);
    }

    #[test]
    fn test_style_edits_reach_instruction() {
        let mut session = SongSession::new();
        session.set_vocal(-80.0, 0.0);
        session.toggle_style(StyleList::Genres, "Enka");
        session.toggle_style(StyleList::Textures, "Husky");
        session.set_artist("");
        let instruction = session.style_instruction().expect("renders");
        assert!(instruction.contains("Vocal Characteristics: Male vocals"));
        assert!(instruction.contains("Target Genres: Enka"));
        assert!(instruction.contains("Vocal Textures: Husky"));

        session.reset_style();
        assert_eq!(session.style, StylePromptParams::default());
    }
}
