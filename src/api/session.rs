//! Session API
//!
//! The WASM module owns the single song session; JavaScript drives it
//! through these calls and re-renders from the returned values. Caret
//! offsets are UTF-16 code units on this side of the boundary.

use std::sync::{Mutex, MutexGuard};

use lazy_static::lazy_static;
use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, js_error, serialize, validation_error, view_kind_from_u8};
use crate::api::lyrics::to_utf16_selection;
use crate::errors::{PhoneticError, PresetError};
use crate::prompt::{AnalysisResult, PresetStore, StyleList};
use crate::session::SongSession;
use crate::text::utf16_to_char_offset;
use crate::{wasm_info, wasm_log, wasm_warn};

/// Error marker JavaScript sends when no API key is configured
const MISSING_CREDENTIALS: &str = "missing-credentials";

// WASM-owned session storage (canonical source of truth)
lazy_static! {
    static ref SESSION: Mutex<SongSession> = Mutex::new(SongSession::new());
}

/// Lock the session, recovering from a poisoned lock
pub fn lock_session() -> MutexGuard<'static, SongSession> {
    SESSION.lock().unwrap_or_else(|poisoned| {
        wasm_warn!("Session lock was poisoned; continuing with last state");
        poisoned.into_inner()
    })
}

/// Map the JavaScript side of a phonetic conversion to a boundary result
pub fn phonetic_result(text: Option<String>, error: Option<String>) -> Result<String, PhoneticError> {
    match (text, error) {
        (_, Some(err)) if err == MISSING_CREDENTIALS => Err(PhoneticError::MissingCredentials),
        (_, Some(err)) => Err(PhoneticError::Service(err)),
        (Some(text), None) => Ok(text),
        (None, None) => Err(PhoneticError::EmptyResponse),
    }
}

#[wasm_bindgen(js_name = resetSession)]
pub fn reset_session() {
    *lock_session() = SongSession::new();
    wasm_info!("resetSession");
}

/// Snapshot of the whole session
#[wasm_bindgen(js_name = getSession)]
pub fn get_session() -> Result<JsValue, JsValue> {
    let session = lock_session();
    serialize(&*session, "Session serialization error")
}

/// Replace the structure view with pasted text; returns the text to convert
#[wasm_bindgen(js_name = ingestPaste)]
pub fn ingest_paste(raw: &str) -> String {
    let mut session = lock_session();
    let normalized = session.ingest_paste(raw).to_string();
    wasm_info!("ingestPaste: {} chars", normalized.chars().count());
    normalized
}

/// Append generated lyrics; returns false when there was nothing to add
#[wasm_bindgen(js_name = ingestGeneratedLyrics)]
pub fn ingest_generated_lyrics(generated: &str) -> bool {
    lock_session().ingest_generated(generated)
}

/// Current structure view text
#[wasm_bindgen(js_name = getOriginalText)]
pub fn get_original_text() -> String {
    lock_session().original.text.clone()
}

/// Deliver a phonetic conversion outcome: either `text` or an `error`
#[wasm_bindgen(js_name = applyPhoneticResult)]
pub fn apply_phonetic_result(text: Option<String>, error: Option<String>) -> Result<(), JsValue> {
    let result = phonetic_result(text, error);
    lock_session()
        .apply_phonetic(result)
        .map_err(|e| validation_error(e.to_string()))
}

/// Select the active view (0 = original, 1 = phonetic)
#[wasm_bindgen(js_name = setActiveView)]
pub fn set_active_view(view: u8) -> Result<(), JsValue> {
    let view = view_kind_from_u8(view).map_err(validation_error)?;
    lock_session().set_active(view);
    wasm_log!("setActiveView: {:?}", view);
    Ok(())
}

#[wasm_bindgen(js_name = getCurrentText)]
pub fn get_current_text() -> String {
    lock_session().current_text().to_string()
}

/// Store user edits to the active view
#[wasm_bindgen(js_name = setCurrentText)]
pub fn set_current_text(text: String) {
    lock_session().set_current_text(text);
}

/// Insert a tag into the active view over the UTF-16 selection `[start, end)`
#[wasm_bindgen(js_name = insertTagInSession)]
pub fn insert_tag_in_session(start: usize, end: usize, tag: &str) -> Result<JsValue, JsValue> {
    let insertion = {
        let mut session = lock_session();
        let current = session.current_text();
        let char_start = utf16_to_char_offset(current, start);
        let char_end = utf16_to_char_offset(current, end);
        session.insert_tag(char_start, char_end, tag)
    };
    wasm_log!("insertTagInSession: {:?} at {}..{}", tag, start, end);
    serialize(&to_utf16_selection(insertion), "Tag insertion serialization error")
}

/// Empty the active view; returns false when both views were already empty
#[wasm_bindgen(js_name = clearActiveView)]
pub fn clear_active_view() -> bool {
    lock_session().clear_active()
}

#[wasm_bindgen(js_name = toggleEdit)]
pub fn toggle_edit() -> bool {
    lock_session().toggle_edit()
}

/// Single-spaced clipboard text for the active view
#[wasm_bindgen(js_name = exportText)]
pub fn export_text() -> String {
    lock_session().export_text()
}

/// Re-derive sections, keeping the selected index valid
#[wasm_bindgen(js_name = refreshSections)]
pub fn refresh_sections() -> Result<JsValue, JsValue> {
    let sections = lock_session().refresh_sections();
    serialize(&sections, "Section serialization error")
}

/// Select a section by index and return it
#[wasm_bindgen(js_name = selectSection)]
pub fn select_section(index: usize) -> Result<JsValue, JsValue> {
    let section = lock_session()
        .select_section(index)
        .ok_or_else(|| validation_error(format!("Section index {} out of bounds", index)))?;
    serialize(&section, "Section serialization error")
}

/// Current style prompt selections
#[wasm_bindgen(js_name = getStyle)]
pub fn get_style() -> Result<JsValue, JsValue> {
    serialize(&lock_session().style, "Style serialization error")
}

/// Toggle an item in a style list (0 = textures, 1 = genres, 2 = instruments)
#[wasm_bindgen(js_name = toggleStyleSelection)]
pub fn toggle_style_selection(list: u8, item: &str) -> Result<(), JsValue> {
    let list = StyleList::from_u8(list)
        .ok_or_else(|| validation_error(format!("Invalid style list: {}", list)))?;
    lock_session().toggle_style(list, item);
    wasm_log!("toggleStyleSelection: {:?} {:?}", list, item);
    Ok(())
}

#[wasm_bindgen(js_name = setVocalPosition)]
pub fn set_vocal_position(x: f64, y: f64) {
    lock_session().set_vocal(x, y);
}

#[wasm_bindgen(js_name = setArtist)]
pub fn set_artist(artist: &str) {
    lock_session().set_artist(artist);
}

/// Load a stored preset into the style selections by name
#[wasm_bindgen(js_name = loadPresetIntoSession)]
pub fn load_preset_into_session(json: &str, name: &str) -> Result<(), JsValue> {
    let store = PresetStore::from_json(json).map_err(|e| js_error("loadPresetIntoSession", e))?;
    let preset = store
        .get(name)
        .ok_or_else(|| js_error("loadPresetIntoSession", PresetError::NotFound(name.to_string())))?;
    lock_session().load_preset(preset);
    Ok(())
}

/// Save the session's vocal settings as a preset; returns the updated JSON
#[wasm_bindgen(js_name = savePresetFromSession)]
pub fn save_preset_from_session(json: &str, name: &str) -> Result<String, JsValue> {
    let mut store = PresetStore::from_json(json).map_err(|e| js_error("savePresetFromSession", e))?;
    lock_session()
        .save_preset(&mut store, name)
        .map_err(|e| js_error("savePresetFromSession", e))?;
    wasm_info!("savePresetFromSession: {}", name.trim());
    store.to_json().map_err(|e| js_error("savePresetFromSession", e))
}

/// Fold an analysis answer (`{ vocalX, vocalY, textures, genres?, instruments? }`)
/// into the selections and return them
#[wasm_bindgen(js_name = applyAnalysisResult)]
pub fn apply_analysis_result(result: JsValue) -> Result<JsValue, JsValue> {
    let result: AnalysisResult = deserialize(result, "Invalid analysis result")?;
    let mut session = lock_session();
    session.apply_analysis(&result);
    serialize(&session.style, "Style serialization error")
}

#[wasm_bindgen(js_name = resetStyle)]
pub fn reset_style() {
    lock_session().reset_style();
    wasm_info!("resetStyle");
}

/// Generator instruction built from the session's selections
#[wasm_bindgen(js_name = buildSessionStyleInstruction)]
pub fn build_session_style_instruction() -> Result<String, JsValue> {
    lock_session()
        .style_instruction()
        .map_err(|e| js_error("buildSessionStyleInstruction", e))
}
