//! Prompt generator API
//!
//! Tag vocabulary, vocal descriptors, style instruction assembly and the
//! preset store. Presets travel as the same JSON string JavaScript keeps in
//! local storage.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, js_error, serialize};
use crate::prompt::{
    AnalysisResult, build_style_instruction, clamp_style_prompt, vocabulary, vocal_descriptor, wrap_custom_tag,
    PresetStore, StylePromptParams, VocalCoordinates, VocalPreset,
};
use crate::wasm_info;

/// Tag categories, genres, textures and instruments
#[wasm_bindgen(js_name = getVocabulary)]
pub fn get_vocabulary() -> Result<JsValue, JsValue> {
    serialize(vocabulary(), "Vocabulary serialization error")
}

/// Bracket a custom tag typed by the user; undefined for blank input
#[wasm_bindgen(js_name = wrapCustomTag)]
pub fn wrap_custom_tag_js(input: &str) -> Option<String> {
    wrap_custom_tag(input)
}

/// Describe a vocal pad position in words
#[wasm_bindgen(js_name = vocalDescriptor)]
pub fn vocal_descriptor_js(x: f64, y: f64) -> String {
    vocal_descriptor(VocalCoordinates::new(x, y))
}

/// Render the style prompt instruction from `StylePromptParams`
#[wasm_bindgen(js_name = buildStyleInstruction)]
pub fn build_style_instruction_js(params: JsValue) -> Result<String, JsValue> {
    let params: StylePromptParams = deserialize(params, "Invalid style prompt parameters")?;
    build_style_instruction(&params).map_err(|e| js_error("buildStyleInstruction", e))
}

/// Decode the analysis service's JSON text into `{ vocalX, vocalY, ... }`
#[wasm_bindgen(js_name = decodeAnalysisResult)]
pub fn decode_analysis_result(json: &str) -> Result<JsValue, JsValue> {
    let result = AnalysisResult::from_json(json).map_err(|e| js_error("decodeAnalysisResult", e))?;
    serialize(&result, "Analysis serialization error")
}

/// Trim a generated style prompt to Suno's length limit
#[wasm_bindgen(js_name = clampStylePrompt)]
pub fn clamp_style_prompt_js(generated: &str) -> String {
    clamp_style_prompt(generated)
}

/// Decode stored presets into an array of `{ name, x, y, textures }`
#[wasm_bindgen(js_name = loadPresets)]
pub fn load_presets(json: &str) -> Result<JsValue, JsValue> {
    let store = PresetStore::from_json(json).map_err(|e| js_error("loadPresets", e))?;
    serialize(&store, "Preset serialization error")
}

/// Save a preset into the stored JSON and return the updated JSON
#[wasm_bindgen(js_name = savePreset)]
pub fn save_preset(json: &str, preset: JsValue) -> Result<String, JsValue> {
    let preset: VocalPreset = deserialize(preset, "Invalid preset")?;
    let mut store = PresetStore::from_json(json).map_err(|e| js_error("savePreset", e))?;
    wasm_info!("savePreset: {}", preset.name);
    store.save(preset).map_err(|e| js_error("savePreset", e))?;
    store.to_json().map_err(|e| js_error("savePreset", e))
}

/// Remove a preset by name and return the updated JSON
#[wasm_bindgen(js_name = removePreset)]
pub fn remove_preset(json: &str, name: &str) -> Result<String, JsValue> {
    let mut store = PresetStore::from_json(json).map_err(|e| js_error("removePreset", e))?;
    store.remove(name).map_err(|e| js_error("removePreset", e))?;
    store.to_json().map_err(|e| js_error("removePreset", e))
}
