//! WASM build test
//!
//! Exercises the JavaScript-facing bindings in a browser.

#![cfg(target_arch = "wasm32")]

use lyric_assist_wasm::api::{lyrics, prompt, session};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_stateless_bindings() {
    assert_eq!(lyrics::normalize_for_editing("a\nb"), "a\n\nb");
    assert_eq!(lyrics::compress_for_export("a\n\nb"), "a\nb");
    assert_eq!(
        lyrics::merge_structure_and_content("[V]\na", "[v]\nA"),
        "[V]\nA"
    );
    assert!(lyrics::parse_sections_js("[Verse]\nla").is_ok());
    assert!(lyrics::insert_tag("abc", 1, 1, "[X]").is_ok());
}

#[wasm_bindgen_test]
fn test_session_bindings() {
    session::reset_session();
    let normalized = session::ingest_paste("[Verse]\n空");
    assert_eq!(normalized, "[Verse]\n\n空");

    assert!(session::apply_phonetic_result(Some("[Verse]\n\nそら".to_string()), None).is_ok());
    assert!(session::set_active_view(1).is_ok());
    assert!(session::set_active_view(7).is_err());
    assert_eq!(session::export_text(), "[Verse]\nそら");

    assert!(session::refresh_sections().is_ok());
    assert!(session::select_section(0).is_ok());
    assert!(session::select_section(9).is_err());
}

#[wasm_bindgen_test]
fn test_prompt_bindings() {
    assert!(prompt::get_vocabulary().is_ok());
    assert_eq!(prompt::wrap_custom_tag_js("Solo"), Some("[Solo]".to_string()));
    assert_eq!(prompt::vocal_descriptor_js(0.0, 0.0), "Androgynous/Neutral vocals");
    assert!(prompt::load_presets("").is_ok());
    assert!(prompt::remove_preset("[]", "missing").is_err());
}

#[wasm_bindgen_test]
fn test_style_bindings() {
    session::reset_session();
    session::set_vocal_position(-90.0, 0.0);
    assert!(session::toggle_style_selection(1, "Enka").is_ok());
    assert!(session::toggle_style_selection(5, "Enka").is_err());
    let instruction = session::build_session_style_instruction().expect("renders");
    assert!(instruction.contains("Target Genres: Enka"));

    let json = session::save_preset_from_session("", "Low").expect("saves");
    session::reset_style();
    assert!(session::load_preset_into_session(&json, "Low").is_ok());
    assert!(session::load_preset_into_session(&json, "missing").is_err());

    let analysis = prompt::decode_analysis_result(r#"{"vocalX":0,"vocalY":0,"textures":["soft"]}"#)
        .expect("decodes");
    assert!(session::apply_analysis_result(analysis).is_ok());
}
