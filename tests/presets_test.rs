// Vocal presets and style prompt assembly

use lyric_assist_wasm::prompt::{
    build_style_instruction, clamp_style_prompt, tag_catalog, vocal_descriptor, wrap_custom_tag,
    PresetStore, StylePromptParams, VocalCoordinates, VocalPreset, STYLE_PROMPT_LIMIT,
};
use lyric_assist_wasm::{insert_tag, PresetError};

#[test]
fn test_preset_survives_storage_round_trip() {
    let mut store = PresetStore::new();
    store
        .save(VocalPreset::new(
            "Airy Soprano",
            VocalCoordinates::new(80.0, 75.0),
            vec!["Airy".to_string(), "Breathy".to_string()],
        ))
        .expect("valid preset");

    let stored = store.to_json().expect("encodes");
    let restored = PresetStore::from_json(&stored).expect("decodes");
    let preset = restored.get("Airy Soprano").expect("preset present");

    assert_eq!(vocal_descriptor(preset.coordinates()), "Female vocals, High pitch/Soprano");
    assert_eq!(preset.textures, vec!["Airy", "Breathy"]);
}

#[test]
fn test_out_of_range_preset_is_clamped_on_use() {
    let store = PresetStore::from_json(r#"[{"name":"Loud","x":-400,"y":0,"textures":[]}]"#)
        .expect("decodes");
    let coords = store.get("Loud").expect("preset present").coordinates();
    assert_eq!(coords.x, -100.0);
}

#[test]
fn test_corrupt_storage_is_reported() {
    let err = PresetStore::from_json("not json").unwrap_err();
    assert!(matches!(err, PresetError::Decode(_)));
    assert!(err.to_string().starts_with("Invalid preset data"));
}

#[test]
fn test_style_instruction_from_preset() {
    let preset = VocalPreset::new("Deep", VocalCoordinates::new(-90.0, -90.0), vec!["Deep".to_string()]);
    let params = StylePromptParams {
        vocal: preset.coordinates(),
        textures: preset.textures.clone(),
        genres: vec!["Enka".to_string()],
        instruments: vec!["Shamisen".to_string()],
        artist: Some(String::new()),
    };
    let instruction = build_style_instruction(&params).expect("renders");
    assert!(instruction.contains("Vocal Characteristics: Male vocals, Low pitch/Deep"));
    assert!(instruction.contains("Artist Style Reference: None"));
}

#[test]
fn test_generated_prompt_clamped() {
    let generated = format!("  {}  ", "x".repeat(STYLE_PROMPT_LIMIT * 2));
    assert_eq!(clamp_style_prompt(&generated).len(), STYLE_PROMPT_LIMIT);
}

#[test]
fn test_custom_and_catalog_tags_insert_verbatim() {
    let chorus = tag_catalog()
        .iter()
        .flat_map(|c| c.tags.iter())
        .find(|t| t.label == "Chorus")
        .expect("Chorus tag in catalog");
    let inserted = insert_tag("la\n", 3, 3, &chorus.value);
    assert_eq!(inserted.new_text, "la\n[Chorus]");

    let custom = wrap_custom_tag("Ad-lib").expect("non-blank");
    let inserted = insert_tag(&inserted.new_text, 0, 0, &custom);
    assert_eq!(inserted.new_text, "[Ad-lib]la\n[Chorus]");
}
