//! Tag vocabulary and selectable style lists
//!
//! The vocabulary ships inside the module as YAML and is parsed once on
//! first use. Tag values are opaque strings to the insertion engine.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;

const VOCABULARY_YAML: &str = include_str!("vocabulary.yaml");

/// One selectable tag
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TagOption {
    /// Button label
    pub label: String,
    /// Text inserted at the caret
    pub value: String,
}

/// A named group of tags
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TagCategory {
    pub name: String,
    /// Bilingual heading shown above the group
    #[serde(default)]
    pub display_name: String,
    pub tags: Vec<TagOption>,
}

/// Complete embedded vocabulary
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Vocabulary {
    pub tag_categories: Vec<TagCategory>,
    pub genres: Vec<String>,
    pub vocal_textures: Vec<String>,
    pub emphasis_instruments: Vec<String>,
}

impl Vocabulary {
    /// Parse a vocabulary document and fill in display names
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let mut vocabulary: Vocabulary = serde_yaml::from_str(yaml)?;
        for category in &mut vocabulary.tag_categories {
            if category.display_name.is_empty() {
                category.display_name = category_display_name(&category.name).to_string();
            }
        }
        Ok(vocabulary)
    }

    /// Look up a tag category by its (English) name
    pub fn category(&self, name: &str) -> Option<&TagCategory> {
        self.tag_categories.iter().find(|c| c.name == name)
    }
}

static VOCABULARY: Lazy<Vocabulary> = Lazy::new(|| {
    Vocabulary::from_yaml(VOCABULARY_YAML).unwrap_or_else(|e| {
        log::error!("{}", e);
        Vocabulary::default()
    })
});

/// The embedded vocabulary
pub fn vocabulary() -> &'static Vocabulary {
    &VOCABULARY
}

pub fn tag_catalog() -> &'static [TagCategory] {
    &VOCABULARY.tag_categories
}

pub fn genres() -> &'static [String] {
    &VOCABULARY.genres
}

pub fn vocal_textures() -> &'static [String] {
    &VOCABULARY.vocal_textures
}

pub fn emphasis_instruments() -> &'static [String] {
    &VOCABULARY.emphasis_instruments
}

/// Heading for a tag category; unknown categories show their raw name
pub fn category_display_name(name: &str) -> &str {
    match name {
        "Structure" => "構成 (Structure)",
        "Vocals" => "ボーカル (Vocals)",
        "Instruments" => "楽器 (Instruments)",
        "Mood & Speed" => "ムード・速度 (Mood)",
        _ => name,
    }
}

/// Turn free text typed by the user into an insertable tag.
///
/// Returns `None` for blank input. Text already wrapped in brackets is kept
/// as typed; anything else gets wrapped.
pub fn wrap_custom_tag(input: &str) -> Option<String> {
    if input.trim().is_empty() {
        return None;
    }
    if input.starts_with('[') && input.ends_with(']') {
        Some(input.to_string())
    } else {
        Some(format!("[{}]", input))
    }
}
