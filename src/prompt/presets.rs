//! Vocal presets
//!
//! Named snapshots of the vocal pad position and texture tags. The store
//! reads and writes an opaque JSON array; where that JSON lives (browser
//! local storage) is up to the caller.

use serde::{Deserialize, Serialize};

use crate::errors::PresetError;
use crate::prompt::vocal::VocalCoordinates;

/// A saved vocal setting
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VocalPreset {
    pub name: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub textures: Vec<String>,
}

impl VocalPreset {
    pub fn new(name: impl Into<String>, coords: VocalCoordinates, textures: Vec<String>) -> Self {
        Self {
            name: name.into(),
            x: coords.x,
            y: coords.y,
            textures,
        }
    }

    /// Pad position, clamped into range
    pub fn coordinates(&self) -> VocalCoordinates {
        VocalCoordinates::new(self.x, self.y)
    }
}

/// Ordered list of presets, unique by name
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct PresetStore {
    presets: Vec<VocalPreset>,
}

impl PresetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load presets from stored JSON. Blank input is an empty store.
    pub fn from_json(json: &str) -> Result<Self, PresetError> {
        if json.trim().is_empty() {
            return Ok(Self::new());
        }
        serde_json::from_str(json).map_err(PresetError::Decode)
    }

    pub fn to_json(&self) -> Result<String, PresetError> {
        serde_json::to_string(self).map_err(PresetError::Encode)
    }

    /// Save a preset under its (trimmed) name.
    ///
    /// A preset with the same name is replaced in place; otherwise the new
    /// one is appended.
    pub fn save(&mut self, mut preset: VocalPreset) -> Result<(), PresetError> {
        let name = preset.name.trim();
        if name.is_empty() {
            return Err(PresetError::EmptyName);
        }
        preset.name = name.to_string();

        match self.presets.iter_mut().find(|p| p.name == preset.name) {
            Some(existing) => {
                log::debug!("Replacing preset '{}'", preset.name);
                *existing = preset;
            }
            None => self.presets.push(preset),
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&VocalPreset> {
        self.presets.iter().find(|p| p.name == name)
    }

    pub fn remove(&mut self, name: &str) -> Result<VocalPreset, PresetError> {
        let idx = self
            .presets
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| PresetError::NotFound(name.to_string()))?;
        Ok(self.presets.remove(idx))
    }

    pub fn list(&self) -> &[VocalPreset] {
        &self.presets
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
