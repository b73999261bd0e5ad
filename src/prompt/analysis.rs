//! Style analysis results
//!
//! The AI service studies an artist name or a vocal recording and answers
//! with pad coordinates plus texture, genre and instrument suggestions. This
//! module folds that answer into the current selections: suggestions that
//! match the vocabulary (ignoring case) take the vocabulary's spelling, and
//! the rest are kept as custom entries after the matched ones.

use serde::{Deserialize, Serialize};

use crate::errors::PromptError;
use crate::prompt::catalog::Vocabulary;
use crate::prompt::style::StylePromptParams;
use crate::prompt::vocal::VocalCoordinates;

/// What the style analysis returned
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub vocal_x: f64,
    pub vocal_y: f64,
    #[serde(default)]
    pub textures: Vec<String>,
    /// Absent when the analysis only covered the voice
    #[serde(default)]
    pub genres: Option<Vec<String>>,
    #[serde(default)]
    pub instruments: Option<Vec<String>>,
}

impl AnalysisResult {
    /// Decode the service's JSON answer
    pub fn from_json(json: &str) -> Result<Self, PromptError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Map suggestions onto `known` entries, ignoring case.
///
/// Returns the matched entries (in `known`'s spelling) followed by the
/// unmatched suggestions as given.
pub fn match_vocabulary(suggestions: &[String], known: &[String]) -> Vec<String> {
    let mut matched = Vec::with_capacity(suggestions.len());
    let mut custom = Vec::new();

    for suggestion in suggestions {
        let lowered = suggestion.to_lowercase();
        match known.iter().find(|entry| entry.to_lowercase() == lowered) {
            Some(entry) => matched.push(entry.clone()),
            None => custom.push(suggestion.clone()),
        }
    }

    if !custom.is_empty() {
        log::debug!("match_vocabulary: keeping custom entries {:?}", custom);
    }
    matched.extend(custom);
    matched
}

/// Replace the selections with an analysis result.
///
/// The pad position and textures are always replaced. Genres and
/// instruments are only replaced when the result carries them.
pub fn apply_analysis(params: &mut StylePromptParams, result: &AnalysisResult, vocabulary: &Vocabulary) {
    params.vocal = VocalCoordinates::new(result.vocal_x, result.vocal_y);
    params.textures = match_vocabulary(&result.textures, &vocabulary.vocal_textures);

    if let Some(genres) = &result.genres {
        params.genres = match_vocabulary(genres, &vocabulary.genres);
    }
    if let Some(instruments) = &result.instruments {
        params.instruments = match_vocabulary(instruments, &vocabulary.emphasis_instruments);
    }
}
