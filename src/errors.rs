//! Error types
//!
//! The lyric text core (spacing, sections, merge, tag insertion) is total and
//! never fails. These errors belong to the supplementary layers: preset
//! persistence, the embedded vocabulary, prompt templating and analysis, and the
//! phonetic conversion boundary.

use thiserror::Error;

/// Vocal preset store errors
#[derive(Debug, Error)]
pub enum PresetError {
    /// Stored presets could not be decoded
    #[error("Invalid preset data: {0}")]
    Decode(#[source] serde_json::Error),

    /// Presets could not be encoded for storage
    #[error("Failed to encode presets: {0}")]
    Encode(#[source] serde_json::Error),

    /// Preset names must contain something other than whitespace
    #[error("Preset name must not be empty")]
    EmptyName,

    #[error("No preset named '{0}'")]
    NotFound(String),
}

/// Embedded vocabulary failed to parse
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid vocabulary YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Style prompt templating errors
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Template error: {0}")]
    Template(#[from] mustache::Error),

    /// Style analysis answered with JSON we could not read
    #[error("Invalid analysis result: {0}")]
    Analysis(#[from] serde_json::Error),
}

/// Failures reported by the external phonetic conversion service.
///
/// Raised at the boundary so the core only ever sees plain strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneticError {
    #[error("API key is missing")]
    MissingCredentials,

    /// The service answered without any text
    #[error("Conversion returned no text")]
    EmptyResponse,

    #[error("Conversion failed: {0}")]
    Service(String),
}
