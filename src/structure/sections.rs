//! Section tagger
//!
//! Splits lyric text into titled sections at bracketed tag lines, for
//! per-section downstream work (video prompts, navigation). Sections are
//! always rebuilt wholesale from the source text; there is no incremental
//! update.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Title of content that appears before the first tag
pub const INTRO_TITLE: &str = "Intro/Start";

/// Title of the single section produced for text without any tags
pub const WHOLE_SONG_TITLE: &str = "Whole Song";

/// First `[...]` anywhere in a line, non-greedy
static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(.*?)\]").expect("tag pattern is a valid regex"));

/// A titled run of lines
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// Tag label (e.g. "Chorus") or a sentinel title
    pub title: String,

    /// Trimmed section text, starting with its tag line when it has one
    pub content: String,
}

impl Section {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Label of the first bracket pattern in a line, if any
fn tag_label(line: &str) -> Option<&str> {
    TAG_PATTERN
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parse text into sections.
///
/// Any line containing a bracket pattern starts a new section, even when the
/// previous section holds nothing but its own tag line. Text before the
/// first tag goes into an `INTRO_TITLE` section. Text with no tags at all
/// becomes one `WHOLE_SONG_TITLE` section. Blank input yields no sections.
pub fn parse_sections(text: &str) -> Vec<Section> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut sections = Vec::new();
    let mut current_title = INTRO_TITLE.to_string();
    let mut current_content = String::new();
    let mut saw_tag = false;

    for line in text.split('\n') {
        match tag_label(line) {
            Some(label) => {
                saw_tag = true;
                if !current_content.trim().is_empty() {
                    sections.push(Section::new(
                        std::mem::take(&mut current_title),
                        current_content.trim(),
                    ));
                }
                current_title = label.to_string();
                current_content.clear();
                current_content.push_str(line);
                current_content.push('\n');
            }
            None => {
                current_content.push_str(line);
                current_content.push('\n');
            }
        }
    }

    if !saw_tag {
        return vec![Section::new(WHOLE_SONG_TITLE, text.trim())];
    }

    if !current_content.trim().is_empty() {
        sections.push(Section::new(current_title, current_content.trim()));
    }

    log::debug!("parse_sections: {} sections", sections.len());
    sections
}
