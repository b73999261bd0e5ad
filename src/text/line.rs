//! Line classification for lyric text
//!
//! Every line of a lyric view is classified at read time into exactly one
//! kind, based on its trimmed content. Nothing is cached: callers classify
//! lines as they scan.

use serde::{Deserialize, Serialize};

/// Which view of the song a buffer holds
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
#[repr(u8)]
pub enum ViewKind {
    /// User-authored text, authoritative for tags and spacing
    #[default]
    Structure = 0,
    /// Machine-generated parallel rewrite (e.g. hiragana reading)
    Content = 1,
}

impl ViewKind {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(ViewKind::Structure),
            1 => Some(ViewKind::Content),
            _ => None,
        }
    }
}

/// Classified line
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text")]
pub enum LineKind<'a> {
    /// Trimmed form is wrapped in `[` ... `]`; carries the label between brackets
    TagLine(&'a str),
    /// Trimmed form is empty
    BlankLine,
    /// Anything else; carries the trimmed text
    ContentLine(&'a str),
}

impl<'a> LineKind<'a> {
    /// Classify a single line (without its terminator)
    pub fn classify(line: &'a str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            LineKind::BlankLine
        } else if is_tag_line(trimmed) {
            LineKind::TagLine(&trimmed[1..trimmed.len() - 1])
        } else {
            LineKind::ContentLine(trimmed)
        }
    }

    pub fn is_tag(&self) -> bool {
        matches!(self, LineKind::TagLine(_))
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, LineKind::BlankLine)
    }

    pub fn is_content(&self) -> bool {
        matches!(self, LineKind::ContentLine(_))
    }
}

/// True when an already-trimmed line starts with `[` and ends with `]`.
///
/// A lone `[` is not a tag: it needs both brackets.
pub fn is_tag_line(trimmed: &str) -> bool {
    trimmed.len() >= 2 && trimmed.starts_with('[') && trimmed.ends_with(']')
}

/// Split text into lines the way the browser does: on `\n` only, keeping a
/// trailing empty line when the text ends with a newline.
///
/// `"a\n"` yields `["a", ""]`, and `""` yields `[""]`.
pub fn split_lines(text: &str) -> std::str::Split<'_, char> {
    text.split('\n')
}

/// One view of the song
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LyricText {
    pub text: String,
    pub kind: ViewKind,
}

impl LyricText {
    pub fn new(text: impl Into<String>, kind: ViewKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn structure(text: impl Into<String>) -> Self {
        Self::new(text, ViewKind::Structure)
    }

    pub fn content(text: impl Into<String>) -> Self {
        Self::new(text, ViewKind::Content)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Iterate over classified lines
    pub fn lines(&self) -> impl Iterator<Item = LineKind<'_>> {
        split_lines(&self.text).map(LineKind::classify)
    }

    /// Number of lines classified as content
    pub fn content_line_count(&self) -> usize {
        self.lines().filter(|line| line.is_content()).count()
    }

    /// Labels of every tag line, in order
    pub fn tag_labels(&self) -> Vec<&str> {
        self.lines()
            .filter_map(|line| match line {
                LineKind::TagLine(label) => Some(label),
                _ => None,
            })
            .collect()
    }
}

impl PartialEq<str> for LyricText {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for LyricText {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}
