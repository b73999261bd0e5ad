//! Structure-content merge engine
//!
//! Recombines the two views of a song for export. The structure view is the
//! only source of tags and spacing; the content view is the only source of
//! line text. Lines are matched purely by position: the n-th content line of
//! the structure receives the n-th pure content line of the content view.
//!
//! The merge relies on the phonetic converter keeping one output line per
//! input line. When it doesn't, the merge degrades instead of failing:
//! missing content lines become empty strings and surplus ones are dropped.

use serde::{Deserialize, Serialize};

use crate::text::line::{LineKind, split_lines};

/// Counters describing how well the two views lined up
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MergeStats {
    /// Content lines available in the content view
    pub content_lines: usize,
    /// Structure positions that received a content line
    pub substituted: usize,
    /// Structure positions left empty because content ran out
    pub missing: usize,
    /// Content lines never used
    pub unused: usize,
}

impl MergeStats {
    /// True when every structure content line was matched one-to-one
    pub fn is_aligned(&self) -> bool {
        self.missing == 0 && self.unused == 0
    }
}

/// Lines of the content view that carry text: trimmed, non-empty, and not
/// starting with `[`. The content view's own tags and spacing are dropped.
pub fn pure_content_lines(content_text: &str) -> Vec<&str> {
    split_lines(content_text)
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('['))
        .collect()
}

/// Merge a structure text with a content text.
///
/// The output has exactly as many lines as `structure_text`. Tag lines are
/// copied verbatim from the structure, blank lines become empty lines, and
/// every other line is replaced by the next pure content line.
pub fn merge(structure_text: &str, content_text: &str) -> String {
    merge_with_stats(structure_text, content_text).0
}

/// `merge`, also reporting how the two views lined up
pub fn merge_with_stats(structure_text: &str, content_text: &str) -> (String, MergeStats) {
    let content = pure_content_lines(content_text);
    let mut next = content.iter().copied();
    let mut stats = MergeStats {
        content_lines: content.len(),
        ..MergeStats::default()
    };

    let merged: Vec<&str> = split_lines(structure_text)
        .map(|line| match LineKind::classify(line) {
            LineKind::TagLine(_) => line,
            LineKind::BlankLine => "",
            LineKind::ContentLine(_) => match next.next() {
                Some(text) => {
                    stats.substituted += 1;
                    text
                }
                None => {
                    stats.missing += 1;
                    ""
                }
            },
        })
        .collect();

    stats.unused = content.len() - stats.substituted;

    if !stats.is_aligned() {
        log::warn!(
            "merge: views out of step ({} content lines, {} substituted, {} missing, {} unused)",
            stats.content_lines,
            stats.substituted,
            stats.missing,
            stats.unused
        );
    }

    (merged.join("\n"), stats)
}
