//! Spacing normalizer
//!
//! The editor keeps lyrics double-spaced: every ingested line is followed by
//! one blank line. Text is expanded once when it enters the editor (paste or
//! AI generation) and compressed back to single spacing on export.
//!
//! Normalization is not idempotent. Running it twice quadruples the spacing,
//! so it must run exactly once per ingestion event.

/// Separator placed between existing lyrics and newly generated lyrics
const GENERATED_SEPARATOR: &str = "\n\n";

/// Replace every CRLF with a single LF
pub fn normalize_line_endings(raw: &str) -> String {
    raw.replace("\r\n", "\n")
}

/// Convert raw text into the double-spaced editing form.
///
/// `"a\nb"` becomes `"a\n\nb"`. Empty input yields empty output.
pub fn normalize_for_editing(raw: &str) -> String {
    let normalized = normalize_line_endings(raw);
    let spaced = normalized.split('\n').collect::<Vec<_>>().join("\n\n");
    log::debug!(
        "normalize_for_editing: {} bytes in, {} bytes out",
        raw.len(),
        spaced.len()
    );
    spaced
}

/// Collapse every pair of consecutive newlines into one.
///
/// Pairs are matched left to right without overlap, so three newlines become
/// two and four become two. Blank lines the user typed on purpose are
/// collapsed the same way as normalization artifacts.
pub fn compress_for_export(text: &str) -> String {
    text.replace("\n\n", "\n")
}

/// Append freshly generated lyrics to the existing structure text.
///
/// The generated text is trimmed and double-spaced, then joined to any
/// existing text with one blank line between them.
pub fn append_generated(existing: &str, generated: &str) -> String {
    let spaced = normalize_for_editing(generated.trim());
    if existing.is_empty() {
        spaced
    } else {
        format!("{}{}{}", existing, GENERATED_SEPARATOR, spaced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_double_spaces() {
        assert_eq!(normalize_for_editing("a\nb\nc"), "a\n\nb\n\nc");
    }

    #[test]
    fn test_normalize_crlf() {
        assert_eq!(normalize_for_editing("a\r\nb"), "a\n\nb");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_for_editing(""), "");
    }

    #[test]
    fn test_normalize_is_not_idempotent() {
        let once = normalize_for_editing("a\nb");
        let twice = normalize_for_editing(&once);
        assert_eq!(twice, "a\n\n\n\nb");
    }

    #[test]
    fn test_normalize_trailing_newline() {
        assert_eq!(normalize_for_editing("a\nb\n"), "a\n\nb\n\n");
    }

    #[test]
    fn test_compress() {
        assert_eq!(compress_for_export("a\n\nb"), "a\nb");
        assert_eq!(compress_for_export("a\n\n\nb"), "a\n\nb");
        assert_eq!(compress_for_export("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(compress_for_export("a\nb"), "a\nb");
        assert_eq!(compress_for_export(""), "");
    }

    #[test]
    fn test_round_trip_without_blank_lines() {
        for input in ["one line", "[Verse]\nline1\nline2", "a\r\nb\r\nc", "こんにちは\n世界"] {
            let expected = normalize_line_endings(input);
            assert_eq!(compress_for_export(&normalize_for_editing(input)), expected);
        }
    }

    #[test]
    fn test_append_generated_to_empty() {
        assert_eq!(append_generated("", "[Verse]\nhello\n"), "[Verse]\n\nhello");
    }

    #[test]
    fn test_append_generated_to_existing() {
        let existing = normalize_for_editing("old");
        assert_eq!(
            append_generated(&existing, "[Chorus]\r\nnew"),
            "old\n\n[Chorus]\n\nnew"
        );
    }
}
