//! Attachment marker detection on export lines.

use regex::Regex;

/// An attachment reference found on a single chat line.
///
/// `start..end` is the byte span of the whole marker (including any adjacent
/// direction marks matched with it), so a substitution can replace exactly
/// the marker and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentMarker {
    /// Filename as written in the chat text, direction marks stripped.
    pub filename: String,
    /// Byte offset where the marker starts on the line.
    pub start: usize,
    /// Byte offset one past the end of the marker.
    pub end: usize,
}

/// Unicode direction/isolate marks WhatsApp sprinkles around markers.
const DIRECTION_MARKS: &[char] = &['\u{200e}', '\u{200f}', '\u{2068}', '\u{2069}'];

/// Parser for attachment markers on WhatsApp export lines.
///
/// Matches the `<attached: FILENAME>` form. Exports are localized, so the
/// keyword is matched as a single word rather than the English literal;
/// whether the referenced file is actually media is decided later by
/// extension classification, which leaves non-media matches untouched.
pub struct LineParser {
    marker: Regex,
}

impl LineParser {
    /// Creates a new parser with the marker pattern compiled once.
    pub fn new() -> Self {
        // Direction marks may precede the marker, follow `<`, or wrap the
        // filename. A truncated marker (no closing `>`) does not match.
        let marker = Regex::new(
            r"[\u{200e}\u{200f}\u{2068}\u{2069}]*<\s*[\u{200e}\u{200f}]*\p{L}+\s*:\s*([^<>]*?)\s*>",
        )
        .expect("marker pattern is valid");

        Self { marker }
    }

    /// Finds the attachment marker on a line, if any.
    ///
    /// Returns at most one reference per line (the export format never puts
    /// two attachments on one line). Lines without a well-formed marker
    /// return `None` and must pass through unchanged.
    pub fn find_marker(&self, line: &str) -> Option<AttachmentMarker> {
        let caps = self.marker.captures(line)?;
        let whole = caps.get(0)?;
        let filename: String = caps
            .get(1)?
            .as_str()
            .trim_matches(|c| DIRECTION_MARKS.contains(&c) || c.is_whitespace())
            .to_string();

        if filename.is_empty() {
            return None;
        }

        Some(AttachmentMarker {
            filename,
            start: whole.start(),
            end: whole.end(),
        })
    }

    /// Replaces the marker span on a line with `replacement`.
    ///
    /// Every byte outside the span is preserved verbatim.
    pub fn substitute(&self, line: &str, marker: &AttachmentMarker, replacement: &str) -> String {
        let mut out = String::with_capacity(line.len() + replacement.len());
        out.push_str(&line[..marker.start]);
        out.push_str(replacement);
        out.push_str(&line[marker.end..]);
        out
    }
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_has_no_marker() {
        let parser = LineParser::new();
        assert!(parser.find_marker("[1/15/24, 10:30:45] Alice: Hello").is_none());
        assert!(parser.find_marker("just a continuation line").is_none());
        assert!(parser.find_marker("").is_none());
    }

    #[test]
    fn test_finds_basic_marker() {
        let parser = LineParser::new();
        let line = "[2024/01/22, 17:25:03] John: <attached: a.opus>";
        let marker = parser.find_marker(line).unwrap();
        assert_eq!(marker.filename, "a.opus");
        assert_eq!(&line[marker.start..marker.end], "<attached: a.opus>");
    }

    #[test]
    fn test_tolerates_direction_marks() {
        let parser = LineParser::new();
        let line = "[1/2/24, 09:00:00] Eva: \u{200e}<attached: \u{200e}00000021-PHOTO.jpg>";
        let marker = parser.find_marker(line).unwrap();
        assert_eq!(marker.filename, "00000021-PHOTO.jpg");
        // The leading mark is part of the matched span.
        assert!(line[marker.start..marker.end].starts_with('\u{200e}'));
    }

    #[test]
    fn test_localized_keyword() {
        let parser = LineParser::new();
        let line = "[1/2/24, 09:00:00] Eva: <adjunto: foto.jpg>";
        let marker = parser.find_marker(line).unwrap();
        assert_eq!(marker.filename, "foto.jpg");
    }

    #[test]
    fn test_truncated_marker_is_plain_text() {
        let parser = LineParser::new();
        assert!(parser.find_marker("Bob: <attached: a.opus").is_none());
        assert!(parser.find_marker("Bob: attached: a.opus>").is_none());
        assert!(parser.find_marker("Bob: <attached: >").is_none());
    }

    #[test]
    fn test_substitute_preserves_surrounding_bytes() {
        let parser = LineParser::new();
        let line = "[2024/01/22, 17:25:03] John: <attached: a.opus> thanks";
        let marker = parser.find_marker(line).unwrap();
        let out = parser.substitute(line, &marker, "[VOICE NOTE: hello]");
        assert_eq!(out, "[2024/01/22, 17:25:03] John: [VOICE NOTE: hello] thanks");
    }

    #[test]
    fn test_processed_output_has_no_marker() {
        // Running the parser on already-substituted output finds nothing.
        let parser = LineParser::new();
        let line = "[2024/01/22, 17:25:03] John: [VOICE NOTE: hello]";
        assert!(parser.find_marker(line).is_none());
    }
}
