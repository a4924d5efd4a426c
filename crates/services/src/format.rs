use crate::transcript::TranscriptSegment;

/// Number of characters logged as a transcript preview.
pub const PREVIEW_CHARS: usize = 200;

/// Plain-text formatter: segment texts joined by newlines, timing dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextFormatter;

impl TextFormatter {
    pub fn format_transcript(&self, segments: &[TranscriptSegment]) -> String {
        segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Flattens formatted text onto one line.
///
/// Newlines become spaces, then each non-overlapping pair of spaces becomes one
/// space in a single pass, so runs of three or more spaces are only partially
/// collapsed.
pub fn normalize_transcript(formatted: &str) -> String {
    formatted
        .replace('\n', " ")
        .replace("  ", " ")
        .trim()
        .to_string()
}

/// Format and normalize in one step.
pub fn plain_text(segments: &[TranscriptSegment]) -> String {
    normalize_transcript(&TextFormatter.format_transcript(segments))
}

pub fn preview(text: &str) -> &str {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
