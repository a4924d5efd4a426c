//! Parser for the provider's timedtext XML:
//!
//! ```xml
//! <transcript>
//!   <text start="0.0" dur="1.54">Hey there</text>
//!   <text start="1.54" dur="4.16">how are you</text>
//! </transcript>
//! ```

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::ProviderError;
use crate::transcript::TranscriptSegment;

/// Inline tags kept when formatting is preserved.
const FORMATTING_TAGS: &[&str] = &[
    "strong", "em", "b", "i", "mark", "small", "del", "ins", "sub", "sup",
];

static TEXT_ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<text\b([^>]*?)(?:/>|>(.*?)</text>)").unwrap());
static ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([A-Za-z_:][\w:.-]*)\s*=\s*"([^"]*)""#).unwrap());
static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static NAMED_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?\s*([A-Za-z0-9]*)[^>]*>").unwrap());

/// Parses timedtext XML into segments, skipping elements without text.
pub fn parse(xml: &str, preserve_formatting: bool) -> Result<Vec<TranscriptSegment>, ProviderError> {
    let mut segments = Vec::new();

    for element in TEXT_ELEMENT.captures_iter(xml) {
        let raw = match element.get(2) {
            Some(m) if !m.as_str().is_empty() => m.as_str(),
            _ => continue,
        };

        let attrs = element.get(1).map_or("", |m| m.as_str());
        let start = attribute(attrs, "start")
            .map(parse_seconds)
            .transpose()?
            .unwrap_or(0.0);
        let duration = attribute(attrs, "dur")
            .map(parse_seconds)
            .transpose()?
            .unwrap_or(0.0);

        // XML-level escapes first, then the HTML escapes the provider nests inside them.
        let text = decode_entities(&decode_entities(raw));
        let text = strip_tags(&text, preserve_formatting);

        segments.push(TranscriptSegment::new(text, start, duration));
    }

    Ok(segments)
}

fn attribute<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    ATTRIBUTE
        .captures_iter(attrs)
        .find(|c| &c[1] == name)
        .and_then(|c| c.get(2))
        .map(|m| m.as_str())
}

fn parse_seconds(value: &str) -> Result<f64, ProviderError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ProviderError::Parse(format!("invalid timestamp {value:?}")))
}

fn strip_tags(text: &str, preserve_formatting: bool) -> String {
    if !preserve_formatting {
        return ANY_TAG.replace_all(text, "").into_owned();
    }

    NAMED_TAG
        .replace_all(text, |caps: &Captures| {
            let name = caps[1].to_ascii_lowercase();
            if FORMATTING_TAGS.contains(&name.as_str()) {
                caps[0].to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
}

/// Decodes one level of character references against the full HTML5 table.
/// Unknown names are left untouched.
pub fn decode_entities(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}
