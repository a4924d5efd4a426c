use std::fmt;

use serde::{Deserialize, Serialize};

/// Shortest identifier the full transcript endpoint accepts.
pub const MIN_VIDEO_ID_LEN: usize = 10;

/// Opaque identifier of a remote video.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid video ID")]
pub struct InvalidVideoId(pub String);

impl VideoId {
    /// Validates the identifier: non-empty and at least [`MIN_VIDEO_ID_LEN`] characters.
    pub fn parse(raw: &str) -> Result<Self, InvalidVideoId> {
        if raw.is_empty() || raw.chars().count() < MIN_VIDEO_ID_LEN {
            return Err(InvalidVideoId(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// Wraps an identifier as-is, for entry points that leave validation to the provider.
    pub fn raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A timed span of caption text as returned by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    /// Offset from the start of the video, in seconds.
    pub start: f64,
    /// Seconds.
    pub duration: f64,
}

impl TranscriptSegment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }
}
