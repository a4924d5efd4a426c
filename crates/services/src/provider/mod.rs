pub mod timedtext;
pub mod youtube;

pub use youtube::YoutubeProvider;

use std::fmt;

use async_trait::async_trait;

use crate::transcript::{TranscriptSegment, VideoId};

/// Which caption tracks a fetch may settle on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguagePreference {
    /// Language codes in priority order. Manual tracks beat generated ones per code.
    Languages(Vec<String>),
    /// The provider's configured default languages, auto-generated tracks first.
    ProviderDefault,
}

impl LanguagePreference {
    pub fn languages<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Languages(codes.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for LanguagePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Languages(codes) => write!(f, "[{}]", codes.join(", ")),
            Self::ProviderDefault => f.write_str("provider default"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("The video is no longer available")]
    VideoUnavailable,
    #[error("Subtitles are disabled for this video")]
    TranscriptsDisabled,
    #[error("Too many requests: the provider is asking for a captcha")]
    TooManyRequests,
    #[error(
        "No transcripts were found for any of the requested language codes: {requested}. Available: {available}"
    )]
    NoTranscriptFound { requested: String, available: String },
    #[error("Provider returned HTTP {status} for {url}")]
    Http { status: u16, url: String },
    #[error("Request to provider failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Failed to parse provider response: {0}")]
    Parse(String),
}

/// Source of timed captions for a video.
#[async_trait]
pub trait TranscriptProvider: Send + Sync + 'static {
    async fn fetch(
        &self,
        video_id: &VideoId,
        languages: &LanguagePreference,
        preserve_formatting: bool,
    ) -> Result<Vec<TranscriptSegment>, ProviderError>;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
