use tracing::{error, info};

use crate::provider::{LanguagePreference, ProviderError, TranscriptProvider};
use crate::transcript::{TranscriptSegment, VideoId};

/// Languages tried by the last tier of the full transcript endpoint.
pub const FULL_LANGUAGES: &[&str] = &["en", "de", "fr", "es", "it", "pt", "ru", "ja", "ko", "zh"];

/// Languages tried by the last tier of the request handler, and by the segments endpoint.
pub const COMPACT_LANGUAGES: &[&str] = &["en", "de", "fr", "es", "it"];

pub const ENGLISH_LABEL: &str = "en (auto-generated)";
pub const PROVIDER_DEFAULT_LABEL: &str = "auto-generated (any language)";
pub const ANY_AVAILABLE_LABEL: &str = "manual/auto (any available)";

/// One tier of the chain.
#[derive(Debug, Clone)]
pub struct AttemptSpec {
    /// Reported to clients as `language_used`.
    pub label: &'static str,
    pub languages: LanguagePreference,
    pub preserve_formatting: bool,
}

impl AttemptSpec {
    pub fn new(label: &'static str, languages: LanguagePreference) -> Self {
        Self {
            label,
            languages,
            preserve_formatting: false,
        }
    }
}

#[derive(Debug)]
pub struct ChainOutcome {
    pub segments: Vec<TranscriptSegment>,
    /// Label of the tier that succeeded.
    pub tier: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("No transcript found for video {video_id}. Error: {last}")]
    Exhausted { video_id: VideoId, last: ProviderError },
}

/// Ordered attempts against a provider, stopping at the first success.
#[derive(Debug, Clone)]
pub struct FallbackChain {
    tiers: Vec<AttemptSpec>,
}

impl FallbackChain {
    /// English, then the provider default, then `last_resort`.
    pub fn standard(last_resort: &[&str]) -> Self {
        Self {
            tiers: vec![
                AttemptSpec::new(ENGLISH_LABEL, LanguagePreference::languages(["en"])),
                AttemptSpec::new(PROVIDER_DEFAULT_LABEL, LanguagePreference::ProviderDefault),
                AttemptSpec::new(
                    ANY_AVAILABLE_LABEL,
                    LanguagePreference::languages(last_resort.iter().copied()),
                ),
            ],
        }
    }

    /// Chain used by the full transcript endpoint.
    pub fn full() -> Self {
        Self::standard(FULL_LANGUAGES)
    }

    /// Chain used by the request handler.
    pub fn compact() -> Self {
        Self::standard(COMPACT_LANGUAGES)
    }

    pub fn tiers(&self) -> &[AttemptSpec] {
        &self.tiers
    }

    pub async fn fetch(
        &self,
        provider: &dyn TranscriptProvider,
        video_id: &VideoId,
    ) -> Result<ChainOutcome, ChainError> {
        let mut last = None;

        for spec in &self.tiers {
            info!(
                video_id = %video_id,
                tier = spec.label,
                languages = %spec.languages,
                provider = provider.name(),
                "Trying transcript tier"
            );

            match provider
                .fetch(video_id, &spec.languages, spec.preserve_formatting)
                .await
            {
                Ok(segments) => {
                    info!(
                        video_id = %video_id,
                        tier = spec.label,
                        segments = segments.len(),
                        "Transcript tier succeeded"
                    );
                    return Ok(ChainOutcome {
                        segments,
                        tier: spec.label,
                    });
                }
                Err(e) => {
                    info!(video_id = %video_id, tier = spec.label, error = %e, "Transcript tier failed");
                    last = Some(e);
                }
            }
        }

        let last = last.unwrap_or_else(|| ProviderError::NoTranscriptFound {
            requested: "none".to_string(),
            available: "unknown".to_string(),
        });
        error!(video_id = %video_id, error = %last, "All transcript tiers failed");

        Err(ChainError::Exhausted {
            video_id: video_id.clone(),
            last,
        })
    }
}
