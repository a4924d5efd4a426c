use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, header::ACCEPT_LANGUAGE};
use serde::Deserialize;
use tracing::debug;
use tubescript_config::ProviderSettings;

use super::{LanguagePreference, ProviderError, TranscriptProvider, timedtext};
use crate::transcript::{TranscriptSegment, VideoId};

const CAPTIONS_MARKER: &str = "\"captions\":";
const CAPTIONS_END_MARKER: &str = ",\"videoDetails";
const PLAYABILITY_MARKER: &str = "\"playabilityStatus\":";
const RECAPTCHA_MARKER: &str = "class=\"g-recaptcha\"";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionsJson {
    player_captions_tracklist_renderer: Option<TracklistRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TracklistRenderer {
    caption_tracks: Option<Vec<CaptionTrack>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    pub base_url: String,
    #[serde(default)]
    pub name: TrackName,
    pub language_code: String,
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackName {
    pub simple_text: Option<String>,
    #[serde(default)]
    pub runs: Vec<TextRun>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextRun {
    pub text: String,
}

impl CaptionTrack {
    pub fn is_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }

    pub fn display_name(&self) -> &str {
        self.name
            .simple_text
            .as_deref()
            .or_else(|| self.name.runs.first().map(|r| r.text.as_str()))
            .unwrap_or(&self.language_code)
    }
}

/// Scrapes caption tracks from the watch page and downloads the chosen track's timedtext.
pub struct YoutubeProvider {
    client: reqwest::Client,
    base_url: String,
    accept_language: String,
    default_languages: Vec<String>,
}

impl YoutubeProvider {
    pub fn new(settings: &ProviderSettings) -> Result<Self, ProviderError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            accept_language: settings.accept_language.clone(),
            default_languages: settings.default_languages.clone(),
        })
    }

    async fn get_text(&self, request: RequestBuilder) -> Result<String, ProviderError> {
        let resp = request
            .header(ACCEPT_LANGUAGE, &self.accept_language)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ProviderError::Http {
                status: status.as_u16(),
                url: resp.url().to_string(),
            });
        }

        Ok(resp.text().await?)
    }

    /// The id goes through query encoding, so it always arrives as a single `v` value.
    async fn list_tracks(&self, video_id: &VideoId) -> Result<Vec<CaptionTrack>, ProviderError> {
        let request = self
            .client
            .get(format!("{}/watch", self.base_url))
            .query(&[("v", video_id.as_str())]);
        let html = self.get_text(request).await?;
        extract_caption_tracks(&html)
    }
}

#[async_trait]
impl TranscriptProvider for YoutubeProvider {
    async fn fetch(
        &self,
        video_id: &VideoId,
        languages: &LanguagePreference,
        preserve_formatting: bool,
    ) -> Result<Vec<TranscriptSegment>, ProviderError> {
        let tracks = self.list_tracks(video_id).await?;
        let track = select_track(&tracks, languages, &self.default_languages)?;
        debug!(
            video_id = %video_id,
            language = %track.language_code,
            generated = track.is_generated(),
            "Selected caption track"
        );

        let url = track.base_url.replace("&fmt=srv3", "");
        let xml = self.get_text(self.client.get(url)).await?;
        timedtext::parse(&xml, preserve_formatting)
    }

    fn name(&self) -> &str {
        "youtube"
    }
}

/// Pulls the caption track list out of a watch page.
pub fn extract_caption_tracks(html: &str) -> Result<Vec<CaptionTrack>, ProviderError> {
    let Some((_, after)) = html.split_once(CAPTIONS_MARKER) else {
        if html.contains(RECAPTCHA_MARKER) {
            return Err(ProviderError::TooManyRequests);
        }
        if !html.contains(PLAYABILITY_MARKER) {
            return Err(ProviderError::VideoUnavailable);
        }
        return Err(ProviderError::TranscriptsDisabled);
    };

    let json = after
        .split_once(CAPTIONS_END_MARKER)
        .map_or(after, |(json, _)| json)
        .replace('\n', "");

    let captions: CaptionsJson =
        serde_json::from_str(&json).map_err(|e| ProviderError::Parse(e.to_string()))?;

    captions
        .player_captions_tracklist_renderer
        .and_then(|r| r.caption_tracks)
        .filter(|tracks| !tracks.is_empty())
        .ok_or(ProviderError::TranscriptsDisabled)
}

/// Picks a track. Explicit codes are searched in order, manual before generated
/// within each code; the provider default searches `default_languages` with
/// generated tracks first.
pub fn select_track<'a>(
    tracks: &'a [CaptionTrack],
    languages: &LanguagePreference,
    default_languages: &[String],
) -> Result<&'a CaptionTrack, ProviderError> {
    let found = match languages {
        LanguagePreference::Languages(codes) => pick(tracks, codes, false),
        LanguagePreference::ProviderDefault => pick(tracks, default_languages, true),
    };

    found.ok_or_else(|| {
        let requested = match languages {
            LanguagePreference::Languages(_) => languages.to_string(),
            LanguagePreference::ProviderDefault => format!("[{}]", default_languages.join(", ")),
        };
        ProviderError::NoTranscriptFound {
            requested,
            available: describe_tracks(tracks),
        }
    })
}

fn pick<'a>(
    tracks: &'a [CaptionTrack],
    codes: &[String],
    generated_first: bool,
) -> Option<&'a CaptionTrack> {
    codes.iter().find_map(|code| {
        let mut matching = tracks.iter().filter(|t| &t.language_code == code);
        matching
            .clone()
            .find(|t| t.is_generated() == generated_first)
            .or_else(|| matching.find(|t| t.is_generated() != generated_first))
    })
}

fn describe_tracks(tracks: &[CaptionTrack]) -> String {
    if tracks.is_empty() {
        return "none".to_string();
    }
    tracks
        .iter()
        .map(|t| {
            let kind = if t.is_generated() { "generated" } else { "manual" };
            format!("{} (\"{}\", {kind})", t.language_code, t.display_name())
        })
        .collect::<Vec<_>>()
        .join(", ")
}
