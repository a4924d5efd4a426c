use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use tracing::info;
use tubescript_services::{
    LanguagePreference, TranscriptSegment, VideoId,
    fallback::COMPACT_LANGUAGES,
    format::{plain_text, preview},
};

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub success: bool,
    pub video_id: String,
    pub transcript: String,
    pub language_used: String,
    pub segments_count: usize,
    pub transcript_length: usize,
    pub service: String,
}

#[derive(Debug, Serialize)]
pub struct SegmentsResponse {
    pub success: bool,
    pub video_id: String,
    pub segments: Vec<TranscriptSegment>,
    pub segments_count: usize,
    pub service: String,
}

/// Normalized text of `segments` and its length in characters.
pub(crate) fn render_text(video_id: &VideoId, segments: &[TranscriptSegment]) -> (String, usize) {
    let text = plain_text(segments);
    let length = text.chars().count();
    info!(video_id = %video_id, length, "Formatted transcript");
    info!(video_id = %video_id, preview = %preview(&text), "Transcript preview");
    (text, length)
}

pub async fn full(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> Result<Json<TranscriptResponse>, ApiError> {
    info!(video_id = %video_id, "Extracting transcript");

    let video_id = VideoId::parse(&video_id)?;
    let outcome = state
        .full_chain
        .fetch(state.provider.as_ref(), &video_id)
        .await?;

    if outcome.segments.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No transcript data available for video {video_id}"
        )));
    }

    let (transcript, transcript_length) = render_text(&video_id, &outcome.segments);

    Ok(Json(TranscriptResponse {
        success: true,
        video_id: video_id.to_string(),
        transcript,
        language_used: outcome.tier.to_string(),
        segments_count: outcome.segments.len(),
        transcript_length,
        service: state.service_name().to_string(),
    }))
}

pub async fn segments(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> Result<Json<SegmentsResponse>, ApiError> {
    info!(video_id = %video_id, "Extracting transcript segments");

    let video_id = VideoId::raw(video_id);
    let languages = LanguagePreference::languages(COMPACT_LANGUAGES.iter().copied());
    let segments = state
        .provider
        .fetch(&video_id, &languages, false)
        .await?;

    Ok(Json(SegmentsResponse {
        success: true,
        video_id: video_id.to_string(),
        segments_count: segments.len(),
        segments,
        service: state.service_name().to_string(),
    }))
}
