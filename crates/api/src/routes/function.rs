//! Single-function entry point: the video id arrives as a query parameter and
//! every response carries permissive CORS headers (see `middleware::cors`).

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use serde::Serialize;
use tracing::info;
use tubescript_services::VideoId;

use crate::{
    error::{ApiError, HandlerError},
    routes::transcript::render_text,
    state::AppState,
};

/// Query string as ordered pairs so a repeated `video_id` keeps its first value.
pub type FunctionQuery = Vec<(String, String)>;

fn first_video_id(params: FunctionQuery) -> Option<String> {
    params
        .into_iter()
        .find(|(key, value)| key == "video_id" && !value.is_empty())
        .map(|(_, value)| value)
}

#[derive(Debug, Serialize)]
pub struct FunctionResponse {
    pub success: bool,
    pub transcript: String,
    pub video_id: String,
    pub segments_count: usize,
    pub length: usize,
}

pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn transcript(
    State(state): State<AppState>,
    params: Result<Query<FunctionQuery>, QueryRejection>,
) -> Result<Json<FunctionResponse>, HandlerError> {
    let Query(params) = params.map_err(|err| ApiError::BadRequest(err.body_text()))?;
    let video_id = first_video_id(params)
        .map(VideoId::raw)
        .ok_or_else(|| ApiError::BadRequest("Missing video_id parameter".to_string()))?;

    info!(video_id = %video_id, "Extracting transcript");

    let outcome = state
        .compact_chain
        .fetch(state.provider.as_ref(), &video_id)
        .await?;

    let (transcript, length) = render_text(&video_id, &outcome.segments);

    Ok(Json(FunctionResponse {
        success: true,
        transcript,
        video_id: video_id.to_string(),
        segments_count: outcome.segments.len(),
        length,
    }))
}
