use axum::Json;
use serde_json::{Value, json};

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "YouTube Transcript API",
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "youtube-transcript-api",
    }))
}
