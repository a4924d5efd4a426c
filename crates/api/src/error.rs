use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;
use tubescript_services::{ChainError, InvalidVideoId, ProviderError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: &'static str,
    detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "not_found",
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Internal(_) => "internal",
        }
    }

    pub fn into_message(self) -> String {
        match self {
            ApiError::NotFound(msg) | ApiError::BadRequest(msg) | ApiError::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(status = %self.status(), error = %self, "Request failed");

        let status = self.status();
        let body = ErrorResponse {
            success: false,
            error: self.kind(),
            detail: self.into_message(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<InvalidVideoId> for ApiError {
    fn from(err: InvalidVideoId) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<ChainError> for ApiError {
    fn from(err: ChainError) -> Self {
        ApiError::NotFound(err.to_string())
    }
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        ApiError::Internal(format!("Server error: {err}"))
    }
}

/// Error shape of the single-function request handler: `{"success": false, "error": msg}`.
#[derive(Debug)]
pub struct HandlerError(pub ApiError);

#[derive(Serialize)]
struct HandlerErrorResponse {
    success: bool,
    error: String,
}

impl From<ApiError> for HandlerError {
    fn from(err: ApiError) -> Self {
        HandlerError(err)
    }
}

impl From<ChainError> for HandlerError {
    fn from(err: ChainError) -> Self {
        HandlerError(err.into())
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        error!(status = %self.0.status(), error = %self.0, "Handler request failed");

        let status = self.0.status();
        let body = HandlerErrorResponse {
            success: false,
            error: self.0.into_message(),
        };

        (status, Json(body)).into_response()
    }
}
