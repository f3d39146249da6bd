//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cqa_scorer::FrameReadError;
use serde::Serialize;
use thiserror::Error;

use crate::upload::UploadError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Too many frames: at most {limit} can be analyzed per request")]
    TooManyFrames { limit: usize },

    #[error("Failed to read frame {index}: {message}")]
    Upload {
        index: usize,
        status: StatusCode,
        message: String,
    },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::TooManyFrames { .. } => StatusCode::BAD_REQUEST,
            ApiError::Upload { status, .. } => *status,
        }
    }
}

impl From<FrameReadError<UploadError>> for ApiError {
    fn from(err: FrameReadError<UploadError>) -> Self {
        match err.source {
            UploadError::TooManyFrames { limit } => ApiError::TooManyFrames { limit },
            UploadError::Multipart(e) => ApiError::Upload {
                index: err.index,
                status: e.status(),
                message: e.body_text(),
            },
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = self.to_string();

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
