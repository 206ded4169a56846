use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use thiserror::Error;

pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Error answered to API callers as `{"error": message}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// 500 without detail.
    pub fn internal() -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: INTERNAL_SERVER_ERROR.to_string() }
    }

    /// 500 carrying the failure text.
    pub fn internal_with(detail: impl std::fmt::Display) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("{INTERNAL_SERVER_ERROR}: {detail}"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody::new(self.message))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("migration failed: {0}")]
    Migration(String),
    #[error("seeding word bank failed: {0}")]
    Seed(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
