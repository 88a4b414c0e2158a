use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::domain::KeyParseError;
use crate::engine::NavError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl From<KeyParseError> for AppError {
    fn from(err: KeyParseError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<NavError> for AppError {
    fn from(err: NavError) -> Self {
        match err {
            NavError::UnknownMonth(_) | NavError::UnknownDay { .. } => {
                AppError::NotFound(err.to_string())
            }
            NavError::InvalidTransition { .. } => AppError::Conflict(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
