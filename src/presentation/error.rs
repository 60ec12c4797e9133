use std::any::Any;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::TranscriptionError;

pub const MISSING_AUDIO_MESSAGE: &str = "No audio file provided";
pub const AUTH_MESSAGE: &str = "Invalid API configuration";
pub const FORMAT_MESSAGE: &str = "Invalid audio format";
pub const CONNECTION_MESSAGE: &str = "Connection error. Please try again.";
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred";

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failure taxonomy of the transcription endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Validation(String),
    Auth,
    Format,
    TransientNetwork,
    /// Carries the raw failure text; an empty text yields the generic message.
    Unknown(String),
}

impl ApiError {
    /// Maps a failure message to a response category. Order matters: the first
    /// matching signature wins.
    pub fn classify(message: &str) -> Self {
        if message.contains("Incorrect API key") {
            Self::Auth
        } else if message.contains("audio file format") {
            Self::Format
        } else if message.contains("ECONNRESET") || message.contains("Connection error") {
            Self::TransientNetwork
        } else {
            Self::Unknown(message.to_string())
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Format => StatusCode::BAD_REQUEST,
            Self::Auth => StatusCode::UNAUTHORIZED,
            Self::TransientNetwork => StatusCode::SERVICE_UNAVAILABLE,
            Self::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Auth => AUTH_MESSAGE.to_string(),
            Self::Format => FORMAT_MESSAGE.to_string(),
            Self::TransientNetwork => CONNECTION_MESSAGE.to_string(),
            Self::Unknown(message) if message.trim().is_empty() => UNEXPECTED_MESSAGE.to_string(),
            Self::Unknown(message) => message.clone(),
        }
    }
}

impl From<&TranscriptionError> for ApiError {
    fn from(error: &TranscriptionError) -> Self {
        Self::classify(&error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorResponse {
                error: self.message(),
            }),
        )
            .into_response()
    }
}

/// Renders a handler panic as the generic 500 body.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");

    tracing::error!(panic = %detail, "Handler panicked");

    ApiError::Unknown(String::new()).into_response()
}
