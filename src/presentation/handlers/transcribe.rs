use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::AudioClip;
use crate::infrastructure::observability::sanitize_log_text;
use crate::presentation::error::{ApiError, MISSING_AUDIO_MESSAGE};
use crate::presentation::state::AppState;

pub const AUDIO_FIELD: &str = "audio";

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub transcript: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let clip = match read_audio_clip(multipart).await {
        Ok(clip) => clip,
        Err(e) => {
            tracing::error!(status = %e.status(), error = %e.message(), "Rejected transcription request");
            return e.into_response();
        }
    };

    tracing::debug!(
        bytes = clip.len(),
        content_type = %clip.content_type,
        "Audio clip received"
    );

    match state.transcription_service.transcribe(&clip).await {
        Ok(transcript) => (
            StatusCode::OK,
            Json(TranscribeResponse {
                transcript: transcript.text,
            }),
        )
            .into_response(),
        Err(e) => {
            let api_error = ApiError::from(&e);
            tracing::error!(
                status = %api_error.status(),
                error = %sanitize_log_text(&e.to_string()),
                "Error in transcribe API"
            );
            api_error.into_response()
        }
    }
}

async fn read_audio_clip(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<AudioClip, ApiError> {
    let mut multipart = multipart
        .map_err(|e| ApiError::Validation(format!("Failed to read multipart: {}", e.body_text())))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(format!("Failed to read multipart: {}", e.body_text())))?
    {
        if field.name() != Some(AUDIO_FIELD) {
            continue;
        }

        let content_type = field.content_type().map(str::to_owned);
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::Validation(format!("Failed to read multipart: {}", e.body_text())))?;

        return Ok(AudioClip::new(data, content_type.as_deref()));
    }

    Err(ApiError::Validation(MISSING_AUDIO_MESSAGE.to_string()))
}
