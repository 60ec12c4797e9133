use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{AudioClip, Transcript};

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const OPENAI_WHISPER_MODEL: &str = "whisper-1";

pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiWhisperEngine {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| OPENAI_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| OPENAI_WHISPER_MODEL.to_string()),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Deserialize)]
pub(crate) struct TranscriptionResponse {
    pub text: String,
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Builds the multipart `file` part the Whisper endpoints expect.
pub(crate) fn audio_part(clip: &AudioClip) -> Result<multipart::Part, TranscriptionError> {
    let body = reqwest::Body::from(clip.data.clone());

    multipart::Part::stream_with_length(body, clip.data.len() as u64)
        .file_name(clip.file_name())
        .mime_str(&clip.content_type)
        .map_err(|_| TranscriptionError::UnsupportedFormat(clip.content_type.clone()))
}

pub(crate) fn transport_error(e: reqwest::Error) -> TranscriptionError {
    if e.is_timeout() {
        TranscriptionError::Timeout(e.to_string())
    } else {
        TranscriptionError::Connection(e.to_string())
    }
}

/// Turns a non-success response into [`TranscriptionError::Api`], preferring
/// the `error.message` field of an OpenAI-style error body.
pub(crate) async fn api_error(response: reqwest::Response) -> TranscriptionError {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());

    let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
        .map(|envelope| envelope.error.message)
        .unwrap_or(body);

    TranscriptionError::Api { status, message }
}

#[async_trait]
impl TranscriptionEngine for OpenAiWhisperEngine {
    async fn transcribe(&self, clip: &AudioClip) -> Result<Transcript, TranscriptionError> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .part("file", audio_part(clip)?);

        tracing::debug!(
            model = %self.model,
            bytes = clip.len(),
            file_name = %clip.file_name(),
            "Sending audio to OpenAI Whisper API"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let result: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(format!("parse response: {}", e)))?;

        tracing::info!(
            chars = result.text.len(),
            "OpenAI Whisper transcription completed"
        );

        Ok(Transcript::new(result.text))
    }
}
