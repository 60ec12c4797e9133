use async_trait::async_trait;

use crate::domain::{AudioClip, Transcript};

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, clip: &AudioClip) -> Result<Transcript, TranscriptionError>;
}

/// Failures of the transcription collaborator.
///
/// The `Display` text is what the retry policy and the HTTP layer inspect, so
/// variants keep the wording of the upstream messages they carry.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("{status} {message}")]
    Api { status: u16, message: String },
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("Request timeout: {0}")]
    Timeout(String),
    #[error("unsupported audio file format: {0}")]
    UnsupportedFormat(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("invalid transcription configuration: {0}")]
    Configuration(String),
}
