use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::application::services::RetryPolicy;
use crate::domain::{AudioClip, Transcript};

pub struct TranscriptionService {
    engine: Arc<dyn TranscriptionEngine>,
    retry_policy: RetryPolicy,
}

impl TranscriptionService {
    pub fn new(engine: Arc<dyn TranscriptionEngine>, retry_policy: RetryPolicy) -> Self {
        Self {
            engine,
            retry_policy,
        }
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// Sends the whole clip to the engine, re-sending it on transient failures.
    #[tracing::instrument(skip(self, clip), fields(bytes = clip.len(), content_type = %clip.content_type))]
    pub async fn transcribe(&self, clip: &AudioClip) -> Result<Transcript, TranscriptionError> {
        let transcript = self
            .retry_policy
            .run(|| self.engine.transcribe(clip))
            .await?;

        tracing::info!(chars = transcript.text.len(), "Transcription succeeded");

        Ok(transcript)
    }
}
