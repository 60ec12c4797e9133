use std::sync::Arc;

use serde::Deserialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

use super::azure_whisper_engine::AzureWhisperEngine;
use super::openai_whisper_engine::OpenAiWhisperEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProvider {
    #[serde(rename = "openai")]
    OpenAi,
    Azure,
}

/// Everything needed to build one engine at startup.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    pub provider: TranscriptionProvider,
    pub api_key: String,
    pub model: String,
    pub base_url: Option<String>,
    pub azure_deployment: Option<String>,
    pub azure_api_version: String,
}

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    pub fn create(
        options: &EngineOptions,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        match options.provider {
            TranscriptionProvider::OpenAi => {
                if options.api_key.is_empty() {
                    tracing::warn!("No OpenAI API key configured; requests will be rejected upstream");
                }
                let engine = OpenAiWhisperEngine::new(
                    options.api_key.clone(),
                    options.base_url.clone(),
                    Some(options.model.clone()),
                );
                Ok(Arc::new(engine))
            }
            TranscriptionProvider::Azure => {
                let base_url = options.base_url.as_deref().ok_or_else(|| {
                    TranscriptionError::Configuration(
                        "base_url required for Azure OpenAI Whisper".to_string(),
                    )
                })?;
                let deployment = options.azure_deployment.as_deref().ok_or_else(|| {
                    TranscriptionError::Configuration(
                        "azure_deployment required for Azure OpenAI Whisper".to_string(),
                    )
                })?;
                let engine = AzureWhisperEngine::new(
                    base_url,
                    deployment,
                    &options.api_key,
                    &options.azure_api_version,
                );
                Ok(Arc::new(engine))
            }
        }
    }
}
