use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::{DEFAULT_MAX_RETRIES, RetryPolicy};
use crate::infrastructure::audio::{
    AZURE_DEFAULT_API_VERSION, EngineOptions, OPENAI_WHISPER_MODEL, TranscriptionProvider,
};
use crate::infrastructure::observability::DEFAULT_LOG_FILTER;

use super::Environment;

/// Process-wide secret for the transcription collaborator.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

const ENV_PREFIX: &str = "APP";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub transcription: TranscriptionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProvider,
    pub api_key: String,
    pub model: String,
    pub base_url: Option<String>,
    pub azure_deployment: Option<String>,
    pub azure_api_version: String,
    pub max_retries: u32,
    pub retry_delay_ms: u64,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Settings {
    /// Layers defaults, `appsettings.<Environment>`, `APP__*` variables and
    /// finally `OPENAI_API_KEY`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::builder(environment)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR),
            )
            .set_override_option("transcription.api_key", std::env::var(API_KEY_VAR).ok())?
            .build()?
            .try_deserialize()
    }

    /// Built-in defaults only; no file or environment lookup.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder(Environment::Local)?.build()?.try_deserialize()
    }

    fn builder(
        environment: Environment,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let default_retry = RetryPolicy::default();

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("transcription.provider", "openai")?
            .set_default("transcription.api_key", "")?
            .set_default("transcription.model", OPENAI_WHISPER_MODEL)?
            .set_default("transcription.azure_api_version", AZURE_DEFAULT_API_VERSION)?
            .set_default("transcription.max_retries", i64::from(DEFAULT_MAX_RETRIES))?
            .set_default(
                "transcription.retry_delay_ms",
                default_retry.delay().as_millis() as i64,
            )?
            .set_default("transcription.max_upload_mb", 25)?
            .set_default("logging.level", DEFAULT_LOG_FILTER)?
            .set_default("logging.json", environment == Environment::Prod)
    }
}

impl TranscriptionSettings {
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            provider: self.provider,
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            azure_deployment: self.azure_deployment.clone(),
            azure_api_version: self.azure_api_version.clone(),
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.max_retries,
            std::time::Duration::from_millis(self.retry_delay_ms),
        )
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}
