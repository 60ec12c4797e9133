mod retry_policy;
mod transcription_service;

pub use retry_policy::{
    DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY, RetryPolicy, TRANSIENT_ERROR_MARKERS,
};
pub use transcription_service::TranscriptionService;
