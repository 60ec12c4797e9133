mod health;
mod transcribe;

pub use health::{HealthResponse, health_handler};
pub use transcribe::{AUDIO_FIELD, TranscribeResponse, transcribe_handler};
