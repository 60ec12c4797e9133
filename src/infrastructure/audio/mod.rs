mod azure_whisper_engine;
mod openai_whisper_engine;
mod transcription_engine_factory;

pub use azure_whisper_engine::{AZURE_DEFAULT_API_VERSION, AzureWhisperEngine};
pub use openai_whisper_engine::{OPENAI_BASE_URL, OPENAI_WHISPER_MODEL, OpenAiWhisperEngine};
pub use transcription_engine_factory::{
    EngineOptions, TranscriptionEngineFactory, TranscriptionProvider,
};
