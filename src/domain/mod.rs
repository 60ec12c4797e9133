mod audio_clip;
mod transcript;

pub use audio_clip::{AudioClip, DEFAULT_AUDIO_CONTENT_TYPE};
pub use transcript::Transcript;
