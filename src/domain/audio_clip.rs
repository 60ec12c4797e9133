use bytes::Bytes;

pub const DEFAULT_AUDIO_CONTENT_TYPE: &str = "audio/webm";

const DEFAULT_AUDIO_EXTENSION: &str = "webm";

/// An uploaded audio recording, held in memory for the lifetime of one request.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    pub data: Bytes,
    pub content_type: String,
}

impl AudioClip {
    /// Wraps raw bytes, falling back to [`DEFAULT_AUDIO_CONTENT_TYPE`] when the
    /// client did not declare a type.
    pub fn new(data: Bytes, content_type: Option<&str>) -> Self {
        let content_type = content_type
            .map(str::trim)
            .filter(|ct| !ct.is_empty())
            .unwrap_or(DEFAULT_AUDIO_CONTENT_TYPE)
            .to_string();

        Self { data, content_type }
    }

    /// MIME type without parameters, e.g. `audio/webm` for `audio/webm;codecs=opus`.
    pub fn essence(&self) -> &str {
        self.content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
    }

    /// File extension the transcription API uses to sniff the container.
    pub fn extension(&self) -> &'static str {
        match self.essence().to_ascii_lowercase().as_str() {
            "audio/webm" | "video/webm" => "webm",
            "audio/ogg" | "audio/opus" => "ogg",
            "audio/mpeg" | "audio/mp3" => "mp3",
            "audio/mp4" | "video/mp4" => "mp4",
            "audio/m4a" | "audio/x-m4a" => "m4a",
            "audio/wav" | "audio/x-wav" | "audio/wave" => "wav",
            "audio/flac" | "audio/x-flac" => "flac",
            _ => DEFAULT_AUDIO_EXTENSION,
        }
    }

    pub fn file_name(&self) -> String {
        format!("audio.{}", self.extension())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
