//! OpenAI Whisper transcription implementation.

use super::Transcriber;
use crate::audio::decode_to_mp3;
use crate::config::TranscriptionSettings;
use crate::error::{ChatscribeError, Result};
use crate::openai::create_client;
use async_openai::types::CreateTranscriptionRequestArgs;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

/// OpenAI Whisper-based transcriber.
pub struct WhisperTranscriber {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
    language: Option<String>,
}

impl WhisperTranscriber {
    /// Create a transcriber from settings.
    pub fn new(settings: &TranscriptionSettings) -> Self {
        let client = create_client(Duration::from_secs(settings.timeout_seconds));

        Self {
            client,
            model: settings.model.clone(),
            language: settings.language.clone(),
        }
    }
}

#[async_trait]
impl Transcriber for WhisperTranscriber {
    #[instrument(skip(self), fields(audio_path = %audio_path.display()))]
    async fn transcribe(&self, audio_path: &Path) -> Result<String> {
        // Normalize the container first; the API rejects raw .opus voice notes.
        let temp_dir = tempfile::tempdir()?;
        let decoded = decode_to_mp3(audio_path, temp_dir.path()).await?;

        debug!("Transcribing decoded audio");

        let file_bytes = tokio::fs::read(&decoded).await?;

        let mut request_builder = CreateTranscriptionRequestArgs::default();
        request_builder
            .file(async_openai::types::AudioInput::from_vec_u8(
                decoded
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("audio.mp3")
                    .to_string(),
                file_bytes,
            ))
            .model(&self.model);

        if let Some(lang) = &self.language {
            request_builder.language(lang);
        }

        let request = request_builder
            .build()
            .map_err(|e| ChatscribeError::Transcription(format!("Failed to build request: {}", e)))?;

        let response = self
            .client
            .audio()
            .transcribe(request)
            .await
            .map_err(|e| ChatscribeError::OpenAI(format!("Whisper API error: {}", e)))?;

        Ok(response.text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcriber_uses_settings() {
        let settings = TranscriptionSettings {
            model: "whisper-1".to_string(),
            language: Some("en".to_string()),
            timeout_seconds: 10,
        };
        let transcriber = WhisperTranscriber::new(&settings);
        assert_eq!(transcriber.model, "whisper-1");
        assert_eq!(transcriber.language.as_deref(), Some("en"));
    }
}
