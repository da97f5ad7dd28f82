//! Transcription service adapter.
//!
//! Voice notes are handed to a speech-to-text service behind the
//! [`Transcriber`] trait; the rewriter only sees "audio path in, text out"
//! and catches failures per attachment.

mod whisper;

pub use whisper::WhisperTranscriber;

use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Trait for transcription services.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe an audio file and return the spoken text.
    async fn transcribe(&self, audio_path: &Path) -> Result<String>;
}
