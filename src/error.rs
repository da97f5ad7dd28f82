//! Error types for Chatscribe.

use thiserror::Error;

/// Library-level error type for Chatscribe operations.
#[derive(Error, Debug)]
pub enum ChatscribeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Chat file not found: {0}. Expected a WhatsApp export folder containing _chat.txt.")]
    ChatFileMissing(String),

    #[error("Audio decoding failed: {0}")]
    AudioDecode(String),

    #[error("Transcription failed: {0}")]
    Transcription(String),

    #[error("Image description failed: {0}")]
    Description(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OpenAI API error: {0}")]
    OpenAI(String),

    #[error("External tool not found: {0}. Please install it and ensure it's in your PATH.")]
    ToolNotFound(String),

    #[error("External tool failed: {0}")]
    ToolFailed(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for Chatscribe operations.
pub type Result<T> = std::result::Result<T, ChatscribeError>;
