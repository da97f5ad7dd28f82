//! Chatscribe - WhatsApp Chat Archive Rewriter
//!
//! A CLI tool that turns a WhatsApp chat export into a text-searchable
//! archive by transcribing voice notes and describing images inline.
//!
//! # Overview
//!
//! Given an exported chat folder (the zip WhatsApp produces, unpacked),
//! Chatscribe:
//! - Parses `_chat.txt` line by line, locating `<attached: FILENAME>` markers
//! - Transcribes audio attachments with OpenAI Whisper
//! - Describes image attachments with a local vision model via Ollama
//! - Writes `processed_chat.txt` with markers replaced by
//!   `[VOICE NOTE: ...]` and `[IMAGE: ...]` tags
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `chat` - Export line parsing and media resolution
//! - `audio` - Audio container normalization via ffmpeg
//! - `transcription` - Speech-to-text service adapter
//! - `description` - Image-to-text service adapter
//! - `rewriter` - Pipeline coordination and output writing
//!
//! # Example
//!
//! ```rust,no_run
//! use chatscribe::config::Settings;
//! use chatscribe::rewriter::Rewriter;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let rewriter = Rewriter::new(settings)?;
//!
//!     let stats = rewriter.process("./chat_folder".as_ref()).await?;
//!     println!("Rewrote {} voice notes", stats.voice_notes);
//!
//!     Ok(())
//! }
//! ```

pub mod audio;
pub mod chat;
pub mod cli;
pub mod config;
pub mod description;
pub mod error;
pub mod openai;
pub mod rewriter;
pub mod transcription;

pub use error::{ChatscribeError, Result};
