//! CLI module for Chatscribe.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::Parser;
use std::path::PathBuf;

/// Chatscribe - WhatsApp Chat Archive Rewriter
///
/// Rewrites an exported WhatsApp chat so voice notes and images become
/// searchable text, using Whisper for transcription and a local vision
/// model for image descriptions.
#[derive(Parser, Debug)]
#[command(name = "chatscribe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the exported chat folder (must contain _chat.txt)
    pub folder: PathBuf,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
