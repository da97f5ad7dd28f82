//! Pre-flight checks before expensive operations.
//!
//! Validates that required tools and configuration are available
//! before starting a run that would otherwise fail midway.

use crate::error::{ChatscribeError, Result};
use std::process::Command;

/// Run pre-flight checks for a rewrite run.
///
/// Returns Ok(()) if all checks pass, or an error describing what's missing.
pub fn check() -> Result<()> {
    check_api_key()?;
    check_tool("ffmpeg")?;
    Ok(())
}

/// Check if OpenAI API key is configured.
fn check_api_key() -> Result<()> {
    match std::env::var("OPENAI_API_KEY") {
        Ok(key) if !key.is_empty() => Ok(()),
        Ok(_) => Err(ChatscribeError::Config(
            "OPENAI_API_KEY is empty. Set it with: export OPENAI_API_KEY='sk-...'".to_string(),
        )),
        Err(_) => Err(ChatscribeError::Config(
            "OPENAI_API_KEY not set. Set it with: export OPENAI_API_KEY='sk-...'".to_string(),
        )),
    }
}

/// Check if an external tool is available.
fn check_tool(name: &str) -> Result<()> {
    // ffmpeg uses -version (single dash)
    let version_arg = match name {
        "ffmpeg" | "ffprobe" => "-version",
        _ => "--version",
    };
    match Command::new(name).arg(version_arg).output() {
        Ok(output) if output.status.success() => Ok(()),
        Ok(_) => Err(ChatscribeError::ToolNotFound(format!(
            "{} is installed but not working correctly",
            name
        ))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ChatscribeError::ToolNotFound(name.to_string()))
        }
        Err(e) => Err(ChatscribeError::ToolNotFound(format!("{}: {}", name, e))),
    }
}

/// Platform-specific install hints shown when ffmpeg is missing.
pub fn ffmpeg_install_hint() -> &'static str {
    if cfg!(target_os = "macos") {
        "Install it with: brew install ffmpeg"
    } else if cfg!(target_os = "windows") {
        "Download it from https://ffmpeg.org/download.html"
    } else {
        "Install it with your package manager, e.g.: sudo apt-get install ffmpeg"
    }
}
