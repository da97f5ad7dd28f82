//! Audio container normalization via ffmpeg.
//!
//! Voice note attachments arrive as `.opus` (and occasionally other
//! containers) that the transcription endpoint does not accept verbatim,
//! so every audio file is decoded to MP3 before upload.

use crate::error::{ChatscribeError, Result};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, instrument};

/// Decodes an audio file to MP3 in `output_dir`, returning the new path.
#[instrument(skip(output_dir), fields(source = %source.display()))]
pub async fn decode_to_mp3(source: &Path, output_dir: &Path) -> Result<PathBuf> {
    let base_name = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("audio");
    let dest = output_dir.join(format!("{}.mp3", base_name));

    debug!("Decoding {:?} to MP3", source);

    let result = Command::new("ffmpeg")
        .arg("-i").arg(source)
        .arg("-vn")
        .arg("-codec:a").arg("libmp3lame")
        .arg("-qscale:a").arg("2")
        .arg("-y")
        .arg("-loglevel").arg("error")
        .arg(&dest)
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .await;

    match result {
        Ok(out) if out.status.success() => Ok(dest),
        Ok(out) => {
            let err = String::from_utf8_lossy(&out.stderr);
            Err(ChatscribeError::AudioDecode(format!(
                "ffmpeg conversion failed: {err}"
            )))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ChatscribeError::ToolNotFound("ffmpeg".into()))
        }
        Err(e) => Err(ChatscribeError::AudioDecode(format!("ffmpeg error: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_decode_missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = decode_to_mp3(Path::new("/nonexistent/a.opus"), dir.path()).await;
        assert!(result.is_err());
    }
}
