//! Chat rewriting pipeline.
//!
//! Coordinates line parsing, media resolution, and the two service adapters,
//! and writes the rewritten transcript.

use crate::chat::{resolve, LineParser, ResolvedMedia, CHAT_FILE_NAME, OUTPUT_FILE_NAME};
use crate::config::Settings;
use crate::description::{Describer, OllamaDescriber};
use crate::error::{ChatscribeError, Result};
use crate::transcription::{Transcriber, WhisperTranscriber};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// The main rewriter for a chat export folder.
///
/// Only failing to read the chat file aborts a run. Everything that goes
/// wrong with an individual attachment degrades to a visible fallback in the
/// output and a warning, and processing continues with the next line.
pub struct Rewriter {
    parser: LineParser,
    transcriber: Arc<dyn Transcriber>,
    describer: Arc<dyn Describer>,
}

impl Rewriter {
    /// Create a rewriter with the default service adapters.
    pub fn new(settings: Settings) -> Result<Self> {
        let transcriber: Arc<dyn Transcriber> =
            Arc::new(WhisperTranscriber::new(&settings.transcription));
        let describer: Arc<dyn Describer> = Arc::new(OllamaDescriber::new(&settings.description)?);

        Ok(Self {
            parser: LineParser::new(),
            transcriber,
            describer,
        })
    }

    /// Create a rewriter with custom service adapters.
    pub fn with_components(
        transcriber: Arc<dyn Transcriber>,
        describer: Arc<dyn Describer>,
    ) -> Self {
        Self {
            parser: LineParser::new(),
            transcriber,
            describer,
        }
    }

    /// Process a chat export folder, writing `processed_chat.txt` inside it.
    ///
    /// Lines are processed in input order and written incrementally, so a
    /// crash mid-run leaves a prefix of correctly processed lines. The input
    /// file is never mutated; an existing output file is overwritten.
    #[instrument(skip(self), fields(folder = %folder.display()))]
    pub async fn process(&self, folder: &Path) -> Result<RewriteStats> {
        let chat_path = folder.join(CHAT_FILE_NAME);
        let content = std::fs::read_to_string(&chat_path)
            .map_err(|_| ChatscribeError::ChatFileMissing(chat_path.display().to_string()))?;

        let output_path = folder.join(OUTPUT_FILE_NAME);
        let mut writer = std::io::BufWriter::new(std::fs::File::create(&output_path)?);

        let mut stats = RewriteStats::default();

        // split_inclusive keeps line terminators, so untouched lines round-trip
        // byte-for-byte, CRLF and missing final newline included.
        for raw_line in content.split_inclusive('\n') {
            let processed = self.process_line(folder, raw_line, &mut stats).await;
            writer.write_all(processed.as_bytes())?;
            writer.flush()?;
            stats.lines += 1;
        }

        info!(
            "Rewrote {} lines ({} voice notes, {} images, {} fallbacks, {} unresolved)",
            stats.lines, stats.voice_notes, stats.images, stats.fallbacks, stats.unresolved
        );

        Ok(stats)
    }

    /// Process one physical line, substituting its marker span if present.
    async fn process_line(&self, folder: &Path, line: &str, stats: &mut RewriteStats) -> String {
        let marker = match self.parser.find_marker(line) {
            Some(m) => m,
            None => return line.to_string(),
        };

        match resolve(folder, &marker.filename) {
            ResolvedMedia::Unsupported => line.to_string(),

            ResolvedMedia::Missing(path) => {
                warn!("Missing file for reference {}", marker.filename);
                stats.unresolved += 1;
                stats
                    .warnings
                    .push(format!("missing media file: {}", path.display()));
                line.to_string()
            }

            ResolvedMedia::Audio(path) => {
                info!("Transcribing voice note {}", marker.filename);
                let tag = match self.transcriber.transcribe(&path).await {
                    Ok(text) => {
                        stats.voice_notes += 1;
                        format!("[VOICE NOTE: {}]", text)
                    }
                    Err(e) => {
                        warn!("Transcription failed for {}: {}", marker.filename, e);
                        stats.fallbacks += 1;
                        stats
                            .warnings
                            .push(format!("transcription failed for {}: {}", marker.filename, e));
                        "[VOICE NOTE: transcription failed]".to_string()
                    }
                };
                self.parser.substitute(line, &marker, &tag)
            }

            ResolvedMedia::Image(path) => {
                info!("Describing image {}", marker.filename);
                let tag = match self.describer.describe(&path).await {
                    Ok(text) => {
                        stats.images += 1;
                        format!("[IMAGE: {}]", text)
                    }
                    Err(e) => {
                        warn!("Description failed for {}: {}", marker.filename, e);
                        stats.fallbacks += 1;
                        stats
                            .warnings
                            .push(format!("description failed for {}: {}", marker.filename, e));
                        "[IMAGE: description failed]".to_string()
                    }
                };
                self.parser.substitute(line, &marker, &tag)
            }
        }
    }
}

/// Result of rewriting one chat export.
#[derive(Debug, Default)]
pub struct RewriteStats {
    /// Physical lines processed.
    pub lines: usize,
    /// Voice notes transcribed successfully.
    pub voice_notes: usize,
    /// Images described successfully.
    pub images: usize,
    /// Attachments substituted with a failure fallback tag.
    pub fallbacks: usize,
    /// References whose file was missing on disk.
    pub unresolved: usize,
    /// Human-readable warnings collected during the run.
    pub warnings: Vec<String>,
}
