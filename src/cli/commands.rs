//! Process command implementation.

use crate::chat::OUTPUT_FILE_NAME;
use crate::cli::{preflight, Output};
use crate::config::Settings;
use crate::description::OllamaDescriber;
use crate::error::ChatscribeError;
use crate::rewriter::Rewriter;
use anyhow::Result;
use std::path::Path;

/// Run the rewrite over a chat export folder.
///
/// Exits zero as long as the output file was produced, even when some
/// attachments degraded to fallback tags; those are surfaced as warnings.
pub async fn run_process(folder: &Path, settings: Settings) -> Result<()> {
    // Pre-flight checks
    if let Err(e) = preflight::check() {
        Output::error(&format!("{}", e));
        if matches!(e, ChatscribeError::ToolNotFound(_)) {
            Output::info(preflight::ffmpeg_install_hint());
        }
        return Err(e.into());
    }

    let folder = Settings::expand_path(&folder.to_string_lossy());
    let folder = folder.as_path();

    if !folder.is_dir() {
        Output::error(&format!("Not a folder: {}", folder.display()));
        return Err(ChatscribeError::InvalidInput(format!(
            "chat folder does not exist: {}",
            folder.display()
        ))
        .into());
    }

    Output::info(&format!("Processing chat folder: {}", folder.display()));

    // Unreachable Ollama is not fatal (the chat may contain no images, and
    // image failures degrade to fallback tags), but say so up front.
    let describer = OllamaDescriber::new(&settings.description)?;
    if !describer.check_health().await {
        Output::warning(&format!(
            "Ollama is not reachable at {}; image descriptions will fall back",
            settings.description.base_url
        ));
    }

    let rewriter = Rewriter::new(settings)?;

    let spinner = Output::spinner("Rewriting chat...");
    let result = rewriter.process(folder).await;
    spinner.finish_and_clear();

    match result {
        Ok(stats) => {
            Output::success(&format!(
                "Processed {} lines ({} voice notes, {} images)",
                stats.lines, stats.voice_notes, stats.images
            ));
            Output::kv("Output", &folder.join(OUTPUT_FILE_NAME).display().to_string());

            if !stats.warnings.is_empty() {
                Output::warning(&format!(
                    "{} attachment(s) could not be fully processed:",
                    stats.warnings.len()
                ));
                for w in &stats.warnings {
                    Output::list_item(w);
                }
            }
            Ok(())
        }
        Err(e) => {
            Output::error(&format!("Failed to process: {}", e));
            Err(e.into())
        }
    }
}
