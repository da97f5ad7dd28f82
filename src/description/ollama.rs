//! Ollama vision model description implementation.

use super::Describer;
use crate::config::DescriptionSettings;
use crate::error::{ChatscribeError, Result};
use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

/// Describer backed by a local Ollama server.
pub struct OllamaDescriber {
    base_url: String,
    model: String,
    prompt: String,
    client: reqwest::Client,
}

impl OllamaDescriber {
    /// Create a describer from settings.
    pub fn new(settings: &DescriptionSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(|e| ChatscribeError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            prompt: settings.prompt.clone(),
            client,
        })
    }

    /// Checks if the Ollama server is reachable.
    pub async fn check_health(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    images: Vec<String>,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

#[async_trait]
impl Describer for OllamaDescriber {
    #[instrument(skip(self), fields(image_path = %image_path.display()))]
    async fn describe(&self, image_path: &Path) -> Result<String> {
        let image_bytes = tokio::fs::read(image_path).await?;
        let image_base64 = base64::engine::general_purpose::STANDARD.encode(&image_bytes);

        let api_request = GenerateRequest {
            model: self.model.clone(),
            prompt: self.prompt.clone(),
            images: vec![image_base64],
            stream: false,
        };

        let url = format!("{}/api/generate", self.base_url);
        debug!("Requesting image description from {}", url);

        let response = self
            .client
            .post(&url)
            .json(&api_request)
            .send()
            .await
            .map_err(|e| {
                ChatscribeError::Description(format!(
                    "Failed to connect to Ollama at {}: {}",
                    self.base_url, e
                ))
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ChatscribeError::Description(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(ChatscribeError::Description(format!(
                "Ollama API error ({}): {}",
                status, body
            )));
        }

        let api_response: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| ChatscribeError::Description(format!("Failed to parse response: {}", e)))?;

        Ok(api_response.response.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DescriptionSettings;

    #[test]
    fn test_describer_creation() {
        let describer = OllamaDescriber::new(&DescriptionSettings::default()).unwrap();
        assert_eq!(describer.base_url, "http://localhost:11434");
        assert_eq!(describer.model, "llama3.2-vision:latest");
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let settings = DescriptionSettings {
            base_url: "http://192.168.1.100:11434/".to_string(),
            ..Default::default()
        };
        let describer = OllamaDescriber::new(&settings).unwrap();
        assert_eq!(describer.base_url, "http://192.168.1.100:11434");
    }

    #[tokio::test]
    async fn test_check_health_unreachable_server() {
        let settings = DescriptionSettings {
            // Reserved port; nothing listens here.
            base_url: "http://127.0.0.1:1".to_string(),
            timeout_seconds: 2,
            ..Default::default()
        };
        let describer = OllamaDescriber::new(&settings).unwrap();
        assert!(!describer.check_health().await);
    }

    #[test]
    fn test_request_serialization() {
        let request = GenerateRequest {
            model: "llava".to_string(),
            prompt: "Describe this image.".to_string(),
            images: vec!["aGVsbG8=".to_string()],
            stream: false,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["stream"], false);
        assert_eq!(json["images"][0], "aGVsbG8=");
    }
}
