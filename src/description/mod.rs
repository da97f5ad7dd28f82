//! Image description service adapter.
//!
//! Images are handed to a vision-capable language model behind the
//! [`Describer`] trait; the rewriter only sees "image path in, text out"
//! and catches failures per attachment.

mod ollama;

pub use ollama::OllamaDescriber;

use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Trait for image description services.
#[async_trait]
pub trait Describer: Send + Sync {
    /// Describe an image file in a short sentence.
    async fn describe(&self, image_path: &Path) -> Result<String>;
}
