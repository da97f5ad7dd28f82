//! Configuration module for Chatscribe.

mod settings;

pub use settings::{DescriptionSettings, GeneralSettings, Settings, TranscriptionSettings};
