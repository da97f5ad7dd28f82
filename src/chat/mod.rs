//! WhatsApp export parsing and media resolution.
//!
//! An exported chat folder contains `_chat.txt` plus the referenced media
//! files. Attachment lines look like:
//!
//! ```text
//! [2024/01/22, 17:25:03] John: <attached: 00000019-AUDIO-2024-12-09.opus>
//! ```
//!
//! often with invisible Unicode direction marks around the marker. This
//! module finds the marker span on a line and resolves the referenced file
//! on disk; it never touches text outside the marker.

mod media;
mod parser;

pub use media::{classify, resolve, MediaKind, ResolvedMedia};
pub use parser::{AttachmentMarker, LineParser};

/// Fixed name of the chat export file inside the folder.
pub const CHAT_FILE_NAME: &str = "_chat.txt";

/// Fixed name of the rewritten output file inside the folder.
pub const OUTPUT_FILE_NAME: &str = "processed_chat.txt";
