//! Media classification and on-disk resolution.

use std::path::{Path, PathBuf};

/// Classification of an attachment by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Voice notes and other audio containers.
    Audio,
    /// Raster images.
    Image,
    /// Anything else; left untouched in the output.
    Unsupported,
}

/// Voice notes export as `.opus`; the rest are accepted because the decode
/// step normalizes every container the same way.
const AUDIO_EXTENSIONS: &[&str] = &["opus", "mp3", "m4a", "ogg", "aac", "wav"];

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Classifies a filename by case-insensitive extension.
pub fn classify(filename: &str) -> MediaKind {
    let ext = match Path::new(filename).extension().and_then(|e| e.to_str()) {
        Some(e) => e.to_ascii_lowercase(),
        None => return MediaKind::Unsupported,
    };

    if AUDIO_EXTENSIONS.contains(&ext.as_str()) {
        MediaKind::Audio
    } else if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        MediaKind::Image
    } else {
        MediaKind::Unsupported
    }
}

/// Outcome of resolving an attachment reference against the chat folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedMedia {
    /// Audio file present on disk.
    Audio(PathBuf),
    /// Image file present on disk.
    Image(PathBuf),
    /// Supported kind, but the file is not in the folder.
    Missing(PathBuf),
    /// Extension not recognized; not an error.
    Unsupported,
}

/// Resolves a referenced filename to a file inside the chat folder.
pub fn resolve(folder: &Path, filename: &str) -> ResolvedMedia {
    let kind = classify(filename);
    if kind == MediaKind::Unsupported {
        return ResolvedMedia::Unsupported;
    }

    let path = folder.join(filename);
    if !path.exists() {
        return ResolvedMedia::Missing(path);
    }

    match kind {
        MediaKind::Audio => ResolvedMedia::Audio(path),
        MediaKind::Image => ResolvedMedia::Image(path),
        MediaKind::Unsupported => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_audio() {
        assert_eq!(classify("a.opus"), MediaKind::Audio);
        assert_eq!(classify("A.OPUS"), MediaKind::Audio);
        assert_eq!(classify("note.m4a"), MediaKind::Audio);
    }

    #[test]
    fn test_classify_image() {
        assert_eq!(classify("b.jpg"), MediaKind::Image);
        assert_eq!(classify("b.JPEG"), MediaKind::Image);
        assert_eq!(classify("b.png"), MediaKind::Image);
    }

    #[test]
    fn test_classify_unsupported() {
        assert_eq!(classify("c.pdf"), MediaKind::Unsupported);
        assert_eq!(classify("noextension"), MediaKind::Unsupported);
        assert_eq!(classify("movie.mp4"), MediaKind::Unsupported);
    }

    #[test]
    fn test_resolve_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.opus");
        std::fs::write(&path, b"dummy").unwrap();

        assert_eq!(resolve(dir.path(), "a.opus"), ResolvedMedia::Audio(path));
    }

    #[test]
    fn test_resolve_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let expected = dir.path().join("gone.jpg");
        assert_eq!(resolve(dir.path(), "gone.jpg"), ResolvedMedia::Missing(expected));
    }

    #[test]
    fn test_resolve_unsupported_skips_disk_check() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(resolve(dir.path(), "c.pdf"), ResolvedMedia::Unsupported);
    }
}
