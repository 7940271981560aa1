//! File type lookup by extension

use crate::FileType;
use std::path::Path;

/// Audio file extensions
pub const AUDIO_FORMATS: &[&str] = &["m4b", "mp3", "m4a"];

/// Release info extensions
pub const INFO_FORMATS: &[&str] = &["nfo"];

/// Image extensions
pub const IMAGE_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Ebook extensions
pub const EBOOK_FORMATS: &[&str] = &["epub", "pdf"];

/// Classify an extension, with or without its leading dot, in any case
pub fn get_file_type(ext: &str) -> FileType {
    let ext = ext.to_lowercase();
    let ext = ext.strip_prefix('.').unwrap_or(&ext);

    if AUDIO_FORMATS.contains(&ext) {
        FileType::Audio
    } else if INFO_FORMATS.contains(&ext) {
        FileType::Info
    } else if IMAGE_FORMATS.contains(&ext) {
        FileType::Image
    } else if EBOOK_FORMATS.contains(&ext) {
        FileType::Ebook
    } else {
        FileType::Unknown
    }
}

/// Extension of a path without the leading dot, empty if there is none
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default()
}
