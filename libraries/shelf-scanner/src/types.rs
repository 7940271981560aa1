//! Common types for the scanner

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Kind of file found in an audiobook folder, derived from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// Playable audio (m4b, mp3, m4a)
    Audio,

    /// Release info (nfo)
    Info,

    /// Cover art and other images
    Image,

    /// Ebook companion files (epub, pdf)
    Ebook,

    /// Anything else
    Unknown,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Info => "info",
            Self::Image => "image",
            Self::Ebook => "ebook",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single file belonging to an audiobook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudiobookFile {
    /// File type derived from the extension
    pub filetype: FileType,

    /// File name including extension
    pub filename: String,

    /// Path relative to the scan root
    pub path: PathBuf,

    /// Absolute path as returned by enumeration
    pub full_path: PathBuf,

    /// Extension without the leading dot, empty if there is none
    pub ext: String,
}

/// An audiobook inferred from one folder of the library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudiobookData {
    /// Author folder, present when the book folder is at least two levels deep
    pub author: Option<String>,

    /// Book title with publish year and subtitle removed
    pub title: String,

    /// Subtitle, only when subtitle parsing is enabled
    pub subtitle: Option<String>,

    /// Series folder, present when the book folder is at least three levels deep
    pub series: Option<String>,

    /// Four digit year from a `"1999 - Title"` folder name
    pub publish_year: Option<String>,

    /// Book folder relative to the scan root
    pub path: PathBuf,

    /// Book folder joined onto the scan root
    pub full_path: PathBuf,

    /// Audio files in discovery order
    pub audio_files: Vec<AudiobookFile>,

    /// Every non-audio file in discovery order
    pub other_files: Vec<AudiobookFile>,
}

impl AudiobookData {
    /// Attach a file to the audio or other list based on its type
    pub fn push_file(&mut self, file: AudiobookFile) {
        if file.filetype == FileType::Audio {
            self.audio_files.push(file);
        } else {
            self.other_files.push(file);
        }
    }

    /// Total number of files attached to this audiobook
    pub fn file_count(&self) -> usize {
        self.audio_files.len() + self.other_files.len()
    }
}
