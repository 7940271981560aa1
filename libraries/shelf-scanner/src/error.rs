//! Error types for the scanner

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to enumerate {}: {source}", .path.display())]
    Enumeration {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid file path: {0}")]
    InvalidPath(String),

    #[error("Ignoring file in root dir: {}", .0.display())]
    FileAtRoot(PathBuf),

    #[error("File {} is outside of scan root {}", .path.display(), .root.display())]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("Settings error: {0}")]
    Settings(#[from] shelf_core::ShelfError),

    #[error("Enumeration task failed: {0}")]
    Task(String),
}
