//! Shelf Audiobook Scanner
//!
//! Walks an audiobook library folder and groups the files it finds into
//! audiobooks, inferring author, series, title, subtitle and publish year
//! from the folder layout:
//!
//! ```text
//! <root>/<Author>/<Series>/<Year> - <Title> - <Subtitle>/<files>
//! ```
//!
//! # Architecture
//!
//! - `file_type`: Extension to file type lookup
//! - `filepath`: Folder name parsing into audiobook metadata
//! - `enumerate`: Recursive file listing (`PathEnumerator`)
//! - `scanner`: Grouping of files into audiobooks

mod error;
mod types;

pub mod enumerate;
pub mod file_type;
pub mod filepath;
pub mod scanner;

pub use enumerate::{PathEnumerator, WalkDirEnumerator};
pub use error::ScanError;
pub use scanner::{scan_all, scan_one, AudiobookScanner, ScanReport};
pub use types::*;

/// Re-export commonly used types
pub type Result<T> = std::result::Result<T, ScanError>;
