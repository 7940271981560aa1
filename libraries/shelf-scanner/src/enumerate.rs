//! Recursive file listing

use crate::{Result, ScanError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists every regular file beneath a root folder
///
/// Implementers return absolute paths and leave directories out. Any
/// traversal failure fails the whole listing.
#[async_trait]
pub trait PathEnumerator: Send + Sync {
    /// List all files under `root`
    async fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// `walkdir` backed enumerator, run on the blocking thread pool
#[derive(Debug, Clone, Default)]
pub struct WalkDirEnumerator {
    /// Whether to follow symbolic links
    follow_links: bool,

    /// Visit entries of each folder in file name order
    sort_by_file_name: bool,
}

impl WalkDirEnumerator {
    /// Create a new enumerator
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to follow symbolic links
    #[must_use]
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Set whether entries are visited in file name order
    ///
    /// Without sorting, discovery order is whatever the OS returns.
    #[must_use]
    pub fn sort_by_file_name(mut self, sort: bool) -> Self {
        self.sort_by_file_name = sort;
        self
    }

    /// Walk `root` on the current thread
    pub fn walk(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            return Err(ScanError::FileNotFound(root.display().to_string()));
        }

        if !root.is_dir() {
            return Err(ScanError::InvalidPath(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        let mut walker = WalkDir::new(root).follow_links(self.follow_links);
        if self.sort_by_file_name {
            walker = walker.sort_by_file_name();
        }

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|source| ScanError::Enumeration {
                path: root.to_path_buf(),
                source,
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            files.push(entry.into_path());
        }

        Ok(files)
    }
}

#[async_trait]
impl PathEnumerator for WalkDirEnumerator {
    async fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let enumerator = self.clone();
        let root = root.to_path_buf();

        tokio::task::spawn_blocking(move || enumerator.walk(&root))
            .await
            .map_err(|e| ScanError::Task(e.to_string()))?
    }
}

/// Enumerator over a fixed list of paths, for callers that already walked
/// the library. Only paths beneath the requested root are listed.
#[async_trait]
impl PathEnumerator for Vec<PathBuf> {
    async fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        Ok(self
            .iter()
            .filter(|path| path.starts_with(root))
            .cloned()
            .collect())
    }
}
