//! Grouping of library files into audiobooks
//!
//! Every distinct folder that holds files becomes one audiobook. The first
//! file seen in a folder decides its metadata; later files are attached to
//! the same record. Files directly in the scan root belong to no book and
//! are skipped.

use crate::enumerate::{PathEnumerator, WalkDirEnumerator};
use crate::file_type::{extension_of, get_file_type};
use crate::filepath::parse_audiobook_path;
use crate::{AudiobookData, AudiobookFile, Result, ScanError};
use shelf_core::ServerSettings;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Outcome of a full library scan
///
/// Enumeration failures do not fail the scan: they leave `audiobooks` empty
/// and are kept in `enumeration_error`. Use [`ScanReport::into_result`] for
/// strict handling.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// One audiobook per folder, in the order folders were first seen
    pub audiobooks: Vec<AudiobookData>,

    /// Files that could not be attributed to any audiobook
    pub skipped_files: Vec<PathBuf>,

    /// Set when listing the library failed
    pub enumeration_error: Option<ScanError>,
}

impl ScanReport {
    /// True when enumeration succeeded and no file was skipped
    pub fn is_complete(&self) -> bool {
        self.enumeration_error.is_none() && self.skipped_files.is_empty()
    }

    /// Audiobooks found, or the enumeration error if listing failed
    pub fn into_result(self) -> Result<Vec<AudiobookData>> {
        match self.enumeration_error {
            Some(err) => Err(err),
            None => Ok(self.audiobooks),
        }
    }
}

/// Insertion-ordered grouping of files by folder
#[derive(Debug, Default)]
struct AudiobookGroups {
    audiobooks: Vec<AudiobookData>,
    index: HashMap<PathBuf, usize>,
    skipped_files: Vec<PathBuf>,
}

impl AudiobookGroups {
    fn add(&mut self, root: &Path, full_path: PathBuf, parse_subtitle: bool) {
        let relpath = match relative_path(root, &full_path) {
            Ok(relpath) => relpath,
            Err(e) => {
                tracing::warn!("{}", e);
                self.skipped_files.push(full_path);
                return;
            }
        };

        let dir = relpath.parent().unwrap_or(Path::new("")).to_path_buf();

        let existing = self.index.get(&dir).copied();
        let idx = match existing {
            Some(idx) => idx,
            None => match parse_audiobook_path(root, &relpath, parse_subtitle) {
                Ok(audiobook) => {
                    tracing::debug!(
                        path = %audiobook.path.display(),
                        title = %audiobook.title,
                        "Found audiobook"
                    );
                    let idx = self.audiobooks.len();
                    self.audiobooks.push(audiobook);
                    self.index.insert(dir, idx);
                    idx
                }
                Err(e) => {
                    tracing::error!("{}", e);
                    self.skipped_files.push(full_path);
                    return;
                }
            },
        };

        self.audiobooks[idx].push_file(audiobook_file(relpath, full_path));
    }
}

/// Scanner that turns a library folder into audiobooks
pub struct AudiobookScanner<E = WalkDirEnumerator> {
    enumerator: E,

    /// Split `"Title - Subtitle"` folder names
    parse_subtitle: bool,
}

impl Default for AudiobookScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl AudiobookScanner {
    /// Create a scanner that walks the filesystem in file name order
    pub fn new() -> Self {
        Self::with_enumerator(WalkDirEnumerator::new().sort_by_file_name(true))
    }

    /// Create a scanner configured from server settings
    pub fn from_settings(settings: &ServerSettings) -> Self {
        Self::new().parse_subtitle(settings.parse_subtitle_enabled())
    }

    /// Create a scanner from settings loaded via [`ServerSettings::load`]
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let settings = ServerSettings::load(config_path)?;
        Ok(Self::from_settings(&settings))
    }
}

impl<E: PathEnumerator> AudiobookScanner<E> {
    /// Create a scanner over a custom file listing
    pub fn with_enumerator(enumerator: E) -> Self {
        Self {
            enumerator,
            parse_subtitle: false,
        }
    }

    /// Set whether `"Title - Subtitle"` folder names are split
    #[must_use]
    pub fn parse_subtitle(mut self, parse: bool) -> Self {
        self.parse_subtitle = parse;
        self
    }

    /// Scan every audiobook under `root`
    pub async fn scan_all(&self, root: &Path) -> ScanReport {
        let files = match self.enumerator.list_files(root).await {
            Ok(files) => files,
            Err(e) => {
                tracing::error!(root = %root.display(), "Failed to scan library: {}", e);
                return ScanReport {
                    enumeration_error: Some(e),
                    ..Default::default()
                };
            }
        };

        let total_files = files.len();
        let report = group_audiobook_files(root, files, self.parse_subtitle);
        let attached_files: usize = report.audiobooks.iter().map(AudiobookData::file_count).sum();

        tracing::info!(
            root = %root.display(),
            "Scanned {} audiobooks from {} files ({} attached, {} skipped)",
            report.audiobooks.len(),
            total_files,
            attached_files,
            report.skipped_files.len()
        );

        report
    }

    /// Scan the single audiobook stored in `audiobook_dir`
    ///
    /// `audiobook_dir` must lie under `root`; paths stay relative to `root`
    /// so author and series are still inferred. All attributable files are
    /// attached to one audiobook, whose metadata comes from the first of
    /// them. Returns `None` when no file could be attributed.
    pub async fn scan_one(
        &self,
        root: &Path,
        audiobook_dir: &Path,
    ) -> Result<Option<AudiobookData>> {
        let files = self.enumerator.list_files(audiobook_dir).await.map_err(|e| {
            tracing::error!(path = %audiobook_dir.display(), "Failed to scan audiobook: {}", e);
            e
        })?;

        let mut audiobook: Option<AudiobookData> = None;

        for full_path in files {
            let relpath = match relative_path(root, &full_path) {
                Ok(relpath) => relpath,
                Err(e) => {
                    tracing::warn!("{}", e);
                    continue;
                }
            };

            if audiobook.is_none() {
                match parse_audiobook_path(root, &relpath, self.parse_subtitle) {
                    Ok(book) => audiobook = Some(book),
                    Err(e) => {
                        tracing::error!("{}", e);
                        continue;
                    }
                }
            }

            if let Some(book) = audiobook.as_mut() {
                book.push_file(audiobook_file(relpath, full_path));
            }
        }

        Ok(audiobook)
    }
}

/// Scan every audiobook under `root` with the default filesystem walker
pub async fn scan_all(root: &Path, settings: Option<&ServerSettings>) -> ScanReport {
    scanner_for(settings).scan_all(root).await
}

/// Scan the audiobook in `audiobook_dir` with the default filesystem walker
pub async fn scan_one(
    root: &Path,
    audiobook_dir: &Path,
    settings: Option<&ServerSettings>,
) -> Result<Option<AudiobookData>> {
    scanner_for(settings).scan_one(root, audiobook_dir).await
}

fn scanner_for(settings: Option<&ServerSettings>) -> AudiobookScanner {
    settings
        .map(AudiobookScanner::from_settings)
        .unwrap_or_default()
}

/// Group already listed files into audiobooks, keyed by their folder
///
/// Audiobooks come back in the order their folder was first seen, files in
/// the order given.
pub fn group_audiobook_files(
    root: &Path,
    files: impl IntoIterator<Item = PathBuf>,
    parse_subtitle: bool,
) -> ScanReport {
    let mut groups = AudiobookGroups::default();
    for full_path in files {
        groups.add(root, full_path, parse_subtitle);
    }

    ScanReport {
        audiobooks: groups.audiobooks,
        skipped_files: groups.skipped_files,
        enumeration_error: None,
    }
}

/// Path of `full_path` relative to `root`
fn relative_path(root: &Path, full_path: &Path) -> Result<PathBuf> {
    full_path
        .strip_prefix(root)
        .map(Path::to_path_buf)
        .map_err(|_| ScanError::OutsideRoot {
            path: full_path.to_path_buf(),
            root: root.to_path_buf(),
        })
}

fn audiobook_file(relpath: PathBuf, full_path: PathBuf) -> AudiobookFile {
    let ext = extension_of(&full_path);
    let filename = full_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    AudiobookFile {
        filetype: get_file_type(&ext),
        filename,
        path: relpath,
        full_path,
        ext,
    }
}
