//! Audiobook metadata inferred from folder names
//!
//! The folder that holds a file is split into segments. Depending on how many
//! there are, the leading segments are taken as author and series and the
//! next one as title:
//!
//! | Folder                           | author | series | title |
//! |----------------------------------|--------|--------|-------|
//! | `Title`                          | -      | -      | Title |
//! | `Author/Title`                   | Author | -      | Title |
//! | `Author/Series/Title`            | Author | Series | Title |
//!
//! A title folder named `1999 - Title` yields a publish year, and with subtitle
//! parsing enabled `Title - Subtitle` is split on the first `" - "`.

use crate::{AudiobookData, Result, ScanError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::VecDeque;
use std::path::{Component, Path};

/// Separator between year, title and subtitle in a folder name
const TITLE_SEPARATOR: &str = " - ";

static PUBLISH_YEAR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4}) - (.+)").expect("publish year pattern is valid")
});

/// Parse the folder of `relpath` into an audiobook skeleton with no files
///
/// # Arguments
///
/// * `root` - Scan root, joined with the folder for `full_path`
/// * `relpath` - File path relative to `root`
/// * `parse_subtitle` - Split `"Title - Subtitle"` folder names
///
/// # Errors
///
/// `ScanError::FileAtRoot` when the file has no containing folder.
pub fn parse_audiobook_path(
    root: &Path,
    relpath: &Path,
    parse_subtitle: bool,
) -> Result<AudiobookData> {
    let dir = relpath
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .ok_or_else(|| ScanError::FileAtRoot(relpath.to_path_buf()))?;

    let mut segments = path_segments(dir);

    let author = if segments.len() > 1 {
        segments.pop_front()
    } else {
        None
    };
    let series = if segments.len() > 1 {
        segments.pop_front()
    } else {
        None
    };
    let title = segments
        .pop_front()
        .ok_or_else(|| ScanError::FileAtRoot(relpath.to_path_buf()))?;

    let (publish_year, title) = match split_publish_year(&title) {
        Some((year, rest)) => (Some(year.to_string()), rest.to_string()),
        None => (None, title),
    };

    let (title, subtitle) = if parse_subtitle {
        split_subtitle(&title)
    } else {
        (title, None)
    };

    Ok(AudiobookData {
        author,
        title,
        subtitle,
        series,
        publish_year,
        path: dir.to_path_buf(),
        full_path: root.join(dir),
        audio_files: Vec::new(),
        other_files: Vec::new(),
    })
}

/// Normal path segments of a relative folder
///
/// `.` and `..` are not book folders and are dropped, so only real names
/// count toward the author/series depth.
fn path_segments(dir: &Path) -> VecDeque<String> {
    dir.components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

/// Split `"1999 - Title"` into `("1999", "Title")`
pub fn split_publish_year(title: &str) -> Option<(&str, &str)> {
    let captures = PUBLISH_YEAR_REGEX.captures(title)?;
    let year = captures.get(1)?.as_str();
    let rest = captures.get(2)?.as_str();

    year.parse::<u16>().ok().map(|_| (year, rest))
}

/// Split `"Title - Subtitle - More"` into `("Title", Some("Subtitle - More"))`
pub fn split_subtitle(title: &str) -> (String, Option<String>) {
    match title.split_once(TITLE_SEPARATOR) {
        Some((title, subtitle)) => (title.to_string(), Some(subtitle.to_string())),
        None => (title.to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(relpath: &str, parse_subtitle: bool) -> AudiobookData {
        parse_audiobook_path(Path::new("/audiobooks"), Path::new(relpath), parse_subtitle)
            .unwrap()
    }

    #[test]
    fn test_title_only() {
        let book = parse("Great Book/01.mp3", false);
        assert_eq!(book.author, None);
        assert_eq!(book.series, None);
        assert_eq!(book.title, "Great Book");
        assert_eq!(book.path, PathBuf::from("Great Book"));
        assert_eq!(book.full_path, PathBuf::from("/audiobooks/Great Book"));
    }

    #[test]
    fn test_author_and_title() {
        let book = parse("Author A/Great Book/01.mp3", false);
        assert_eq!(book.author.as_deref(), Some("Author A"));
        assert_eq!(book.series, None);
        assert_eq!(book.title, "Great Book");
    }

    #[test]
    fn test_author_series_and_title() {
        let book = parse("Author A/Series X/Great Book/01.mp3", false);
        assert_eq!(book.author.as_deref(), Some("Author A"));
        assert_eq!(book.series.as_deref(), Some("Series X"));
        assert_eq!(book.title, "Great Book");
        assert_eq!(book.path, PathBuf::from("Author A/Series X/Great Book"));
    }

    #[test]
    fn test_deeper_folders_use_third_segment_as_title() {
        let book = parse("Author A/Series X/Great Book/Disc 1/01.mp3", false);
        assert_eq!(book.author.as_deref(), Some("Author A"));
        assert_eq!(book.series.as_deref(), Some("Series X"));
        assert_eq!(book.title, "Great Book");
        assert_eq!(book.path, PathBuf::from("Author A/Series X/Great Book/Disc 1"));
    }

    #[test]
    fn test_file_at_root_is_rejected() {
        let err = parse_audiobook_path(Path::new("/audiobooks"), Path::new("orphan.mp3"), false)
            .unwrap_err();
        assert!(matches!(err, ScanError::FileAtRoot(path) if path == Path::new("orphan.mp3")));
    }

    #[test]
    fn test_publish_year() {
        let book = parse("Author A/1999 - Great Book/01.mp3", false);
        assert_eq!(book.publish_year.as_deref(), Some("1999"));
        assert_eq!(book.title, "Great Book");
    }

    #[test]
    fn test_non_numeric_year_is_ignored() {
        let book = parse("Author A/Not A Year - Foo/01.mp3", false);
        assert_eq!(book.publish_year, None);
        assert_eq!(book.title, "Not A Year - Foo");
    }

    #[test]
    fn test_year_needs_four_digits_and_separator() {
        assert_eq!(split_publish_year("199 - Book"), None);
        assert_eq!(split_publish_year("1999-Book"), None);
        assert_eq!(split_publish_year("1999 - "), None);
        assert_eq!(split_publish_year("Book 1999 - Thing"), None);
        assert_eq!(split_publish_year("19999 - Book"), None);
        assert_eq!(split_publish_year("2004 - Book"), Some(("2004", "Book")));
    }

    #[test]
    fn test_subtitle_split_on_first_separator() {
        let book = parse("Author A/Main Title - Sub One - Sub Two/01.mp3", true);
        assert_eq!(book.title, "Main Title");
        assert_eq!(book.subtitle.as_deref(), Some("Sub One - Sub Two"));
    }

    #[test]
    fn test_subtitle_disabled_leaves_title() {
        let book = parse("Author A/Main Title - Sub One - Sub Two/01.mp3", false);
        assert_eq!(book.title, "Main Title - Sub One - Sub Two");
        assert_eq!(book.subtitle, None);
    }

    #[test]
    fn test_year_then_subtitle() {
        let book = parse("Author A/Series X/2010 - Main Title - Part One/01.mp3", true);
        assert_eq!(book.publish_year.as_deref(), Some("2010"));
        assert_eq!(book.title, "Main Title");
        assert_eq!(book.subtitle.as_deref(), Some("Part One"));
    }

    #[test]
    fn test_subtitle_without_separator() {
        let book = parse("Author A/Main Title/01.mp3", true);
        assert_eq!(book.title, "Main Title");
        assert_eq!(book.subtitle, None);
    }

    #[test]
    fn test_skeleton_has_no_files() {
        let book = parse("Author A/Main Title/01.mp3", false);
        assert!(book.audio_files.is_empty());
        assert!(book.other_files.is_empty());
    }
}
