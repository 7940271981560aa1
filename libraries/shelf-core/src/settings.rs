//! Server settings consumed by the library scanner
//!
//! Settings come from an optional config file (TOML or JSON, picked by
//! extension) overridden by `SHELF_`-prefixed environment variables, e.g.
//! `SHELF_SCANNER_PARSE_SUBTITLE=true`.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for settings overrides
pub const ENV_PREFIX: &str = "SHELF";

/// Config file looked up in the working directory when no path is given
const DEFAULT_CONFIG_FILE: &str = "shelf.toml";

/// Server-wide settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Split `"Title - Subtitle"` folder names into title and subtitle
    ///
    /// Config file keys arrive lowercased, so the camelCase key needs its
    /// lowercase alias too.
    #[serde(alias = "scannerParseSubtitle", alias = "scannerparsesubtitle")]
    pub scanner_parse_subtitle: bool,
}

impl ServerSettings {
    /// Set whether the scanner splits subtitles out of folder names
    #[must_use]
    pub fn with_scanner_parse_subtitle(mut self, enabled: bool) -> Self {
        self.scanner_parse_subtitle = enabled;
        self
    }

    /// Whether subtitle parsing is enabled for scans
    pub fn parse_subtitle_enabled(&self) -> bool {
        self.scanner_parse_subtitle
    }

    /// Load settings from a config file and the environment
    ///
    /// When `path` is `None`, `shelf.toml` in the working directory is used
    /// if it exists. An explicit `path` must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_from(path, ENV_PREFIX)
    }

    /// Load settings using a custom environment variable prefix
    pub fn load_from(path: Option<&Path>, env_prefix: &str) -> Result<Self> {
        let mut builder = config::Config::builder();

        match path {
            Some(path) => {
                builder = builder.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    builder = builder.add_source(config::File::from(default_path));
                }
            }
        }

        builder =
            builder.add_source(config::Environment::with_prefix(env_prefix).try_parsing(true));

        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }

    /// Parse settings from a JSON document
    ///
    /// Accepts both `scanner_parse_subtitle` and `scannerParseSubtitle`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_disables_subtitle_parsing() {
        let settings = ServerSettings::default();
        assert!(!settings.parse_subtitle_enabled());
    }

    #[test]
    fn test_builder() {
        let settings = ServerSettings::default().with_scanner_parse_subtitle(true);
        assert!(settings.parse_subtitle_enabled());
    }

    #[test]
    fn test_from_json_accepts_camel_case() {
        let settings = ServerSettings::from_json(r#"{"scannerParseSubtitle": true}"#).unwrap();
        assert!(settings.scanner_parse_subtitle);
    }

    #[test]
    fn test_from_json_accepts_snake_case() {
        let settings = ServerSettings::from_json(r#"{"scanner_parse_subtitle": true}"#).unwrap();
        assert!(settings.scanner_parse_subtitle);
    }

    #[test]
    fn test_from_json_missing_field_uses_default() {
        let settings = ServerSettings::from_json("{}").unwrap();
        assert_eq!(settings, ServerSettings::default());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = ServerSettings::from_json("not json").unwrap_err();
        assert!(matches!(err, crate::ShelfError::Serialization(_)));
    }
}
