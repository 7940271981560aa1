//! Shelf Core
//!
//! Shared foundation for the Shelf audiobook server libraries.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Error Handling**: Unified `ShelfError` and `Result` types
//! - **Settings**: `ServerSettings`, loaded from a config file and the environment
//!
//! # Example
//!
//! ```rust
//! use shelf_core::ServerSettings;
//!
//! let settings = ServerSettings::default().with_scanner_parse_subtitle(true);
//! assert!(settings.parse_subtitle_enabled());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod settings;

pub use error::{Result, ShelfError};
pub use settings::{ServerSettings, ENV_PREFIX};
