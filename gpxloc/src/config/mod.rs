//! User configuration stored in `~/.gpxloc/config.ini`.
//!
//! # Example
//!
//! ```
//! use gpxloc::config::ConfigFile;
//!
//! let config = ConfigFile::default();
//! assert_eq!(config.scan.extensions, vec!["gpx"]);
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::DEFAULT_LOG_LEVEL;
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{ConfigFile, LogLevel, LoggingSettings, ScanSettings};
