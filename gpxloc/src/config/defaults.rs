//! Default values for all configuration settings.

use super::settings::*;
use crate::scanner::DEFAULT_EXTENSION;

/// Default log verbosity.
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            scan: ScanSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            extensions: vec![DEFAULT_EXTENSION.to_string()],
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL,
            file: None,
        }
    }
}
