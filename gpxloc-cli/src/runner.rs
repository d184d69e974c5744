//! CLI runner for common setup.
//!
//! Encapsulates configuration loading and logging initialization so the
//! command handler only deals with the search itself.

use std::path::Path;

use crate::error::CliError;
use gpxloc::config::{ConfigFile, LogLevel};
use gpxloc::logging::{init_logging, LoggingGuard, LoggingOptions};
use tracing::debug;

/// Runner that manages CLI lifecycle.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Load config (from `config_path` or the default location) and
    /// initialize logging.
    ///
    /// # Arguments
    ///
    /// * `verbose` - When true, enables debug-level logging unless the
    ///   config already asks for more
    pub fn new(config_path: Option<&Path>, verbose: bool) -> Result<Self, CliError> {
        let config = match config_path {
            Some(path) => ConfigFile::load_from(path)?,
            None => ConfigFile::load()?,
        };

        let options = LoggingOptions {
            level: effective_level(config.logging.level, verbose),
            file: config.logging.file.clone(),
        };
        let logging_guard =
            init_logging(&options).map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information.
    pub fn log_startup(&self) {
        debug!("gpxloc v{}", gpxloc::VERSION);
        debug!(extensions = ?self.config.scan.extensions, "Scan settings");
    }
}

/// `--verbose` lowers the configured level to debug, never raises it.
fn effective_level(configured: LogLevel, verbose: bool) -> LogLevel {
    if verbose {
        configured.min(LogLevel::Debug)
    } else {
        configured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_enables_debug() {
        assert_eq!(effective_level(LogLevel::Info, true), LogLevel::Debug);
        assert_eq!(effective_level(LogLevel::Error, true), LogLevel::Debug);
    }

    #[test]
    fn test_verbose_keeps_trace() {
        assert_eq!(effective_level(LogLevel::Trace, true), LogLevel::Trace);
    }

    #[test]
    fn test_not_verbose_keeps_configured() {
        assert_eq!(effective_level(LogLevel::Warn, false), LogLevel::Warn);
    }
}
