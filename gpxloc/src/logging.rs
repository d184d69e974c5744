//! Logging infrastructure for gpxloc.
//!
//! Diagnostics go to stderr so that stdout only carries matched paths:
//! - Compact stderr output, colored when attached to a terminal
//! - Optional log file (cleared on session start) through a non-blocking writer
//! - Configurable via RUST_LOG environment variable

use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LogLevel;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Options for [`init_logging`].
#[derive(Debug, Clone)]
pub struct LoggingOptions {
    /// Level used when RUST_LOG is not set
    pub level: LogLevel,
    /// Optional log file, truncated before use
    pub file: Option<PathBuf>,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: crate::config::DEFAULT_LOG_LEVEL,
            file: None,
        }
    }
}

/// Initialize logging system.
///
/// # Returns
///
/// LoggingGuard that must be kept alive for logging to work
///
/// # Errors
///
/// Returns error if the log file's directory cannot be created or the log
/// file cannot be cleared
pub fn init_logging(options: &LoggingOptions) -> Result<LoggingGuard, io::Error> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .compact();

    let (file_layer, file_guard) = match &options.file {
        Some(path) => {
            let (dir, name) = prepare_log_file(path)?;
            let file_appender = tracing_appender::rolling::never(dir, name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false); // No ANSI colors in file
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter(options.level))
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Env filter from RUST_LOG, falling back to `level`.
fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

/// Create the log directory if needed and clear the previous log file.
///
/// Returns the directory and file name to hand to the appender.
fn prepare_log_file(path: &Path) -> Result<(PathBuf, PathBuf), io::Error> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let name = path
        .file_name()
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "log path has no file name"))?;

    fs::create_dir_all(&dir)?;
    fs::write(dir.join(&name), "")?;

    Ok((dir, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // Can't test init_logging because of global subscriber, but we can test the file operations

    #[test]
    fn test_prepare_creates_nested_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("deep/nested/gpxloc.log");

        let (dir, name) = prepare_log_file(&path).unwrap();

        assert_eq!(dir, temp_dir.path().join("deep/nested"));
        assert_eq!(name, PathBuf::from("gpxloc.log"));
        assert!(path.exists(), "Log file should be created");
    }

    #[test]
    fn test_prepare_clears_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gpxloc.log");
        fs::write(&path, "old log data").unwrap();

        prepare_log_file(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "", "File should be cleared");
    }

    #[test]
    fn test_prepare_rejects_path_without_file_name() {
        let result = prepare_log_file(Path::new("/"));
        assert!(result.is_err());
    }

    #[test]
    fn test_default_options() {
        let options = LoggingOptions::default();
        assert_eq!(options.level, LogLevel::Info);
        assert!(options.file.is_none());
    }

    #[test]
    fn test_guard_structure() {
        use tracing_appender::non_blocking::NonBlocking;

        let (non_blocking, guard) = NonBlocking::new(std::io::sink());
        drop(non_blocking);

        let _logging_guard = LoggingGuard {
            _file_guard: Some(guard),
        };
    }
}
