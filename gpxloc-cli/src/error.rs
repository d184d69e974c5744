//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::path::PathBuf;
use std::process;
use gpxloc::config::ConfigFileError;
use gpxloc::coord::CoordError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration file error
    Config(ConfigFileError),
    /// Wrong combination of command-line options
    Usage(String),
    /// Bounding box or circle rejected by the region constructors
    InvalidRegion(CoordError),
    /// A search root is missing or not a directory
    DirectoryNotFound(PathBuf),
    /// Failed to write results to stdout
    Output(std::io::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Usage(_) => {
                eprintln!();
                eprintln!("Run 'gpxloc --help' for usage and examples.");
            }
            CliError::InvalidRegion(CoordError::MalformedInput { .. }) => {
                eprintln!();
                eprintln!("The bounding box must be written \"lon1,lat1,lon2,lat2\", for example:");
                eprintln!("  --bbox=\"5.68678,45.08596,5.68979,45.08778\"");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Usage(msg) => write!(f, "{}", msg),
            CliError::InvalidRegion(e) => write!(f, "Invalid search region: {}", e),
            CliError::DirectoryNotFound(path) => {
                write!(f, "Directory does not exist: {}", path.display())
            }
            CliError::Output(e) => write!(f, "Failed to write results: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::InvalidRegion(e) => Some(e),
            CliError::Output(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<CoordError> for CliError {
    fn from(e: CoordError) -> Self {
        CliError::InvalidRegion(e)
    }
}
