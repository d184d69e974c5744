//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let extensions = config.scan.extensions.join(", ");
    let log_file = config
        .logging
        .file
        .as_ref()
        .map(|p| path_to_string(p))
        .unwrap_or_default();

    format!(
        r#"[scan]
; Comma-separated list of track file extensions searched below each directory
; (case-insensitive)
extensions = {}

[logging]
; Verbosity when RUST_LOG is not set: trace, debug, info, warn, error
level = {}
; Optional log file, cleared at the start of every run (leave empty to log to
; stderr only)
file = {}
"#,
        extensions, config.logging.level, log_file,
    )
}

fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
