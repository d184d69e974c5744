//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::{ConfigFile, LogLevel};

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [scan] section
    if let Some(section) = ini.section(Some("scan")) {
        if let Some(v) = section.get("extensions") {
            let extensions = parse_extensions(v);
            if extensions.is_empty() {
                return Err(ConfigFileError::InvalidValue {
                    section: "scan".to_string(),
                    key: "extensions".to_string(),
                    value: v.to_string(),
                    reason: "expected a comma-separated list such as 'gpx'".to_string(),
                });
            }
            config.scan.extensions = extensions;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("level") {
            config.logging.level =
                v.parse::<LogLevel>()
                    .map_err(|reason| ConfigFileError::InvalidValue {
                        section: "logging".to_string(),
                        key: "level".to_string(),
                        value: v.to_string(),
                        reason,
                    })?;
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            config.logging.file = if v.is_empty() {
                None
            } else {
                Some(expand_tilde(v))
            };
        }
    }

    Ok(config)
}

/// Split `gpx, .KML` into `["gpx", "kml"]`, dropping empty items.
fn parse_extensions(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|e| e.trim().trim_start_matches('.').to_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

/// Expand a leading `~/` to the user's home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
