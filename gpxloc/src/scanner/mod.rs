//! Directory walker feeding candidate track files to the finder.
//!
//! Walks each root recursively, keeps regular files whose extension is in
//! the configured list (case-insensitive) and parses them one at a time.
//! Directory entries are visited in file-name order so results are stable
//! from one run to the next. Symbolic links to directories are not followed.
//!
//! Unreadable directories are logged and skipped; the walk carries on with
//! the remaining entries.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::track::{read_track_file, TrackError, TrackFile};

/// Extension searched when nothing else is configured.
pub const DEFAULT_EXTENSION: &str = "gpx";

/// One candidate file and the outcome of parsing it.
pub type Candidate = (PathBuf, Result<TrackFile, TrackError>);

/// Enumerates track files below a set of root directories.
#[derive(Debug, Clone)]
pub struct FileScanner {
    extensions: Vec<String>,
}

impl Default for FileScanner {
    fn default() -> Self {
        Self::new([DEFAULT_EXTENSION])
    }
}

impl FileScanner {
    /// Create a scanner accepting the given extensions.
    ///
    /// Extensions are compared case-insensitively; a leading dot is optional.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { extensions }
    }

    /// Accepted extensions, lowercase and without the dot.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// List every candidate file below `roots`, in walk order.
    pub fn collect<P: AsRef<Path>>(&self, roots: &[P]) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for root in roots {
            self.walk(root.as_ref(), &mut files);
        }
        files
    }

    /// Lazily parse every candidate file below `roots`.
    ///
    /// Files are opened one at a time as the iterator advances; a parse
    /// failure is handed to the caller rather than ending the iteration.
    pub fn scan<P: AsRef<Path>>(&self, roots: &[P]) -> impl Iterator<Item = Candidate> {
        self.collect(roots).into_iter().map(|path| {
            let parsed = read_track_file(&path);
            (path, parsed)
        })
    }

    /// Recursively scan a directory for matching files.
    fn walk(&self, dir: &Path, files: &mut Vec<PathBuf>) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "Skipping unreadable directory");
                return;
            }
        };

        let mut entries: Vec<fs::DirEntry> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(path = %dir.display(), error = %e, "Skipping unreadable entry");
                    None
                }
            })
            .collect();
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let path = entry.path();
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);

            if is_dir {
                self.walk(&path, files);
            } else if has_extension(&path, &self.extensions) {
                debug!(path = %path.display(), "Candidate track file");
                files.push(path);
            }
        }
    }
}

/// Check whether `path` ends in one of `extensions` (lowercase, no dot).
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            extensions.iter().any(|e| *e == ext)
        })
        .unwrap_or(false)
}
