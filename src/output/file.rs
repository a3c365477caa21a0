//! File output, one directory per tag.

use super::Backend;
use crate::internal;
use crate::level::Level;

use chrono::Local;
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

/// Appends `timestamp: L/TAG: line` records to `<base_dir>/<tag>/<start time>.log`.
///
/// The file for a tag is picked on the first write of that tag and reused for the
/// rest of the process lifetime. Thread-info suffixes (`TAG[main]`) are stripped
/// from the directory name so all threads share one file per tag.
#[derive(Debug)]
pub struct FileBackend {
    /// Base directory for log files, `~` is expanded on use.
    base_dir: String,
    /// strftime pattern for the file stem.
    filename_format: String,
    /// strftime pattern for the per-line timestamp.
    timestamp_format: String,
    /// Tag → chosen log file; the lock also serializes appends.
    files: Mutex<HashMap<String, PathBuf>>,
}

impl Default for FileBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl FileBackend {
    /// Creates a file backend rooted in the platform state directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_dir: default_base_dir(),
            filename_format: "%Y-%m-%d-%H%M".to_string(),
            timestamp_format: "%Y-%m-%d %H:%M:%S%.3f".to_string(),
            files: Mutex::new(HashMap::new()),
        }
    }

    /// Sets the base directory.
    #[must_use]
    pub fn base_dir(mut self, dir: impl Into<String>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Sets the strftime pattern used for file names (`.log` is appended).
    #[must_use]
    pub fn filename_format(mut self, format: impl Into<String>) -> Self {
        self.filename_format = format.into();
        self
    }

    /// Sets the strftime pattern used for line timestamps.
    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Resolves the base directory (expands ~).
    fn resolve_base_dir(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.base_dir);
        PathBuf::from(expanded.as_ref())
    }

    /// Picks the file for a tag on first use and remembers it.
    fn path_for(&self, files: &mut HashMap<String, PathBuf>, tag: &str) -> PathBuf {
        let dir_name = tag.split('[').next().unwrap_or_default();
        if let Some(path) = files.get(dir_name) {
            return path.clone();
        }

        let file_name = format!("{}.log", Local::now().format(&self.filename_format));
        let path = self.resolve_base_dir().join(dir_name).join(file_name);
        internal::debug("FILE", &format!("Log file for {dir_name}: {}", path.display()));
        files.insert(dir_name.to_string(), path.clone());
        path
    }

    fn format_content(&self, level: Level, tag: &str, line: &str) -> String {
        let timestamp = Local::now().format(&self.timestamp_format);
        format!("{timestamp}: {}/{tag}: {line}\r\n", level.letter())
    }

    fn append(&self, level: Level, tag: &str, line: &str) -> Result<(), crate::Error> {
        let mut files = self.files.lock().unwrap_or_else(PoisonError::into_inner);
        let path = self.path_for(&mut files, tag);

        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
            internal::debug("FILE", &format!("Created directory: {}", parent.display()));
        }

        // Single write per line so concurrent processes don't tear records
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(self.format_content(level, tag, line).as_bytes())?;
        Ok(())
    }

    fn write_or_report(&self, level: Level, tag: &str, line: &str) {
        if let Err(e) = self.append(level, tag, line) {
            internal::error("FILE", &format!("Failed to write log line: {e}"));
        }
    }
}

impl Backend for FileBackend {
    fn verbose(&self, tag: &str, line: &str) {
        self.write_or_report(Level::Debug, tag, line);
    }

    fn debug(&self, tag: &str, line: &str) {
        self.write_or_report(Level::Debug, tag, line);
    }

    fn info(&self, tag: &str, line: &str) {
        self.write_or_report(Level::Info, tag, line);
    }

    fn warn(&self, tag: &str, line: &str) {
        self.write_or_report(Level::Warn, tag, line);
    }

    fn error(&self, tag: &str, line: &str) {
        self.write_or_report(Level::Error, tag, line);
    }

    fn assert(&self, tag: &str, line: &str) {
        self.write_or_report(Level::Error, tag, line);
    }

    fn is_file(&self) -> bool {
        true
    }
}

/// `<state dir>/framelog/logs`, or `./logs` when the platform has no such directory.
pub(crate) fn default_base_dir() -> String {
    directories::ProjectDirs::from("", "", "framelog").map_or_else(
        || "logs".to_string(),
        |dirs| {
            dirs.state_dir()
                .unwrap_or_else(|| dirs.data_dir())
                .join("logs")
                .to_string_lossy()
                .into_owned()
        },
    )
}
