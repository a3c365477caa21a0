//! In-memory capture, for tests and for embedders that render log blocks themselves.

use super::Backend;
use crate::level::Level;
use std::sync::{Mutex, PoisonError};

/// One captured line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryRecord {
    pub level: Level,
    pub tag: String,
    pub line: String,
}

/// Keeps every dispatched line in arrival order.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    file_class: bool,
    records: Mutex<Vec<MemoryRecord>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A memory backend that reports itself as file-class, so it is gated by the
    /// file-output flag exactly like [`FileBackend`](super::FileBackend).
    #[must_use]
    pub fn file_class() -> Self {
        Self {
            file_class: true,
            records: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything captured so far.
    #[must_use]
    pub fn records(&self) -> Vec<MemoryRecord> {
        self.lock().clone()
    }

    /// Just the line text, in arrival order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lock().iter().map(|r| r.line.clone()).collect()
    }

    /// Empties the buffer and returns what it held.
    pub fn take(&self) -> Vec<MemoryRecord> {
        std::mem::take(&mut *self.lock())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<MemoryRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, level: Level, tag: &str, line: &str) {
        self.lock().push(MemoryRecord {
            level,
            tag: tag.to_string(),
            line: line.to_string(),
        });
    }
}

impl Backend for MemoryBackend {
    fn verbose(&self, tag: &str, line: &str) {
        self.push(Level::Verbose, tag, line);
    }

    fn debug(&self, tag: &str, line: &str) {
        self.push(Level::Debug, tag, line);
    }

    fn info(&self, tag: &str, line: &str) {
        self.push(Level::Info, tag, line);
    }

    fn warn(&self, tag: &str, line: &str) {
        self.push(Level::Warn, tag, line);
    }

    fn error(&self, tag: &str, line: &str) {
        self.push(Level::Error, tag, line);
    }

    fn assert(&self, tag: &str, line: &str) {
        self.push(Level::Assert, tag, line);
    }

    fn is_file(&self) -> bool {
        self.file_class
    }
}
