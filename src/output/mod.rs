//! The built-in backends can't cover every sink, so the `Backend` trait lets
//! users plug in their own without touching the printer.

mod console;
mod file;
mod memory;

pub use console::ConsoleBackend;
pub use file::FileBackend;
pub(crate) use file::default_base_dir;
pub use memory::{MemoryBackend, MemoryRecord};

use crate::level::Level;

/// A sink that receives one already-rendered line at a time.
///
/// The printer calls backends while holding its dispatch lock, so implementations
/// must be quick (or queue internally) and must never log through the printer
/// that is feeding them. Failures are the backend's to contain: none of the
/// write methods can report an error.
pub trait Backend: Send + Sync {
    /// Low-value chatter.
    fn verbose(&self, tag: &str, line: &str);

    /// Development-time diagnostics.
    fn debug(&self, tag: &str, line: &str);

    /// Operational milestones.
    fn info(&self, tag: &str, line: &str);

    /// Anomalies.
    fn warn(&self, tag: &str, line: &str);

    /// Failures.
    fn error(&self, tag: &str, line: &str);

    /// Conditions that should never happen.
    fn assert(&self, tag: &str, line: &str);

    /// File-class backends only receive lines when file output is switched on
    /// for the call (or by default in the config).
    fn is_file(&self) -> bool {
        false
    }

    /// Routes a line to the method matching `level`.
    fn write(&self, level: Level, tag: &str, line: &str) {
        match level {
            Level::Verbose => self.verbose(tag, line),
            Level::Debug => self.debug(tag, line),
            Level::Info => self.info(tag, line),
            Level::Warn => self.warn(tag, line),
            Level::Error => self.error(tag, line),
            Level::Assert => self.assert(tag, line),
        }
    }

    /// Buffered backends may lose tail data on abrupt exit without an explicit flush.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
