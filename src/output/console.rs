//! Console is the default sink. Users expect immediate feedback on stdout/stderr
//! without configuring paths.

use super::Backend;
use crate::level::Level;
use std::io::{self, Write};

const RESET: &str = "\x1b[0m";

/// Writes `L/TAG: line` to stdout (verbose, debug, info) or stderr (warn and above).
#[derive(Debug, Clone)]
pub struct ConsoleBackend {
    /// Piped output and CI environments can't render ANSI escape codes.
    colors_enabled: bool,
}

impl Default for ConsoleBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleBackend {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            colors_enabled: true,
        }
    }

    /// Piped output and CI environments can't render ANSI escape codes.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    /// 24-bit foreground escape per level, Dracula-ish palette.
    const fn level_color(level: Level) -> (u8, u8, u8) {
        match level {
            Level::Verbose => (98, 114, 164),
            Level::Debug => (189, 147, 249),
            Level::Info => (139, 233, 253),
            Level::Warn => (241, 250, 140),
            Level::Error => (255, 85, 85),
            Level::Assert => (255, 121, 198),
        }
    }

    fn format_line(&self, level: Level, tag: &str, line: &str) -> String {
        let prefix = format!("{}/{tag}:", level.letter());
        if self.colors_enabled {
            let (r, g, b) = Self::level_color(level);
            format!("\x1b[38;2;{r};{g};{b}m{prefix}{RESET} {line}")
        } else {
            format!("{prefix} {line}")
        }
    }

    fn emit(&self, level: Level, tag: &str, line: &str) {
        let formatted = self.format_line(level, tag, line);

        // A closed stdout/stderr is not worth failing the caller over
        if level >= Level::Warn {
            let _ = writeln!(io::stderr().lock(), "{formatted}");
        } else {
            let _ = writeln!(io::stdout().lock(), "{formatted}");
        }
    }
}

impl Backend for ConsoleBackend {
    fn verbose(&self, tag: &str, line: &str) {
        self.emit(Level::Verbose, tag, line);
    }

    fn debug(&self, tag: &str, line: &str) {
        self.emit(Level::Debug, tag, line);
    }

    fn info(&self, tag: &str, line: &str) {
        self.emit(Level::Info, tag, line);
    }

    fn warn(&self, tag: &str, line: &str) {
        self.emit(Level::Warn, tag, line);
    }

    fn error(&self, tag: &str, line: &str) {
        self.emit(Level::Error, tag, line);
    }

    fn assert(&self, tag: &str, line: &str) {
        self.emit(Level::Assert, tag, line);
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }
}
