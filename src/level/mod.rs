//! Severity levels that gate which messages reach the backends.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so the printer can compare a message's level against the configured threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Low-value chatter, the first thing to silence.
    #[default]
    Verbose = 2,
    /// Development-time diagnostics. Structured content (JSON, XML, objects) is logged here.
    Debug = 3,
    /// Normal operational milestones.
    Info = 4,
    /// Anomalies that may turn into problems.
    Warn = 5,
    /// Failures, usually reported from an error handler.
    Error = 6,
    /// Conditions that should never happen.
    Assert = 7,
}

impl Level {
    /// Lowercase because settings files and CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verbose => "verbose",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Assert => "assert",
        }
    }

    /// Single-letter marker used by the console and file backends (`I/TAG: msg`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Verbose => 'V',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
            Self::Assert => 'A',
        }
    }

    /// Numeric priority, ascending with severity.
    #[must_use]
    pub const fn priority(self) -> u8 {
        self as u8
    }

    /// Maps a numeric priority back to a level. Unknown values degrade to `Verbose`
    /// so a bad priority is still logged rather than dropped.
    #[must_use]
    pub const fn from_priority(priority: u8) -> Self {
        match priority {
            3 => Self::Debug,
            4 => Self::Info,
            5 => Self::Warn,
            6 => Self::Error,
            7 => Self::Assert,
            _ => Self::Verbose,
        }
    }

    /// Every level in ascending order, for help output and tests.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Verbose,
            Self::Debug,
            Self::Info,
            Self::Warn,
            Self::Error,
            Self::Assert,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl From<ParseLevelError> for crate::Error {
    fn from(e: ParseLevelError) -> Self {
        Self::InvalidLevel(e.0)
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" | "v" | "trace" => Ok(Self::Verbose),
            "debug" | "d" => Ok(Self::Debug),
            "info" | "i" => Ok(Self::Info),
            "warn" | "warning" | "w" => Ok(Self::Warn),
            "error" | "err" | "e" => Ok(Self::Error),
            "assert" | "wtf" | "a" => Ok(Self::Assert),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
