//! Process-wide printer defaults and the backend list.
//!
//! `Config` is what the printer consults on every call; `Settings` is the
//! TOML file that can seed it. Keeping them apart means the serde schema can
//! change without touching the hot path.

mod settings;
mod structs;

pub use settings::{LoadReport, Settings};
pub use structs::{ConsoleSettings, FileSettings, GeneralSettings};

use crate::level::Level;
use crate::output::{Backend, ConsoleBackend, FileBackend};
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::sync::Arc;

/// Tag used when neither the call nor the config names one.
pub const DEFAULT_TAG: &str = "FRAMELOG";

/// Decides whether an error chain's trace text should be dropped from an error log.
pub type SuppressionRule = fn(&(dyn StdError + 'static)) -> bool;

/// Apps that run offline hit this constantly; the full trace is noise.
#[must_use]
pub fn is_host_unreachable(err: &(dyn StdError + 'static)) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::HostUnreachable)
}

/// Global defaults plus the ordered set of registered backends.
///
/// Setters chain on `&mut Config` and never fail: out-of-range values are
/// clamped and duplicate backends are ignored.
#[derive(Clone)]
pub struct Config {
    tag: String,
    method_count: usize,
    show_thread_info: bool,
    print_to_file: bool,
    level: Level,
    backends: Vec<Arc<dyn Backend>>,
    trace_suppression: Option<SuppressionRule>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tag: String::new(),
            method_count: 1,
            show_thread_info: true,
            print_to_file: false,
            level: Level::Verbose,
            backends: Vec::new(),
            trace_suppression: Some(is_host_unreachable),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("tag", &self.tag)
            .field("method_count", &self.method_count)
            .field("show_thread_info", &self.show_thread_info)
            .field("print_to_file", &self.print_to_file)
            .field("level", &self.level)
            .field("backends", &self.backends.len())
            .field("trace_suppression", &self.trace_suppression.is_some())
            .finish()
    }
}

impl Config {
    /// Defaults with a console backend and a (gated) file backend registered.
    #[must_use]
    pub fn with_default_backends() -> Self {
        let mut config = Self::default();
        config
            .add_logger(Arc::new(ConsoleBackend::new()))
            .add_logger(Arc::new(FileBackend::new()));
        config
    }

    /// Builds a config from a settings file, registering the backends it enables.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        let mut config = Self::default();
        config
            .tag(&settings.general.tag)
            .method_count(settings.general.method_count)
            .show_thread_info(settings.general.show_thread_info)
            .print_to_file(settings.general.print_to_file)
            .log_level(settings.parse_level());

        if settings.console.enabled {
            config.add_logger(Arc::new(
                ConsoleBackend::new().colors(settings.console.colors),
            ));
        }

        if settings.file.enabled {
            config.add_logger(Arc::new(
                FileBackend::new()
                    .base_dir(&settings.file.base_dir)
                    .filename_format(&settings.file.filename_format)
                    .timestamp_format(&settings.file.timestamp_format),
            ));
        }

        config
    }

    /// Default tag. An empty tag falls back to [`DEFAULT_TAG`] at log time.
    pub fn tag(&mut self, tag: impl Into<String>) -> &mut Self {
        self.tag = tag.into();
        self
    }

    /// Append `[thread name]` to every tag.
    pub const fn show_thread_info(&mut self, show: bool) -> &mut Self {
        self.show_thread_info = show;
        self
    }

    /// Caller frames shown in the boxed header. Negative counts clamp to zero.
    pub fn method_count(&mut self, count: impl Into<i64>) -> &mut Self {
        self.method_count = usize::try_from(count.into()).unwrap_or(0);
        self
    }

    /// Whether file-class backends receive lines when the call doesn't say.
    pub const fn print_to_file(&mut self, enabled: bool) -> &mut Self {
        self.print_to_file = enabled;
        self
    }

    /// Minimum level that reaches formatting and dispatch.
    pub const fn log_level(&mut self, level: Level) -> &mut Self {
        self.level = level;
        self
    }

    /// Registers a backend. Adding the same `Arc` twice is a no-op.
    pub fn add_logger(&mut self, backend: Arc<dyn Backend>) -> &mut Self {
        if !self.backends.iter().any(|b| Arc::ptr_eq(b, &backend)) {
            self.backends.push(backend);
        }
        self
    }

    /// Replaces the rule that blanks trace text in error logs; `None` keeps every trace.
    pub const fn trace_suppression(&mut self, rule: Option<SuppressionRule>) -> &mut Self {
        self.trace_suppression = rule;
        self
    }

    #[must_use]
    pub fn default_tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub const fn default_method_count(&self) -> usize {
        self.method_count
    }

    #[must_use]
    pub const fn thread_info_shown(&self) -> bool {
        self.show_thread_info
    }

    #[must_use]
    pub const fn prints_to_file(&self) -> bool {
        self.print_to_file
    }

    #[must_use]
    pub const fn threshold(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn backends(&self) -> &[Arc<dyn Backend>] {
        &self.backends
    }

    #[must_use]
    pub const fn suppression_rule(&self) -> Option<SuppressionRule> {
        self.trace_suppression
    }
}
