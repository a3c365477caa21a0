//! The rendering and dispatch engine.
//!
//! A [`Printer`] owns a [`Config`] behind one mutex. Every log call resolves its
//! effective tag, method count and file flag (per-thread overlay first, config
//! second), lays out its lines and hands each line to every eligible backend,
//! all while holding that mutex. A boxed entry is many backend writes; the lock
//! keeps those writes contiguous when several threads log at once.

mod render;
mod stack;

pub use render::{
    BOTTOM_BORDER, CONTENT_PREFIX, MIDDLE_BORDER, TOP_BORDER, header_lines, is_single_line,
    render_lines,
};
pub use stack::{BacktraceStack, CallStack, Frame, caller_index, callers};

use crate::config::{Config, DEFAULT_TAG, SuppressionRule};
use crate::fmt::{format_json, format_object, format_xml, substitute};
use crate::level::Level;
use crate::overlay::{self, Overlay, OverlayKey};
use serde::Serialize;
use std::error::Error as StdError;
use std::fmt::Display;
use std::iter;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Substituted for a message that is empty after argument substitution.
pub const EMPTY_MESSAGE: &str = "Empty/NULL log message";
/// Logged by [`Printer::error_with`] when given neither an error nor a message.
pub const NO_MESSAGE: &str = "No message/exception is set";

/// Modules whose frames never count as the caller.
const INTERNAL_MODULES: &[&str] = &[module_path!(), crate::facade::MODULE];

/// One call's fully resolved output, built and dispatched under the lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub level: Level,
    pub tag: String,
    pub lines: Vec<String>,
    pub print_to_file: bool,
}

impl Entry {
    /// Line-major fan-out: every backend sees line N before any backend sees line N+1.
    /// File-class backends are skipped unless file output is on for this entry.
    pub fn dispatch(&self, config: &Config) {
        for line in &self.lines {
            for backend in config.backends() {
                if backend.is_file() && !self.print_to_file {
                    continue;
                }
                backend.write(self.level, &self.tag, line);
            }
        }
    }
}

/// Formats and dispatches log calls. Cheap to share behind `&'static` or `Arc`.
pub struct Printer {
    config: Mutex<Config>,
    stack: Box<dyn CallStack>,
    overlay_key: OverlayKey,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl std::fmt::Debug for Printer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Printer")
            .field("config", &*self.lock())
            .finish_non_exhaustive()
    }
}

impl Printer {
    /// A printer that resolves caller frames from the live stack.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_call_stack(config, BacktraceStack)
    }

    /// A printer with a custom caller-frame source.
    #[must_use]
    pub fn with_call_stack(config: Config, stack: impl CallStack + 'static) -> Self {
        Self {
            config: Mutex::new(config),
            stack: Box::new(stack),
            overlay_key: OverlayKey::next(),
        }
    }

    /// A poisoned lock only means a backend panicked mid-dispatch; the config is still valid.
    fn lock(&self) -> MutexGuard<'_, Config> {
        self.config.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mutates the config in place. Waits for any in-flight log call to finish.
    pub fn configure(&self, f: impl FnOnce(&mut Config)) {
        f(&mut self.lock());
    }

    /// Snapshot of the current config.
    #[must_use]
    pub fn config(&self) -> Config {
        self.lock().clone()
    }

    /// Whether a call at `level` would pass the threshold right now.
    #[must_use]
    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.lock().threshold()
    }

    /// What is pending for this printer on the calling thread.
    #[must_use]
    pub fn pending(&self) -> Overlay {
        overlay::pending(self.overlay_key)
    }

    // --- one-shot overrides -------------------------------------------------

    /// Tag for the next call on this thread.
    pub fn tag(&self, tag: &str) -> &Self {
        overlay::set_tag(self.overlay_key, tag);
        self
    }

    /// Caller frames for the next call on this thread. Negative counts panic at log time.
    pub fn method(&self, count: i32) -> &Self {
        overlay::set_method_count(self.overlay_key, count);
        self
    }

    /// File output for the next call on this thread.
    pub fn file(&self, enabled: bool) -> &Self {
        overlay::set_print_to_file(self.overlay_key, enabled);
        self
    }

    /// Queues a block shown above the next message, after argument substitution.
    /// Empty blocks are dropped.
    pub fn append(&self, message: &str, args: &[&dyn Display]) -> &Self {
        self.push_fragment(Some(substitute(message, args)))
    }

    /// Queues pretty-printed JSON. Skipped when debug output is filtered out.
    pub fn append_json(&self, json: &str) -> &Self {
        self.push_fragment(self.content(|| format_json(json)))
    }

    /// Queues re-indented XML. Skipped when debug output is filtered out.
    pub fn append_xml(&self, xml: &str) -> &Self {
        self.push_fragment(self.content(|| format_xml(xml)))
    }

    /// Queues a serializable value as pretty JSON. Skipped when debug output is filtered out.
    pub fn append_object<T: Serialize + ?Sized>(&self, value: Option<&T>) -> &Self {
        self.push_fragment(self.content(|| format_object(value)))
    }

    fn push_fragment(&self, fragment: Option<String>) -> &Self {
        if let Some(fragment) = fragment.filter(|f| !f.is_empty()) {
            overlay::push_fragment(self.overlay_key, fragment);
        }
        self
    }

    /// Structured content is logged at debug, so don't pay for formatting it when
    /// debug is filtered out.
    fn content(&self, format: impl FnOnce() -> String) -> Option<String> {
        self.is_enabled(Level::Debug).then(format)
    }

    // --- emitting -----------------------------------------------------------

    pub fn verbose(&self, message: &str, args: &[&dyn Display]) {
        self.log(Level::Verbose, message, args);
    }

    pub fn debug(&self, message: &str, args: &[&dyn Display]) {
        self.log(Level::Debug, message, args);
    }

    pub fn info(&self, message: &str, args: &[&dyn Display]) {
        self.log(Level::Info, message, args);
    }

    pub fn warn(&self, message: &str, args: &[&dyn Display]) {
        self.log(Level::Warn, message, args);
    }

    pub fn error(&self, message: &str, args: &[&dyn Display]) {
        self.log(Level::Error, message, args);
    }

    pub fn assert(&self, message: &str, args: &[&dyn Display]) {
        self.log(Level::Assert, message, args);
    }

    /// Error log built from an error, a message, or both.
    ///
    /// With both, the text is `"<message> : <trace>"`, where the trace is the
    /// error and its source chain (blank when the configured suppression rule
    /// matches any error in the chain). With only an error, its display text.
    /// With neither, [`NO_MESSAGE`]. `args` are substituted afterwards.
    pub fn error_with(
        &self,
        err: Option<&(dyn StdError + 'static)>,
        message: Option<&str>,
        args: &[&dyn Display],
    ) {
        let text = match (err, message) {
            (Some(err), Some(message)) => {
                let rule = self.lock().suppression_rule();
                format!("{message} : {}", stack_trace_string(err, rule))
            }
            (Some(err), None) => err.to_string(),
            (None, Some(message)) => message.to_string(),
            (None, None) => NO_MESSAGE.to_string(),
        };
        self.log(Level::Error, &text, args);
    }

    /// Logs pretty-printed JSON at debug.
    pub fn json(&self, json: &str) {
        if let Some(text) = self.content(|| format_json(json)) {
            self.debug(&text, &[]);
        }
    }

    /// Logs re-indented XML at debug.
    pub fn xml(&self, xml: &str) {
        if let Some(text) = self.content(|| format_xml(xml)) {
            self.debug(&text, &[]);
        }
    }

    /// Logs a serializable value as pretty JSON at debug.
    pub fn object<T: Serialize + ?Sized>(&self, value: Option<&T>) {
        if let Some(text) = self.content(|| format_object(value)) {
            self.debug(&text, &[]);
        }
    }

    /// Core entry point: filter, resolve, render, dispatch.
    ///
    /// Calls below the threshold return before touching anything, pending
    /// overrides included. Any call that passes consumes this thread's pending
    /// overrides, whatever happens next.
    ///
    /// # Panics
    /// When a negative method count was set with [`Printer::method`]. The
    /// overrides are cleared and the lock released before panicking.
    pub fn log(&self, level: Level, message: &str, args: &[&dyn Display]) {
        let config = self.lock();
        if level < config.threshold() {
            return;
        }

        let pending = overlay::take(self.overlay_key);
        match self.resolve(&config, level, message, args, pending) {
            Ok(entry) => entry.dispatch(&config),
            Err(e) => {
                drop(config);
                panic!("{e}");
            }
        }
    }

    /// Builds the entry for one call from the config and the consumed overlay.
    fn resolve(
        &self,
        config: &Config,
        level: Level,
        message: &str,
        args: &[&dyn Display],
        pending: Overlay,
    ) -> Result<Entry, crate::Error> {
        let method_count = match pending.method_count {
            Some(count) => {
                usize::try_from(count).map_err(|_| crate::Error::NegativeMethodCount(count))?
            }
            None => config.default_method_count(),
        };

        let mut tag = pending
            .tag
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| match config.default_tag() {
                "" => DEFAULT_TAG.to_string(),
                tag => tag.to_string(),
            });
        if config.thread_info_shown() {
            tag = format!("{tag}[{}]", thread_label());
        }

        let print_to_file = pending.print_to_file.unwrap_or(config.prints_to_file());

        let mut text = substitute(message, args);
        if text.is_empty() {
            text = EMPTY_MESSAGE.to_string();
        }

        let lines = if is_single_line(method_count, &pending.fragments, &text) {
            vec![text]
        } else {
            let trace = if method_count > 0 {
                self.stack.capture()
            } else {
                Vec::new()
            };
            let frames = callers(&trace, INTERNAL_MODULES, method_count);
            render_lines(&text, &pending.fragments, method_count, frames)
        };

        Ok(Entry {
            level,
            tag,
            lines,
            print_to_file,
        })
    }

    /// Flushes every registered backend, stopping at the first failure.
    ///
    /// # Errors
    /// Returns the first I/O error reported by a backend.
    pub fn flush(&self) -> Result<(), crate::Error> {
        let config = self.lock();
        for backend in config.backends() {
            backend.flush()?;
        }
        Ok(())
    }
}

/// Thread name, or its id for unnamed threads.
fn thread_label() -> String {
    let current = std::thread::current();
    current
        .name()
        .map_or_else(|| format!("{:?}", current.id()), ToString::to_string)
}

/// Renders an error and its source chain, one `Caused by:` line per source.
///
/// Returns an empty string when `suppress` matches any error in the chain.
#[must_use]
pub fn stack_trace_string(
    err: &(dyn StdError + 'static),
    suppress: Option<SuppressionRule>,
) -> String {
    let chain = iter::successors(Some(err), |&e| e.source());
    if let Some(rule) = suppress
        && chain.clone().any(rule)
    {
        return String::new();
    }

    let mut text = err.to_string();
    for cause in chain.skip(1) {
        text.push_str("\nCaused by: ");
        text.push_str(&cause.to_string());
    }
    text
}
