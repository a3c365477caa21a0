//! Process-wide printer with free-function access.
//!
//! The printer is created on first use from the settings file (defaults when
//! absent). `init*` and `add_logger` adjust it afterwards.
//!
//! ```no_run
//! use framelog::facade as log;
//!
//! log::init("APP");
//! log::info("hello %s", &[&"world"]);
//! log::tag("NET").method(2).append_json(r#"{"id":1}"#).warn("retrying", &[]);
//! ```

use crate::config::{Config, LoadReport, Settings};
use crate::internal;
use crate::level::Level;
use crate::output::Backend;
use crate::printer::Printer;
use serde::Serialize;
use std::error::Error as StdError;
use std::fmt::Display;
use std::sync::{Arc, OnceLock};

/// Frames from this module are skipped when looking for the caller.
pub(crate) const MODULE: &str = module_path!();

static PRINTER: OnceLock<Printer> = OnceLock::new();

/// The shared printer, built on first access.
pub fn printer() -> &'static Printer {
    PRINTER.get_or_init(|| {
        let (settings, report) = match Settings::get_config_path() {
            Ok(path) => Settings::load_or_default(&path),
            Err(e) => (Settings::default(), LoadReport::Failed(e.to_string())),
        };
        internal::init_with(&settings);
        report.log();
        Printer::new(Config::from_settings(&settings))
    })
}

/// Sets the global tag with the default method count (1), level (verbose) and no file output.
pub fn init(tag: &str) {
    init_full(tag, 1, Level::Verbose, false);
}

/// Sets the global tag, method count, threshold and file-output default.
pub fn init_full(tag: &str, method_count: i32, level: Level, print_to_file: bool) {
    printer().configure(|config| {
        config
            .tag(tag)
            .method_count(method_count)
            .log_level(level)
            .print_to_file(print_to_file);
    });
}

/// Registers another backend; registering the same `Arc` again does nothing.
pub fn add_logger(backend: Arc<dyn Backend>) {
    printer().configure(|config| {
        config.add_logger(backend);
    });
}

/// One-shot tag for the next call on this thread.
pub fn tag(tag: &str) -> &'static Printer {
    printer().tag(tag)
}

/// One-shot method count for the next call on this thread.
pub fn method(count: i32) -> &'static Printer {
    printer().method(count)
}

/// One-shot file-output flag for the next call on this thread.
pub fn file(enabled: bool) -> &'static Printer {
    printer().file(enabled)
}

/// Queues a block for the next call on this thread.
pub fn append(message: &str, args: &[&dyn Display]) -> &'static Printer {
    printer().append(message, args)
}

pub fn append_json(json: &str) -> &'static Printer {
    printer().append_json(json)
}

pub fn append_xml(xml: &str) -> &'static Printer {
    printer().append_xml(xml)
}

pub fn append_object<T: Serialize + ?Sized>(value: Option<&T>) -> &'static Printer {
    printer().append_object(value)
}

pub fn verbose(message: &str, args: &[&dyn Display]) {
    printer().verbose(message, args);
}

pub fn debug(message: &str, args: &[&dyn Display]) {
    printer().debug(message, args);
}

pub fn info(message: &str, args: &[&dyn Display]) {
    printer().info(message, args);
}

pub fn warn(message: &str, args: &[&dyn Display]) {
    printer().warn(message, args);
}

pub fn error(message: &str, args: &[&dyn Display]) {
    printer().error(message, args);
}

pub fn assert(message: &str, args: &[&dyn Display]) {
    printer().assert(message, args);
}

/// See [`Printer::error_with`].
pub fn error_with(
    err: Option<&(dyn StdError + 'static)>,
    message: Option<&str>,
    args: &[&dyn Display],
) {
    printer().error_with(err, message, args);
}

pub fn json(json: &str) {
    printer().json(json);
}

pub fn xml(xml: &str) {
    printer().xml(xml);
}

pub fn object<T: Serialize + ?Sized>(value: Option<&T>) {
    printer().object(value);
}

/// Flushes every backend of the shared printer.
///
/// # Errors
/// Returns the first I/O error reported by a backend.
pub fn flush() -> Result<(), crate::Error> {
    printer().flush()
}
