//! framelog's own diagnostic logger. Settings errors and backend failures are
//! reported through a private printer so they look like every other log line.
//!
//! It is a separate printer with its own lock: the file backend reports write
//! failures while the main printer is mid-dispatch. Uses `OnceLock` so the
//! logger is initialized exactly once, even if several entry points race.

use crate::config::{Config, Settings};
use crate::level::Level;
use crate::output::ConsoleBackend;
use crate::printer::Printer;
use std::sync::{Arc, OnceLock};

static INTERNAL_PRINTER: OnceLock<Printer> = OnceLock::new();

/// Fallback initializer with default settings.
///
/// `OnceLock` guarantees only the first call takes effect; later calls are no-ops.
pub fn init() {
    init_with(&Settings::default());
}

/// Preferred initializer, reusing already-loaded settings.
pub fn init_with(settings: &Settings) {
    let was_init = INTERNAL_PRINTER.get().is_some();
    INTERNAL_PRINTER.get_or_init(|| build_internal_printer(settings));
    if !was_init {
        debug("INTERNAL", &format!("Log level: {}", settings.general.level));
        debug(
            "INTERNAL",
            &format!(
                "Console: {}, file: {}",
                if settings.console.enabled { "enabled" } else { "disabled" },
                if settings.file.enabled { "enabled" } else { "disabled" },
            ),
        );
    }
}

fn build_internal_printer(settings: &Settings) -> Printer {
    let mut config = Config::default();
    config
        .method_count(0)
        .show_thread_info(false)
        .log_level(settings.parse_internal_level())
        .add_logger(Arc::new(
            ConsoleBackend::new().colors(settings.console.colors),
        ));
    Printer::new(config)
}

/// Pre-init calls silently vanish, so early startup code can log freely.
fn log(level: Level, scope: &str, msg: &str) {
    if let Some(printer) = INTERNAL_PRINTER.get()
        && printer.is_enabled(level)
    {
        printer.tag(scope).log(level, msg, &[]);
    }
}

/// Startup and teardown diagnostics.
pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

/// Normal milestones such as a loaded settings file.
pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

/// Non-fatal anomalies such as unknown level names.
pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

/// Failures a backend swallowed.
pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
