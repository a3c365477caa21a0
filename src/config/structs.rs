//! Settings file struct definitions.

use serde::Deserialize;

/// General settings, applied to the printer itself.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralSettings {
    /// Default tag; empty means the built-in default.
    pub tag: String,
    /// Caller frames shown in the header. Negative values clamp to zero.
    pub method_count: i64,
    /// Append `[thread name]` to every tag.
    pub show_thread_info: bool,
    /// Whether file-class backends receive lines by default.
    pub print_to_file: bool,
    /// Minimum level.
    pub level: String,
    /// Minimum level for framelog's own diagnostics.
    pub internal_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            tag: String::new(),
            method_count: 1,
            show_thread_info: true,
            print_to_file: false,
            level: "verbose".to_string(),
            internal_level: "warn".to_string(),
        }
    }
}

/// Console backend settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConsoleSettings {
    /// Register the console backend.
    pub enabled: bool,
    /// Enable colors.
    pub colors: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            colors: true,
        }
    }
}

/// File backend settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileSettings {
    /// Register the file backend. It still only receives lines when file output is on.
    pub enabled: bool,
    /// Base directory for logs.
    pub base_dir: String,
    /// strftime pattern for the log file name.
    pub filename_format: String,
    /// strftime pattern for line timestamps.
    pub timestamp_format: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            base_dir: crate::output::default_base_dir(),
            filename_format: "%Y-%m-%d-%H%M".to_string(),
            timestamp_format: "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        }
    }
}
