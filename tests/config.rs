//! Tests for printer configuration and the settings file.

use framelog::config::{ConsoleSettings, FileSettings, GeneralSettings};
use framelog::{Config, Error, Level, LoadReport, MemoryBackend, Settings, is_host_unreachable};
use std::fs;
use std::io;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn config_defaults() {
    let config = Config::default();
    assert_eq!(config.default_tag(), "");
    assert_eq!(config.default_method_count(), 1);
    assert!(config.thread_info_shown());
    assert!(!config.prints_to_file());
    assert_eq!(config.threshold(), Level::Verbose);
    assert!(config.backends().is_empty());
    assert!(config.suppression_rule().is_some());
}

#[test]
fn config_setters_chain() {
    let mut config = Config::default();
    config
        .tag("APP")
        .method_count(3)
        .show_thread_info(false)
        .print_to_file(true)
        .log_level(Level::Warn)
        .trace_suppression(None);

    assert_eq!(config.default_tag(), "APP");
    assert_eq!(config.default_method_count(), 3);
    assert!(!config.thread_info_shown());
    assert!(config.prints_to_file());
    assert_eq!(config.threshold(), Level::Warn);
    assert!(config.suppression_rule().is_none());
}

#[test]
fn negative_method_count_clamps_to_zero() {
    let mut config = Config::default();
    config.method_count(-4);
    assert_eq!(config.default_method_count(), 0);
}

#[test]
fn add_logger_ignores_duplicates() {
    let memory = Arc::new(MemoryBackend::new());
    let mut config = Config::default();
    config.add_logger(memory.clone()).add_logger(memory);
    assert_eq!(config.backends().len(), 1);

    config.add_logger(Arc::new(MemoryBackend::new()));
    assert_eq!(config.backends().len(), 2);
}

#[test]
fn default_backends_are_console_and_file() {
    let config = Config::with_default_backends();
    let kinds: Vec<bool> = config.backends().iter().map(|b| b.is_file()).collect();
    assert_eq!(kinds, vec![false, true]);
}

#[test]
fn host_unreachable_rule() {
    let unreachable = io::Error::from(io::ErrorKind::HostUnreachable);
    let refused = io::Error::from(io::ErrorKind::ConnectionRefused);
    assert!(is_host_unreachable(&unreachable));
    assert!(!is_host_unreachable(&refused));
}

#[test]
fn settings_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.general, GeneralSettings::default());
    assert_eq!(settings.general.method_count, 1);
    assert_eq!(settings.general.level, "verbose");
    assert_eq!(settings.console, ConsoleSettings::default());
    assert!(settings.console.enabled);
    assert_eq!(settings.file.filename_format, "%Y-%m-%d-%H%M");
    assert!(settings.file.enabled);
}

#[test]
fn settings_empty_toml_is_default() {
    let settings = Settings::from_toml("").unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn settings_partial_toml() {
    let settings = Settings::from_toml(
        r#"
[general]
tag = "SHOP"
method_count = -2
level = "warning"

[console]
colors = false

[file]
enabled = false
"#,
    )
    .unwrap();

    assert_eq!(settings.general.tag, "SHOP");
    assert!(settings.general.show_thread_info);
    assert_eq!(settings.parse_level(), Level::Warn);
    assert!(settings.console.enabled);
    assert!(!settings.console.colors);
    assert!(!settings.file.enabled);
    assert_eq!(settings.file.timestamp_format, FileSettings::default().timestamp_format);

    let config = Config::from_settings(&settings);
    assert_eq!(config.default_tag(), "SHOP");
    assert_eq!(config.default_method_count(), 0);
    assert_eq!(config.threshold(), Level::Warn);
    assert_eq!(config.backends().len(), 1);
}

#[test]
fn settings_unknown_level_falls_back_to_verbose() {
    let settings = Settings::from_toml("[general]\nlevel = \"loud\"\n").unwrap();
    assert_eq!(settings.parse_level(), Level::Verbose);
    assert_eq!(settings.parse_internal_level(), Level::Warn);
}

#[test]
fn settings_invalid_toml() {
    let result = Settings::from_toml("[general\ntag = 1");
    assert!(matches!(result, Err(Error::ConfigParse(_))));

    let result = Settings::from_toml("[general]\nmethod_count = \"many\"\n");
    assert!(matches!(result, Err(Error::ConfigParse(_))));
}

#[test]
fn settings_load_from_missing_file() {
    let tmp_dir = TempDir::new().unwrap();
    let settings = Settings::load_from(&tmp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn settings_load_from_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("framelog.toml");
    fs::write(
        &path,
        "[general]\ntag = \"DISK\"\nprint_to_file = true\n\n[console]\nenabled = false\n",
    )
    .unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.general.tag, "DISK");
    assert!(settings.general.print_to_file);

    let config = Config::from_settings(&settings);
    assert!(config.prints_to_file());
    let kinds: Vec<bool> = config.backends().iter().map(|b| b.is_file()).collect();
    assert_eq!(kinds, vec![true]);
}

#[test]
fn load_or_default_reports_source() {
    let tmp_dir = TempDir::new().unwrap();

    let missing = tmp_dir.path().join("absent.toml");
    let (settings, report) = Settings::load_or_default(&missing);
    assert_eq!(settings, Settings::default());
    assert_eq!(report, LoadReport::Missing(missing));

    let present = tmp_dir.path().join("framelog.toml");
    fs::write(&present, "[general]\ntag = \"DISK\"\n").unwrap();
    let (settings, report) = Settings::load_or_default(&present);
    assert_eq!(settings.general.tag, "DISK");
    assert_eq!(report, LoadReport::Loaded(present));
}

#[test]
fn load_or_default_falls_back_on_bad_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("framelog.toml");
    fs::write(&path, "[general\ntag = 1").unwrap();

    let (settings, report) = Settings::load_or_default(&path);
    assert_eq!(settings, Settings::default());
    assert!(matches!(report, LoadReport::Failed(ref e) if e.starts_with("parse error")));

    framelog::internal::init();
    report.log();
}
