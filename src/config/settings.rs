//! TOML settings loading.

use super::structs::{ConsoleSettings, FileSettings, GeneralSettings};
use crate::internal;
use crate::level::Level;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the settings came from, kept until internal diagnostics can report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadReport {
    Loaded(PathBuf),
    Missing(PathBuf),
    /// The file (or config dir) was unusable; defaults are in effect.
    Failed(String),
}

impl LoadReport {
    /// Sends the report through internal diagnostics.
    pub fn log(&self) {
        match self {
            Self::Loaded(path) => {
                internal::info("CONFIG", &format!("Settings loaded from {}", path.display()));
            }
            Self::Missing(path) => internal::debug(
                "CONFIG",
                &format!("{} not found, using defaults", path.display()),
            ),
            Self::Failed(e) => internal::warn("CONFIG", &format!("{e}, using default settings")),
        }
    }
}

/// An empty settings file still produces a working printer:
/// `#[serde(default)]` on every section makes zero-config work.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub console: ConsoleSettings,
    pub file: FileSettings,
}

impl Settings {
    /// Loads `<config dir>/framelog/framelog.toml`, or defaults when the file is absent.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be read,
    /// or it is not valid TOML for these settings.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        Self::load_from(&path)
    }

    /// Loads settings from an explicit path. A missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Loads from `path`, falling back to defaults on any failure.
    ///
    /// Internal diagnostics are configured from the result, so they can't be
    /// running yet; the returned report is logged once they are.
    #[must_use]
    pub fn load_or_default(path: &Path) -> (Self, LoadReport) {
        match Self::load_from(path) {
            Ok(settings) if path.exists() => (settings, LoadReport::Loaded(path.to_path_buf())),
            Ok(settings) => (settings, LoadReport::Missing(path.to_path_buf())),
            Err(e) => (Self::default(), LoadReport::Failed(e.to_string())),
        }
    }

    /// Parses settings from TOML text.
    ///
    /// # Errors
    /// Returns [`crate::Error::ConfigParse`] on malformed TOML or mistyped fields.
    pub fn from_toml(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// XDG-style location, `~/.config/framelog/framelog.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("framelog").join("framelog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Settings store the level as a string for TOML ergonomics. Unknown names fall back
    /// to `Verbose` so a typo never hides logs.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.general.level.parse().unwrap_or_else(|e| {
            internal::warn("CONFIG", &format!("{e}, using verbose"));
            Level::Verbose
        })
    }

    /// Level for framelog's own diagnostics, `Warn` when unset or unknown.
    #[must_use]
    pub fn parse_internal_level(&self) -> Level {
        self.general.internal_level.parse().unwrap_or(Level::Warn)
    }
}
