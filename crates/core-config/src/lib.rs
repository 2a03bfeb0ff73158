//! Configuration loading and parsing.
//!
//! Parses `diary.toml` (or an override path provided by the binary):
//!
//! ```toml
//! [wrap]
//! width = 39
//! measure = "graphemes"   # or "columns"
//!
//! [display]
//! visible_lines = 3
//! min_opacity = 0.25
//! ```
//!
//! Every field is optional. Unknown fields are ignored so older binaries keep
//! reading newer files. A file that fails to parse falls back to defaults with
//! a warning; out-of-range values are replaced field by field in
//! [`Config::sanitized`].

use anyhow::{Context, Result};
use core_state::{
    DEFAULT_MIN_OPACITY, DEFAULT_VISIBLE_LINES, DEFAULT_WRAP_WIDTH, FadeTable, WrapSettings,
};
use core_text::Measure;
use serde::Deserialize;
use std::{fs, io, path::PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = "diary.toml";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("wrap.width must be greater than zero")]
    ZeroWrapWidth,
    #[error("display.visible_lines must be greater than zero")]
    ZeroVisibleLines,
    #[error("display.min_opacity {0} is outside 0.0..=1.0")]
    OpacityOutOfRange(f32),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct WrapConfig {
    #[serde(default = "WrapConfig::default_width")]
    pub width: usize,
    #[serde(default)]
    pub measure: Measure,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            measure: Measure::default(),
        }
    }
}

impl WrapConfig {
    const fn default_width() -> usize {
        DEFAULT_WRAP_WIDTH
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "DisplayConfig::default_visible_lines")]
    pub visible_lines: usize,
    #[serde(default = "DisplayConfig::default_min_opacity")]
    pub min_opacity: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            visible_lines: Self::default_visible_lines(),
            min_opacity: Self::default_min_opacity(),
        }
    }
}

impl DisplayConfig {
    const fn default_visible_lines() -> usize {
        DEFAULT_VISIBLE_LINES
    }
    const fn default_min_opacity() -> f32 {
        DEFAULT_MIN_OPACITY
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct ConfigFile {
    #[serde(default)]
    pub wrap: WrapConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>,     // original file string (optional)
    pub file: ConfigFile,        // parsed (or default) data
    pub source: Option<PathBuf>, // path the file was read from
}

/// Best-effort config path: working directory first, then the platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("diary").join(CONFIG_FILE_NAME);
    }
    local
}

/// Load configuration from `path`, or from [`discover`] when `None`.
///
/// A missing file yields defaults. Read failures other than "not found" are errors.
pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(target: "config", path = %path.display(), "config_missing_using_defaults");
            return Ok(Config::default());
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("failed to read config file {}", path.display()));
        }
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => Ok(Config {
            raw: Some(content),
            file,
            source: Some(path),
        }
        .sanitized()),
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed_using_defaults");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// First invalid value found, if any.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.file.wrap.width == 0 {
            return Err(ConfigError::ZeroWrapWidth);
        }
        if self.file.display.visible_lines == 0 {
            return Err(ConfigError::ZeroVisibleLines);
        }
        let opacity = self.file.display.min_opacity;
        if !(0.0..=1.0).contains(&opacity) {
            return Err(ConfigError::OpacityOutOfRange(opacity));
        }
        Ok(())
    }

    /// Replace every invalid value with its default, logging each replacement.
    pub fn sanitized(mut self) -> Self {
        while let Err(err) = self.validate() {
            warn!(target: "config", %err, "config_value_replaced_with_default");
            match err {
                ConfigError::ZeroWrapWidth => self.file.wrap.width = WrapConfig::default_width(),
                ConfigError::ZeroVisibleLines => {
                    self.file.display.visible_lines = DisplayConfig::default_visible_lines()
                }
                ConfigError::OpacityOutOfRange(_) => {
                    self.file.display.min_opacity = DisplayConfig::default_min_opacity()
                }
            }
        }
        self
    }

    pub fn wrap_settings(&self) -> WrapSettings {
        WrapSettings {
            width: self.file.wrap.width,
            measure: self.file.wrap.measure,
        }
    }

    pub fn fade_table(&self) -> FadeTable {
        FadeTable::linear(
            self.file.display.visible_lines,
            self.file.display.min_opacity,
        )
    }
}
