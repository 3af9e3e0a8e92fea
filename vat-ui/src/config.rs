//! Startup configuration for the calculator window.
//!
//! Values come from an optional TOML file and are then overridden by any
//! command-line flags. Every key is optional; an empty file reproduces the
//! built-in startup state (Gross active, 23%, comma separator).

use std::{fmt, fs, path::Path, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;
use vat_core::{AmountField, DecimalSeparator, TriFieldConverter, VatRate};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("window size must be positive, got {width}x{height}")]
    InvalidWindowSize { width: f32, height: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 360.0,
            height: 640.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub rate: VatRate,
    pub active: AmountField,
    pub separator: DecimalSeparator,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    pub window: WindowConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rate: VatRate::default(),
            active: AmountField::default(),
            separator: DecimalSeparator::default(),
            log_level: "info".to_string(),
            log_file: None,
            window: WindowConfig::default(),
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub rate: Option<VatRate>,
    pub active: Option<AmountField>,
    pub separator: Option<DecimalSeparator>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    /// Parses configuration from TOML text. `origin` is only used in errors.
    pub fn from_toml_str(
        text: &str,
        origin: &Path,
    ) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn with_overrides(
        self,
        overrides: ConfigOverrides,
    ) -> Self {
        Self {
            rate: overrides.rate.unwrap_or(self.rate),
            active: overrides.active.unwrap_or(self.active),
            separator: overrides.separator.unwrap_or(self.separator),
            log_level: overrides.log_level.unwrap_or(self.log_level),
            log_file: overrides.log_file.or(self.log_file),
            window: self.window,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let WindowConfig { width, height } = self.window;
        let usable = |side: f32| side.is_finite() && side > 0.0;
        if !(usable(width) && usable(height)) {
            return Err(ConfigError::InvalidWindowSize { width, height });
        }
        Ok(())
    }

    /// A fresh converter in the configured starting state.
    pub fn converter(&self) -> TriFieldConverter {
        TriFieldConverter::new()
            .with_rate(self.rate)
            .with_active(self.active)
            .with_separator(self.separator)
    }
}

impl fmt::Display for AppConfig {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Rate:      {}", self.rate)?;
        writeln!(f, "Active:    {}", self.active)?;
        writeln!(f, "Separator: {}", self.separator)?;
        writeln!(f, "Log level: {}", self.log_level)?;
        match &self.log_file {
            Some(path) => writeln!(f, "Log file:  {}", path.display())?,
            None => writeln!(f, "Log file:  —")?,
        }
        write!(
            f,
            "Window:    {}x{}",
            self.window.width, self.window.height
        )
    }
}
