//! Layered application configuration.
//!
//! Precedence: defaults, then the YAML file (if given), then `CALCULATOR__*`
//! environment variables with `__` separating nested keys.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "CALCULATOR__";

/// Largest accepted `calculator.precision`; an `f64` carries at most 17
/// significant decimal digits.
pub const MAX_PRECISION: usize = 17;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config file does not exist: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),

    #[error("invalid logging.level '{level}': {reason}")]
    InvalidLogLevel { level: String, reason: String },

    #[error("invalid calculator.precision {precision}: must be at most {max}", max = MAX_PRECISION)]
    InvalidPrecision { precision: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub calculator: CalculatorConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when neither `-v` nor `RUST_LOG` is set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// How a division by zero is surfaced.
    pub division_by_zero: ErrorDisplay,
    /// Fixed number of decimal places for results. Unset means shortest form.
    pub precision: Option<usize>,
}

/// Presentation of hard calculation errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorDisplay {
    /// Message on stderr and a failing exit status.
    #[default]
    Alert,
    /// Message printed in place of the result.
    Inline,
}

impl AppConfig {
    /// Load the layered configuration.
    ///
    /// # Errors
    /// Fails if `path` is given but missing, or if any layer does not match
    /// the schema.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::MissingFile(path.to_path_buf()));
            }
            figment = figment.merge(Yaml::file(path));
        }

        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        EnvFilter::try_new(&self.logging.level).map_err(|e| ConfigError::InvalidLogLevel {
            level: self.logging.level.clone(),
            reason: e.to_string(),
        })?;

        if let Some(precision) = self.calculator.precision
            && precision > MAX_PRECISION
        {
            return Err(ConfigError::InvalidPrecision { precision });
        }
        Ok(())
    }

    /// Render the effective configuration as YAML.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> anyhow::Result<String> {
        Ok(serde_saphyr::to_string(self)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
