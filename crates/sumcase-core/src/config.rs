//! Configuration
//!
//! Settings for logging and for the diagnostics matchers attach to their
//! errors. Every field has a default, so an empty TOML document is a valid
//! configuration.

use std::any::Any;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sumcase_error::{codes, ErrorCode, ErrorDomain, SumcaseError, DEFAULT_RENDER_LIMIT};
use thiserror::Error;

/// Errors raised while loading a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl SumcaseError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "CONFIG_IO",
            ConfigError::Parse(_) => "CONFIG_PARSE",
            ConfigError::Invalid(_) => "CONFIG_INVALID",
        }
    }

    fn code(&self) -> ErrorCode {
        match self {
            ConfigError::Io { .. } => codes::CONFIG_IO,
            ConfigError::Parse(_) => codes::CONFIG_PARSE,
            ConfigError::Invalid(_) => codes::CONFIG_INVALID,
        }
    }

    fn domain(&self) -> ErrorDomain {
        ErrorDomain::Config
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SumcaseConfig {
    /// Tracing subscriber settings
    pub logging: LoggingConfig,

    /// Matcher diagnostics
    pub diagnostics: Diagnostics,
}

/// Tracing subscriber settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `"info"` or `"sumcase_core=trace,warn"`.
    /// `RUST_LOG` takes precedence when set.
    pub level: String,

    /// Emit JSON instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Diagnostics a matcher attaches to dispatch and to its errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Diagnostics {
    /// Maximum number of characters of an unmatched value kept in a
    /// `MatchError`
    pub max_rendered_len: usize,

    /// Emit a trace event naming the branch that handled each call
    pub trace_dispatch: bool,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self {
            max_rendered_len: DEFAULT_RENDER_LIMIT,
            trace_dispatch: true,
        }
    }
}

impl SumcaseConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: SumcaseConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.diagnostics.max_rendered_len == 0 {
            return Err(ConfigError::Invalid(
                "diagnostics.max_rendered_len must be greater than zero".to_string(),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Invalid("logging.level must not be empty".to_string()));
        }
        Ok(())
    }
}
