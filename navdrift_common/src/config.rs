//! Configuration loading traits and types.
//!
//! This module provides a standardized way to load TOML scenario files
//! across navdrift tools.
//!
//! # Usage
//!
//! ```rust,no_run
//! use navdrift_common::config::{ConfigLoader, SharedConfig, ConfigError};
//! use serde::Deserialize;
//! use std::path::Path;
//!
//! #[derive(Debug, Deserialize)]
//! struct MyScenario {
//!     shared: SharedConfig,
//!     total_time: f64,
//! }
//!
//! fn main() -> Result<(), ConfigError> {
//!     let scenario = MyScenario::load(Path::new("navdrift.toml"))?;
//!     println!("Scenario: {}", scenario.shared.service_name);
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Error type for configuration loading operations.
///
/// This enum represents all possible errors that can occur when loading
/// scenario files.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Configuration file not found at specified path.
    #[error("Configuration file not found")]
    FileNotFound,

    /// TOML parsing failed.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Semantic validation failed.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Log level for application logging.
///
/// Uses lowercase serde values for TOML compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Most verbose, per-run tracing information.
    Trace,
    /// Per-combination sweep progress.
    Debug,
    /// General information about the run.
    #[default]
    Info,
    /// Model validity warnings (small-angle regime left).
    Warn,
    /// Errors only.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Common configuration fields shared across navdrift scenario files.
///
/// Embed this in tool-specific configuration structs.
///
/// # TOML Example
///
/// ```toml
/// [shared]
/// log_level = "debug"
/// service_name = "navdrift-tactical-grade"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedConfig {
    /// Logging verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Scenario identifier, echoed in logs and output.
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

fn default_service_name() -> String {
    "navdrift".to_string()
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            service_name: default_service_name(),
        }
    }
}

impl SharedConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if:
    /// - `service_name` is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_name.is_empty() {
            return Err(ConfigError::ValidationError(
                "service_name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Trait for loading configuration from TOML files.
///
/// This trait provides a default implementation that works with any type
/// implementing `serde::de::DeserializeOwned`.
///
/// # Contract
///
/// - Returns `ConfigError::FileNotFound` if the file does not exist
/// - Returns `ConfigError::ParseError` if TOML syntax is invalid
///
/// Semantic validation is left to the concrete type.
pub trait ConfigLoader: Sized + serde::de::DeserializeOwned {
    /// Load configuration from a TOML file.
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound
            } else {
                ConfigError::ParseError(e.to_string())
            }
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from an in-memory TOML document.
    fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

// Blanket implementation for all types that implement DeserializeOwned.
impl<T: serde::de::DeserializeOwned> ConfigLoader for T {}
