//! Logging configuration from environment variables or a JSON document.

use crate::TelemetryError;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Configuration for log output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Service name attached to startup logs
    pub service_name: String,

    /// Log filter directive (trace, debug, info, warn, error, or an
    /// `EnvFilter` expression such as `puremvc_core=trace`)
    pub log_level: String,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,

    /// Whether to colorize pretty output
    pub ansi: bool,

    /// Whether to print the event target (module path)
    pub with_target: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "puremvc".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            ansi: true,
            with_target: true,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `MVC_SERVICE_NAME`: Service name (default: puremvc)
    /// - `MVC_LOG_LEVEL` or `RUST_LOG`: Log filter (default: info)
    /// - `MVC_JSON_LOGS`: Enable JSON logs (default: false)
    /// - `MVC_ANSI`: Colorize output (default: true)
    /// - `MVC_LOG_TARGET`: Show event targets (default: true)
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build configuration from any variable lookup.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            service_name: lookup("MVC_SERVICE_NAME").unwrap_or(defaults.service_name),

            log_level: lookup("MVC_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            json_logs: lookup("MVC_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.json_logs),

            ansi: lookup("MVC_ANSI")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.ansi),

            with_target: lookup("MVC_LOG_TARGET")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.with_target),
        }
    }

    /// Parse configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, TelemetryError> {
        serde_json::from_str(json).map_err(|e| TelemetryError::Config(e.to_string()))
    }

    /// Load configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TelemetryError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| TelemetryError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&raw)
    }

    /// Builder-style method to set the log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Builder-style method to switch JSON output
    pub fn with_json_logs(mut self, json: bool) -> Self {
        self.json_logs = json;
        self
    }
}
