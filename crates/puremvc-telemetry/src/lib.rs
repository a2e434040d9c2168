//! # PureMVC Telemetry
//!
//! Logging setup for applications built on `puremvc-core`.
//!
//! The core crate only emits `tracing` events (registrations at `debug`,
//! per-broadcast delivery at `trace`). This crate installs the subscriber.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use puremvc_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     init_logging(&config).expect("Failed to init logging");
//!
//!     // Application code here
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `MVC_SERVICE_NAME` | `puremvc` | Service name in startup log |
//! | `MVC_LOG_LEVEL` | `info` | Log filter (falls back to `RUST_LOG`) |
//! | `MVC_JSON_LOGS` | `false` | JSON output |
//! | `MVC_ANSI` | `true` | Colorized pretty output |
//! | `MVC_LOG_TARGET` | `true` | Show event targets |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging, init_test_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Global subscriber already installed: {0}")]
    AlreadyInitialized(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Convenience macro for a span scoped to one multiton key.
///
/// # Example
///
/// ```rust,ignore
/// use puremvc_telemetry::scope_span;
///
/// let _span = scope_span!("startup", key = "app1").entered();
/// facade.send_notification("STARTUP", None, None)?;
/// ```
#[doc(hidden)]
pub use tracing;

#[macro_export]
macro_rules! scope_span {
    ($name:expr, $($field:tt)*) => {
        $crate::tracing::info_span!($name, $($field)*)
    };
}
