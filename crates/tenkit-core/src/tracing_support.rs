//! Structured logging support for tensor operations
//!
//! Every shape-changing operation in tenkit emits `tracing` events (unfold,
//! fold, mode-n product, reconstruction) at `debug` level. This module
//! installs a subscriber for them and provides shared event helpers.
//!
//! # Example
//!
//! ```ignore
//! use tenkit_core::tracing_support::{init_tracing, TracingConfig, TracingFormat};
//!
//! // Initialize tracing at application startup
//! init_tracing(TracingConfig {
//!     format: TracingFormat::Pretty,
//!     filter: "tenkit=debug,info".to_string(),
//!     ..TracingConfig::default()
//! })
//! .unwrap();
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., `RUST_LOG=tenkit_core=debug`)
//! - `TENKIT_LOG_FORMAT`: Set output format (`json`, `pretty` or `compact`, default: `pretty`)
//!
//! Installing a subscriber requires the `tracing` feature; without it
//! [`init_tracing`] does nothing and the events are dropped.

#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Error returned when a subscriber cannot be installed
pub type TracingInitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Tracing output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingFormat {
    /// Pretty-printed human-readable format
    Pretty,
    /// JSON format for structured logging
    Json,
    /// Compact format (single line per event)
    Compact,
}

impl TracingFormat {
    /// Parse from string; unknown values fall back to `Pretty`
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => TracingFormat::Json,
            "compact" => TracingFormat::Compact,
            _ => TracingFormat::Pretty,
        }
    }
}

/// Tracing configuration
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Output format
    pub format: TracingFormat,
    /// Filter directive (e.g., "tenkit_core=debug,info")
    pub filter: String,
    /// Enable ANSI colors
    pub with_ansi: bool,
    /// Show target module paths
    pub with_target: bool,
    /// Show file locations
    pub with_file: bool,
    /// Show line numbers
    pub with_line_number: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        let format = std::env::var("TENKIT_LOG_FORMAT")
            .map(|s| TracingFormat::parse(&s))
            .unwrap_or(TracingFormat::Pretty);

        let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "tenkit=info,warn".to_string());

        Self {
            format,
            filter,
            with_ansi: true,
            with_target: true,
            with_file: false,
            with_line_number: false,
        }
    }
}

/// Install a global subscriber with the given configuration
///
/// Call once at application startup. A second call fails because a global
/// subscriber is already set.
#[cfg(feature = "tracing")]
pub fn init_tracing(config: TracingConfig) -> Result<(), TracingInitError> {
    let filter = EnvFilter::try_new(&config.filter)?;

    match config.format {
        TracingFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .pretty()
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .with_file(config.with_file)
                .with_line_number(config.with_line_number)
                .with_filter(filter);

            tracing_subscriber::registry().with(fmt_layer).try_init()?;
        }
        TracingFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_target(config.with_target)
                .with_file(config.with_file)
                .with_line_number(config.with_line_number)
                .with_filter(filter);

            tracing_subscriber::registry().with(fmt_layer).try_init()?;
        }
        TracingFormat::Compact => {
            let fmt_layer = fmt::layer()
                .compact()
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .with_file(config.with_file)
                .with_line_number(config.with_line_number)
                .with_filter(filter);

            tracing_subscriber::registry().with(fmt_layer).try_init()?;
        }
    }

    Ok(())
}

/// Stub for when tracing feature is disabled
#[cfg(not(feature = "tracing"))]
pub fn init_tracing(_config: TracingConfig) -> Result<(), TracingInitError> {
    Ok(())
}

/// Record a reconstruction from a factorized representation
///
/// `kind` names the representation (`"cp"`, `"tucker"`, `"tt"`).
pub fn record_reconstruction(kind: &str, shape: &[usize], parameters: usize) {
    let elements: usize = shape.iter().product();
    tracing::debug!(
        kind = kind,
        shape = ?shape,
        elements = elements,
        parameters = parameters,
        compression = elements as f64 / parameters.max(1) as f64,
        "reconstruct"
    );
}
