//! Structured logging initialisation.
//!
//! Two output formats are supported: human-readable lines for local
//! development, and newline-delimited JSON for log aggregation. The filter
//! level can be overridden at runtime via the `RUST_LOG` environment
//! variable; when `RUST_LOG` is not set, the caller-supplied level string
//! is used (e.g. `"info"`, `"debug,cairn_sync=trace"`).

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Selects the output format for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable output for local development.
    Human,
    /// Newline-delimited JSON for log aggregation pipelines.
    Json,
}

impl LogFormat {
    /// Parse a format name; anything other than `"json"` selects
    /// [`LogFormat::Human`].
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Human
        }
    }
}

/// Initialise the global tracing subscriber.
///
/// # Panics
///
/// Panics if a global subscriber has already been set (i.e. this function
/// was called twice in the same process).
pub fn init_logging(format: LogFormat, level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        LogFormat::Human => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(true))
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_target(true))
                .init();
        }
    }
}
