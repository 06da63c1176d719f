//! Structured logging setup.
//!
//! # Responsibilities
//! - Install the process `tracing` subscriber once at startup
//! - Pick the filter from `RUST_LOG`, falling back to config
//! - Reject a malformed `RUST_LOG` instead of silently ignoring it
//! - Choose pretty or JSON output
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON format for machines, pretty format for humans

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

use crate::config::schema::{LogFormat, ObservabilityConfig};

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),

    #[error("invalid {var}: {source}")]
    EnvFilter {
        var: &'static str,
        #[source]
        source: ParseError,
    },

    #[error("logging already initialized: {0}")]
    Init(#[from] TryInitError),
}

/// Build the level filter: `RUST_LOG` wins over the configured directive.
pub fn build_filter(config: &ObservabilityConfig) -> Result<EnvFilter, LoggingError> {
    filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok(), config)
}

fn filter_from(env: Option<String>, config: &ObservabilityConfig) -> Result<EnvFilter, LoggingError> {
    match env {
        Some(directives) if !directives.trim().is_empty() => {
            EnvFilter::try_new(directives).map_err(|source| LoggingError::EnvFilter {
                var: EnvFilter::DEFAULT_ENV,
                source,
            })
        }
        _ => Ok(EnvFilter::try_new(&config.log_filter)?),
    }
}

/// Install the global subscriber.
pub fn init_logging(config: &ObservabilityConfig) -> Result<(), LoggingError> {
    let registry = tracing_subscriber::registry().with(build_filter(config)?);

    match config.log_format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init()?,
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?,
    }

    Ok(())
}
