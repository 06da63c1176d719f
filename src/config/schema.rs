//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Demonstration flow settings.
    pub demo: DemoConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Apply command-line values on top of this configuration.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(iterations) = overrides.iterations {
            self.demo.iterations = iterations;
        }
        if let Some(linger_ms) = overrides.linger_ms {
            self.demo.linger_ms = linger_ms;
        }
        if let Some(format) = overrides.log_format {
            self.observability.log_format = format;
        }
        self
    }
}

/// Values given on the command line; `None` keeps the configured value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub iterations: Option<usize>,
    pub linger_ms: Option<u64>,
    pub log_format: Option<LogFormat>,
}

/// Demonstration flow settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct DemoConfig {
    /// Lines emitted by each spawned task.
    pub iterations: usize,

    /// How long the binary keeps the runtime alive after the detached flow
    /// returns. Zero exits immediately and may cut the task short.
    pub linger_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            linger_ms: 0,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,

    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "spawnwait=info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
