//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ConfigOverrides from the CLI (resolve_config), validated again
//!     → AppConfig (immutable for the rest of the run)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, resolve_config, ConfigError};
pub use schema::{AppConfig, ConfigOverrides, DemoConfig, LogFormat, ObservabilityConfig};
pub use validation::{validate_config, ValidationError};
