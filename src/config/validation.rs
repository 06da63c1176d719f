//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::AppConfig;

/// Upper bound on lines per spawned task.
pub const MAX_ITERATIONS: usize = 1_000_000;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("demo.iterations must be between 1 and {max}, got {value}")]
    IterationsOutOfRange { value: usize, max: usize },

    #[error("observability.log_filter must not be empty")]
    EmptyLogFilter,
}

pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let iterations = config.demo.iterations;
    if !(1..=MAX_ITERATIONS).contains(&iterations) {
        errors.push(ValidationError::IterationsOutOfRange {
            value: iterations,
            max: MAX_ITERATIONS,
        });
    }

    if config.observability.log_filter.trim().is_empty() {
        errors.push(ValidationError::EmptyLogFilter);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_reports_every_error() {
        let mut config = AppConfig::default();
        config.demo.iterations = 0;
        config.observability.log_filter = "  ".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::IterationsOutOfRange {
                    value: 0,
                    max: MAX_ITERATIONS
                },
                ValidationError::EmptyLogFilter,
            ]
        );
    }

    #[test]
    fn test_iterations_upper_bound() {
        let mut config = AppConfig::default();
        config.demo.iterations = MAX_ITERATIONS;
        assert!(validate_config(&config).is_ok());

        config.demo.iterations = MAX_ITERATIONS + 1;
        assert_eq!(validate_config(&config).unwrap_err().len(), 1);
    }
}
