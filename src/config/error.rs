//! Configuration error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

/// A loaded value that the service cannot run with.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{0} must be set")]
    MissingRequired(&'static str),

    #[error("Server port must be non-zero")]
    InvalidPort,

    #[error("{field} must be between 1 and {max} seconds, got {value}")]
    TimeoutOutOfRange {
        field: &'static str,
        value: u64,
        max: u64,
    },

    #[error("Cannot bind to '{0}'")]
    InvalidBindAddress(String),

    #[error("Database URL must use the postgres:// or postgresql:// scheme")]
    InvalidDatabaseUrl,

    #[error("Pool bounds {min}..={max} invalid: max must be 1 to {limit} and not below min")]
    InvalidPoolSize { min: u32, max: u32, limit: u32 },

    #[error("JWT secret must be at least {0} bytes in production")]
    WeakJwtSecret(usize),
}

impl ValidationError {
    /// Accepts a duration in whole seconds within `1..=max`.
    pub(super) fn check_secs(field: &'static str, value: u64, max: u64) -> Result<(), Self> {
        if (1..=max).contains(&value) {
            Ok(())
        } else {
            Err(ValidationError::TimeoutOutOfRange { field, value, max })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_secs_bounds_are_inclusive() {
        assert!(ValidationError::check_secs("timeout", 1, 10).is_ok());
        assert!(ValidationError::check_secs("timeout", 10, 10).is_ok());
        assert!(matches!(
            ValidationError::check_secs("timeout", 0, 10),
            Err(ValidationError::TimeoutOutOfRange { value: 0, .. })
        ));
    }

    #[test]
    fn out_of_range_message_names_the_field() {
        let err = ValidationError::check_secs("acquire_timeout_secs", 0, 120).unwrap_err();
        assert_eq!(
            err.to_string(),
            "acquire_timeout_secs must be between 1 and 120 seconds, got 0"
        );
    }
}
