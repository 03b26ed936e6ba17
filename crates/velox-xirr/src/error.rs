//! Error types for the XIRR engine.

use thiserror::Error;

/// A specialized Result type for XIRR calculations.
pub type XirrResult<T> = Result<T, XirrError>;

/// Errors that can occur at the engine boundary.
///
/// Numerical failure is never an error: a series with no sensible
/// annualized rate yields the `f64::NAN` sentinel through `Ok`. The only
/// `Err` path is a configuration contract violation, rejected before any
/// solver work begins.
#[derive(Error, Debug, Clone)]
pub enum XirrError {
    /// The engine configuration violates its contract.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the violated constraint.
        reason: String,
    },
}

impl XirrError {
    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = XirrError::invalid_config("tolerance must be positive");
        assert!(err.to_string().contains("tolerance must be positive"));
    }
}
