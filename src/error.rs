//! Error type for sampling operations.

use std::convert::Infallible;
use thiserror::Error;

/// Errors raised by the sampling kernel.
///
/// There is a single failure kind: an argument the caller supplied cannot be
/// used as-is. Nothing is clamped or rounded, so the caller always sees the
/// offending value in `reason`.
///
/// # Examples
///
/// ```
/// use pi_sampler::{Iterations, SamplerError};
///
/// let err = Iterations::try_from(-1_i64).unwrap_err();
/// assert!(matches!(err, SamplerError::InvalidArgument { name: "iterations", .. }));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SamplerError {
    /// The named argument was rejected.
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Argument name
        name: &'static str,
        /// What was wrong with the supplied value
        reason: String,
    },
}

impl SamplerError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        SamplerError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

impl From<Infallible> for SamplerError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_argument() {
        let err = SamplerError::invalid("iterations", "must be non-negative, got -3");
        assert_eq!(
            err.to_string(),
            "Invalid argument `iterations`: must be non-negative, got -3"
        );
    }
}
