//! Error types for the position error models.

use thiserror::Error;

/// Errors raised by the models.
///
/// Degenerate inputs are rejected up front. Numeric divergence inside the
/// valid domain (tan near π/2) is not an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Input outside the model's domain.
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name as it appears in the API.
        name: &'static str,
        /// Offending value.
        value: f64,
        /// Why it was rejected.
        reason: &'static str,
    },
}

impl ModelError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

/// Result alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Reject non-finite or non-positive values.
pub(crate) fn require_positive(name: &'static str, value: f64) -> ModelResult<()> {
    if !value.is_finite() {
        return Err(ModelError::invalid(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(ModelError::invalid(name, value, "must be greater than 0"));
    }
    Ok(())
}

/// Reject non-finite values.
pub(crate) fn require_finite(name: &'static str, value: f64) -> ModelResult<()> {
    if !value.is_finite() {
        return Err(ModelError::invalid(name, value, "must be finite"));
    }
    Ok(())
}

/// `ceil(ratio)` as a count, rejected when not finite or above `max`.
pub(crate) fn bounded_count(
    name: &'static str,
    value: f64,
    ratio: f64,
    max: usize,
) -> ModelResult<usize> {
    let n = ratio.ceil();
    if !n.is_finite() || n > max as f64 {
        return Err(ModelError::invalid(name, value, "too many samples"));
    }
    Ok(n.max(0.0) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_check() {
        assert!(require_positive("time_step", 0.5).is_ok());
        assert!(require_positive("time_step", 0.0).is_err());
        assert!(require_positive("time_step", -1.0).is_err());
        assert!(require_positive("time_step", f64::NAN).is_err());
        assert!(require_positive("time_step", f64::INFINITY).is_err());
    }

    #[test]
    fn bounded_count_limits() {
        assert_eq!(bounded_count("step", 1.0, 2.1, 10).unwrap(), 3);
        assert_eq!(bounded_count("step", 1.0, 10.0, 10).unwrap(), 10);
        assert!(bounded_count("step", 1.0, 10.5, 10).is_err());
        assert!(bounded_count("step", 1.0, 1e60, 10).is_err());
        assert!(bounded_count("step", 1.0, f64::INFINITY, 10).is_err());
        assert!(bounded_count("step", 1.0, f64::NAN, 10).is_err());
    }

    #[test]
    fn display_names_parameter() {
        let err = ModelError::invalid("total_time", -3.0, "must be greater than 0");
        assert_eq!(
            err.to_string(),
            "Invalid parameter total_time = -3: must be greater than 0"
        );
    }
}
