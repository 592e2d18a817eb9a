//! Error types for layout generation.
//!
//! Errors are structured values. They carry the offending parameter or
//! entity index so callers can build their own messages; the `Display`
//! output is a terse English fallback.

use thiserror::Error;

use crate::grid::Orientation;

/// Errors produced while generating a layout.
///
/// Every failure is deterministic for a given input, so none of these are
/// worth retrying without changing the request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A value failed a precondition such as a non-positive count or distance.
    #[error("invalid parameter `{parameter}`: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },

    /// A grid line could not be built from the computed geometry.
    #[error("failed to create {orientation} grid #{index}: {reason}")]
    GridCreationFailed {
        orientation: Orientation,
        index: u32,
        reason: String,
    },

    /// A level could not be built.
    #[error("failed to create level #{index}: {reason}")]
    LevelCreationFailed { index: u32, reason: String },
}

impl LayoutError {
    pub(crate) fn invalid_parameter(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }

    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            LayoutError::InvalidParameter { .. } => "invalid_parameter",
            LayoutError::GridCreationFailed { .. } => "grid_creation_failed",
            LayoutError::LevelCreationFailed { .. } => "level_creation_failed",
        }
    }

    /// Returns `true` if the caller supplied a value that broke a precondition.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, LayoutError::InvalidParameter { .. })
    }
}

/// Checks that `value` is a positive, finite real.
pub(crate) fn ensure_positive(parameter: &'static str, value: f64) -> Result<(), LayoutError> {
    if !value.is_finite() {
        return Err(LayoutError::invalid_parameter(
            parameter,
            format!("must be a finite number, got {value}"),
        ));
    }
    if value <= 0.0 {
        return Err(LayoutError::invalid_parameter(
            parameter,
            format!("must be greater than zero, got {value}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive("distance", 0.5).is_ok());

        let err = ensure_positive("distance", 0.0).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidParameter {
                parameter: "distance",
                reason: "must be greater than zero, got 0".to_string(),
            }
        );

        assert!(ensure_positive("range", -1.0).unwrap_err().is_invalid_parameter());
        assert!(ensure_positive("range", f64::NAN).unwrap_err().is_invalid_parameter());
        assert!(ensure_positive("range", f64::INFINITY).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn test_error_codes_and_messages() {
        let err = LayoutError::GridCreationFailed {
            orientation: Orientation::Horizontal,
            index: 3,
            reason: "degenerate line".to_string(),
        };
        assert_eq!(err.code(), "grid_creation_failed");
        assert_eq!(
            err.to_string(),
            "failed to create horizontal grid #3: degenerate line"
        );

        let err = LayoutError::LevelCreationFailed {
            index: 0,
            reason: "count must be at least 1".to_string(),
        };
        assert_eq!(err.code(), "level_creation_failed");
        assert!(!err.is_invalid_parameter());
    }
}
