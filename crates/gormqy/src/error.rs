//! Error types for gormqy

use thiserror::Error;

/// Result type alias for gormqy operations
pub type QyResult<T> = Result<T, QyError>;

/// Errors raised when handing a built clause to a database driver.
///
/// Building conditions never fails; these only come out of the conversions
/// that prepare a clause for execution.
#[derive(Debug, Error)]
pub enum QyError {
    /// Placeholder / value count mismatch
    #[error("Param mismatch: clause has {placeholders} '?', but {values} values provided")]
    ParamMismatch { placeholders: usize, values: usize },

    /// Bound value does not fit the target SQL type
    #[error("Value {value} out of range for {target}")]
    ValueRange { value: String, target: String },
}

impl QyError {
    /// Create a param mismatch error
    pub fn param_mismatch(placeholders: usize, values: usize) -> Self {
        Self::ParamMismatch {
            placeholders,
            values,
        }
    }

    /// Create a value range error
    pub fn value_range(value: impl ToString, target: impl Into<String>) -> Self {
        Self::ValueRange {
            value: value.to_string(),
            target: target.into(),
        }
    }

    /// Check if this is a param mismatch error
    pub fn is_param_mismatch(&self) -> bool {
        matches!(self, Self::ParamMismatch { .. })
    }

    /// Check if this is a value range error
    pub fn is_value_range(&self) -> bool {
        matches!(self, Self::ValueRange { .. })
    }
}
