//! Error types for the Deterrent indicator
//!
//! Provides a unified error type and the computation's error variants

use thiserror::Error;

/// Result type alias using DeterrentError
pub type Result<T> = std::result::Result<T, DeterrentError>;

/// Unified error type for Deterrent operations
#[derive(Debug, Error)]
pub enum DeterrentError {
    // Indicator computation errors
    #[error("Indicator error: {0}")]
    Indicator(#[from] IndicatorError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DeterrentError {
    /// True if this error rejects an out-of-range argument
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, DeterrentError::Indicator(IndicatorError::InvalidArgument(_)))
    }

    /// True if this error rejects loaded configuration
    pub fn is_config(&self) -> bool {
        matches!(self, DeterrentError::Config(_))
    }

    /// True if this error reports misaligned scores and flags
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(
            self,
            DeterrentError::Indicator(IndicatorError::DimensionMismatch { .. })
        )
    }
}

/// Precision and deterrent-effect computation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Dimension mismatch: {scores} scores vs {flags} flags")]
    DimensionMismatch { scores: usize, flags: usize },
}

impl IndicatorError {
    /// Rejection of a top fraction outside [0, 1]
    pub fn ratio_out_of_range(name: &str, value: f64) -> Self {
        IndicatorError::InvalidArgument(format!("{} must be within [0, 1], got {}", name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DeterrentError::from(IndicatorError::ratio_out_of_range("k", 1.1));
        assert!(err.to_string().contains("k must be within [0, 1]"));
        assert!(err.to_string().contains("1.1"));
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = IndicatorError::DimensionMismatch { scores: 3, flags: 5 };
        assert!(err.to_string().contains("3 scores vs 5 flags"));
    }

    #[test]
    fn test_kind_helpers() {
        let invalid = DeterrentError::from(IndicatorError::InvalidArgument("k".into()));
        assert!(invalid.is_invalid_argument());
        assert!(!invalid.is_dimension_mismatch());

        let mismatch = DeterrentError::from(IndicatorError::DimensionMismatch { scores: 1, flags: 2 });
        assert!(mismatch.is_dimension_mismatch());
        assert!(!mismatch.is_invalid_argument());

        let config = DeterrentError::Config("target_ratio".into());
        assert!(config.is_config());
        assert!(!config.is_invalid_argument());
        assert!(!invalid.is_config());
    }
}
