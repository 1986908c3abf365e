use std::collections::TryReserveError;

use thiserror::Error;

/// Errors surfaced by the convolution engine.
///
/// All validation happens before any pixel work: on error, no partial
/// output exists. There are no retryable failure modes here.
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("invalid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("pixel buffer holds {actual} bytes, expected {expected} (width * height * 4)")]
    BufferSizeMismatch { expected: usize, actual: usize },
    #[error("kernel coefficient {index} is not finite: {value}")]
    NonFiniteCoefficient { index: usize, value: f32 },
    #[error("kernel multiplier is not finite: {value}")]
    NonFiniteMultiplier { value: f32 },
    #[error("failed to allocate output buffer: {0}")]
    Allocation(#[from] TryReserveError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_expected_length() {
        let err = FilterError::BufferSizeMismatch {
            expected: 16,
            actual: 12,
        };
        let msg = err.to_string();
        assert!(msg.contains("16"));
        assert!(msg.contains("12"));
    }

    #[test]
    fn test_display_mentions_coefficient_index() {
        let err = FilterError::NonFiniteCoefficient {
            index: 4,
            value: f32::NAN,
        };
        assert!(err.to_string().contains("coefficient 4"));
    }
}
