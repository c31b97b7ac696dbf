//! Error types for the spectral core
//!
//! Every error here is a caller precondition violation. The transforms check
//! their inputs up front and return before touching any buffer.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DspError {
    #[error("Buffer length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Transform length must be a power of two (got {0})")]
    NotPowerOfTwo(usize),

    #[error("Length {length} is too short (minimum: {minimum})")]
    TooShort { length: usize, minimum: usize },

    #[error("Sample rate must be positive and finite (got {0})")]
    InvalidSampleRate(f64),
}

pub type DspResult<T> = Result<T, DspError>;

/// Fail unless both buffers have the same length
pub(crate) fn ensure_same_len(expected: usize, actual: usize) -> DspResult<()> {
    if expected != actual {
        return Err(DspError::LengthMismatch { expected, actual });
    }
    Ok(())
}

/// Fail unless `length` is a power of two no smaller than `minimum`
pub(crate) fn ensure_power_of_two(length: usize, minimum: usize) -> DspResult<()> {
    if length < minimum {
        return Err(DspError::TooShort { length, minimum });
    }
    if !length.is_power_of_two() {
        return Err(DspError::NotPowerOfTwo(length));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_of_two_checks() {
        assert!(ensure_power_of_two(512, 2).is_ok());
        assert_eq!(ensure_power_of_two(1, 2), Err(DspError::TooShort { length: 1, minimum: 2 }));
        assert_eq!(ensure_power_of_two(0, 2), Err(DspError::TooShort { length: 0, minimum: 2 }));
        assert_eq!(ensure_power_of_two(48, 4), Err(DspError::NotPowerOfTwo(48)));
    }

    #[test]
    fn test_error_messages() {
        let err = DspError::LengthMismatch { expected: 512, actual: 256 };
        assert_eq!(err.to_string(), "Buffer length mismatch: expected 512, got 256");
    }
}
