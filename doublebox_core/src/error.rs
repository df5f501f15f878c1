//! Error types for the doublebox crates.
//!
//! The codec itself is total — canonicalization and truncation are
//! documented contracts, not faults — so the only fallible surface is the
//! diagnostic hex-word parser used by inspection tooling.

use thiserror::Error;

/// The result type used by fallible doublebox operations.
pub type BoxResult<T> = Result<T, ParseBitsError>;

/// Failure to parse a textual hex word into a 64-bit bit pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBitsError {
    /// The input held no hex digits at all.
    #[error("empty hex word")]
    Empty,

    /// A character was neither a hex digit nor an underscore separator.
    #[error("invalid hex digit {digit:?}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
    },

    /// More than 16 hex digits: the value cannot fit in 64 bits.
    #[error("hex word wider than 64 bits")]
    Overflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_empty() {
        assert_eq!(ParseBitsError::Empty.to_string(), "empty hex word");
    }

    #[test]
    fn test_display_invalid_digit() {
        let err = ParseBitsError::InvalidDigit { digit: 'g' };
        assert_eq!(err.to_string(), "invalid hex digit 'g'");
    }

    #[test]
    fn test_display_overflow() {
        assert_eq!(
            ParseBitsError::Overflow.to_string(),
            "hex word wider than 64 bits"
        );
    }

    #[test]
    fn test_error_is_clone_and_eq() {
        let err = ParseBitsError::InvalidDigit { digit: 'z' };
        assert_eq!(err.clone(), err);
        assert_ne!(err, ParseBitsError::Empty);
    }
}
