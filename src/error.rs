//! Error types for phone number validation.
//!
//! Validation failures are ordinary outcomes, not faults: the owning form
//! turns them into an "invalid or incomplete number" message. The `Display`
//! text of each variant is written to be shown to the user as-is.

use std::fmt;

/// Reasons a phone number is not complete for its country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The country lookup failed, so no length can be complete.
    UnknownCountry,

    /// The input contained no digits at all.
    NoDigits,

    /// The number has fewer digits than the country requires.
    TooShort {
        /// The actual number of digits provided.
        length: usize,
        /// The number of digits required.
        required: usize,
    },

    /// The number has more digits than the country allows.
    TooLong {
        /// The actual number of digits provided.
        length: usize,
        /// The maximum allowed digits.
        maximum: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCountry => write!(f, "unsupported country code"),

            Self::NoDigits => write!(f, "phone number is empty"),

            Self::TooShort { length, required } => {
                write!(
                    f,
                    "phone number is incomplete: got {} digits, expected {}",
                    length, required
                )
            }

            Self::TooLong { length, maximum } => {
                write!(
                    f,
                    "phone number is too long: got {} digits, expected {}",
                    length, maximum
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ValidationError::UnknownCountry.to_string(),
            "unsupported country code"
        );

        assert_eq!(ValidationError::NoDigits.to_string(), "phone number is empty");

        assert_eq!(
            ValidationError::TooShort {
                length: 6,
                required: 10
            }
            .to_string(),
            "phone number is incomplete: got 6 digits, expected 10"
        );

        assert_eq!(
            ValidationError::TooLong {
                length: 12,
                maximum: 10
            }
            .to_string(),
            "phone number is too long: got 12 digits, expected 10"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidationError>();
    }
}
