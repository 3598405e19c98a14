//! Error handling for pairing primitives

use core::fmt;

use bnpair_api::{Error as CoreError, Result as CoreResult};

/// The error type for pairing primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Length validation error; unmarshalling reports insufficient data here
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Decoded coordinates fail the group's validity check
    MalformedPoint {
        /// Group whose check failed
        group: &'static str,
        /// Which check failed
        reason: &'static str,
    },

    /// A 32-byte limb encodes an integer ≥ p
    Coordinate {
        /// Context where the limb was decoded
        context: &'static str,
    },

    /// The entropy source failed
    Random {
        /// Context that requested randomness
        context: &'static str,
    },
}

/// Result type for pairing primitives
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Length { context, expected, actual } => {
                write!(f, "bn256: not enough data for {}: expected {}, got {}",
                    context, expected, actual)
            },
            Error::MalformedPoint { group, reason } => {
                write!(f, "bn256: malformed {} point: {}", group, reason)
            },
            Error::Coordinate { context } => {
                write!(f, "bn256: coordinate equals or exceeds modulus in {}", context)
            },
            Error::Random { context } => {
                write!(f, "bn256: entropy source failed in {}", context)
            },
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Length { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            #[cfg(feature = "std")]
            Error::MalformedPoint { group, reason } => CoreError::InvalidPoint {
                context: group,
                message: reason.to_string(),
            },
            #[cfg(not(feature = "std"))]
            Error::MalformedPoint { group, reason: _ } => CoreError::InvalidPoint {
                context: group,
            },
            Error::Coordinate { context } => CoreError::InvalidEncoding {
                context,
                #[cfg(feature = "std")]
                message: "coordinate equals or exceeds modulus".to_string(),
            },
            Error::Random { context } => CoreError::RandomGenerationError {
                context,
                #[cfg(feature = "std")]
                message: "entropy source failed".to_string(),
            },
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.with_context(ctx)
}

// Re-export core error handling traits for convenience
pub use bnpair_api::error::ResultExt;

// Include the validation submodule
pub mod validate;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        let err = Error::Length { context: "G1", expected: 64, actual: 63 };
        match CoreError::from(err) {
            CoreError::InvalidLength { context, expected, actual } => {
                assert_eq!(context, "G1");
                assert_eq!(expected, 64);
                assert_eq!(actual, 63);
            }
            _ => panic!("Expected InvalidLength error"),
        }

        let err = Error::MalformedPoint { group: "G2", reason: "not in subgroup" };
        assert!(matches!(CoreError::from(err), CoreError::InvalidPoint { context: "G2", .. }));
    }

    #[test]
    fn test_validation_functions() {
        assert!(validate::min_length("G1", 64, 64).is_ok());
        assert!(validate::min_length("G1", 100, 64).is_ok());
        assert_eq!(
            validate::min_length("G1", 63, 64),
            Err(Error::Length { context: "G1", expected: 64, actual: 63 })
        );

        assert!(validate::length("G2", 128, 128).is_ok());
        assert!(validate::length("G2", 129, 128).is_err());

        assert!(validate::point(true, "G1", "not on curve").is_ok());
        assert_eq!(
            validate::point(false, "G2", "not in subgroup"),
            Err(Error::MalformedPoint { group: "G2", reason: "not in subgroup" })
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_malformed_point_keeps_reason() {
        let err = Error::MalformedPoint { group: "G2", reason: "not in subgroup" };
        match CoreError::from(err) {
            CoreError::InvalidPoint { context, message } => {
                assert_eq!(context, "G2");
                assert_eq!(message, "not in subgroup");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_to_core_result_sets_context() {
        let r: Result<()> = Err(Error::Coordinate { context: "fp" });
        match to_core_result(r, "GT::unmarshal") {
            Err(CoreError::InvalidEncoding { context, .. }) => assert_eq!(context, "GT::unmarshal"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
