//! Error type definitions for pairing operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for pairing operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input shorter or longer than the fixed encoding length
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Decoded coordinates are not a valid group element
    InvalidPoint {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// An encoded coordinate is not a canonical field element
    InvalidEncoding {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Random generation error
    RandomGenerationError {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for pairing operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its kind and message
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            #[cfg(feature = "std")]
            Self::InvalidPoint { message, .. } => Self::InvalidPoint { context, message },
            #[cfg(not(feature = "std"))]
            Self::InvalidPoint { .. } => Self::InvalidPoint { context },
            #[cfg(feature = "std")]
            Self::InvalidEncoding { message, .. } => Self::InvalidEncoding { context, message },
            #[cfg(not(feature = "std"))]
            Self::InvalidEncoding { .. } => Self::InvalidEncoding { context },
            #[cfg(feature = "std")]
            Self::RandomGenerationError { message, .. } => {
                Self::RandomGenerationError { context, message }
            }
            #[cfg(not(feature = "std"))]
            Self::RandomGenerationError { .. } => Self::RandomGenerationError { context },
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})",
                    context, expected, actual)
            },
            #[cfg(feature = "std")]
            Self::InvalidPoint { context, message } => {
                write!(f, "Invalid point: {}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::InvalidPoint { context } => {
                write!(f, "Invalid point: {}", context)
            },
            #[cfg(feature = "std")]
            Self::InvalidEncoding { context, message } => {
                write!(f, "Invalid encoding: {}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::InvalidEncoding { context } => {
                write!(f, "Invalid encoding: {}", context)
            },
            #[cfg(feature = "std")]
            Self::RandomGenerationError { context, message } => {
                write!(f, "Random generation error: {}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::RandomGenerationError { context } => {
                write!(f, "Random generation error: {}", context)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_context_keeps_kind() {
        let err = Error::InvalidLength { context: "inner", expected: 64, actual: 63 };
        match err.with_context("G1::unmarshal") {
            Error::InvalidLength { context, expected, actual } => {
                assert_eq!(context, "G1::unmarshal");
                assert_eq!(expected, 64);
                assert_eq!(actual, 63);
            }
            _ => panic!("Expected InvalidLength error"),
        }
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_display_includes_message() {
        let err = Error::InvalidPoint {
            context: "G2::unmarshal",
            message: "point is not in the prime-order subgroup".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("G2::unmarshal"));
        assert!(text.contains("subgroup"));
    }
}
