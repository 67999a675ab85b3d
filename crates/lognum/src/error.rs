//! Error types for strict parsing.

use thiserror::Error;

/// Result type alias for the strict parser
pub type LogNumResult<T> = Result<T, ParseLogNumError>;

/// Typed errors for [`LogNum::parse`](crate::LogNum::parse).
///
/// Parsing is the only fallible surface of the crate: arithmetic never
/// signals, it propagates NaN and Infinity as sentinels. Callers that must
/// treat malformed input as an error parse strictly; the lenient `From`
/// conversions map these errors to [`LogNum::NAN`](crate::LogNum::NAN).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseLogNumError {
    #[error("empty input")]
    Empty,

    #[error("failed to parse '{input}' as a decimal mantissa")]
    InvalidMantissa { input: String },

    #[error("failed to parse '{input}' as a decimal exponent")]
    InvalidExponent { input: String },

    #[error("negative value '{input}' has no logarithmic representation")]
    NegativeValue { input: String },
}
