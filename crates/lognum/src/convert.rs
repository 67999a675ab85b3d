//! Conversions into `LogNum`.
//!
//! Arithmetic methods accept `impl Into<LogNum>`, so anything listed here
//! can stand in for a value: native numbers (the log is taken), and the
//! string grammar `"<mantissa>e<exponent>"` with both parts optional —
//! `"123.4"` is a plain decimal, `"e500"` feeds the exponent in as the
//! stored log directly (magnitudes beyond native range), `"1.5e300"`
//! combines `log10(mantissa) + exponent`.

use std::str::FromStr;

use crate::error::ParseLogNumError;
use crate::value::LogNum;

impl LogNum {
    /// Strict, validating parse of the constructor string grammar.
    ///
    /// The `"e<exponent>"` form is a distinct branch, not general float
    /// parsing: the text after `'e'` becomes the stored log verbatim, so
    /// it accepts exponents no native number could round-trip.
    pub fn parse(s: &str) -> Result<Self, ParseLogNumError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseLogNumError::Empty);
        }
        match s.find('e') {
            None => {
                let value: f64 = s.parse().map_err(|_| ParseLogNumError::InvalidMantissa {
                    input: s.to_string(),
                })?;
                if value < 0.0 {
                    return Err(ParseLogNumError::NegativeValue {
                        input: s.to_string(),
                    });
                }
                Ok(Self::new(value))
            }
            Some(0) => {
                let exp: f64 = s[1..].parse().map_err(|_| ParseLogNumError::InvalidExponent {
                    input: s[1..].to_string(),
                })?;
                Ok(Self::from_log10(exp))
            }
            Some(idx) => {
                let mantissa: f64 =
                    s[..idx].parse().map_err(|_| ParseLogNumError::InvalidMantissa {
                        input: s[..idx].to_string(),
                    })?;
                if mantissa < 0.0 {
                    return Err(ParseLogNumError::NegativeValue {
                        input: s[..idx].to_string(),
                    });
                }
                let exp: f64 =
                    s[idx + 1..].parse().map_err(|_| ParseLogNumError::InvalidExponent {
                        input: s[idx + 1..].to_string(),
                    })?;
                Ok(Self::from_log10(mantissa.log10() + exp))
            }
        }
    }
}

impl FromStr for LogNum {
    type Err = ParseLogNumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Lenient conversions: the "anything convertible" contract of the
// arithmetic methods. Malformed strings become the NaN sentinel rather
// than an error, per the no-signaling policy.

impl From<f64> for LogNum {
    fn from(v: f64) -> Self {
        Self::new(v)
    }
}

impl From<f32> for LogNum {
    fn from(v: f32) -> Self {
        Self::new(f64::from(v))
    }
}

impl From<i32> for LogNum {
    fn from(v: i32) -> Self {
        Self::new(f64::from(v))
    }
}

impl From<i64> for LogNum {
    fn from(v: i64) -> Self {
        Self::new(v as f64)
    }
}

impl From<u32> for LogNum {
    fn from(v: u32) -> Self {
        Self::new(f64::from(v))
    }
}

impl From<u64> for LogNum {
    fn from(v: u64) -> Self {
        Self::new(v as f64)
    }
}

impl From<&str> for LogNum {
    fn from(s: &str) -> Self {
        Self::parse(s).unwrap_or(Self::NAN)
    }
}

impl From<String> for LogNum {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}
