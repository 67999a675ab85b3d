//! Serde support for `LogNum`.
//!
//! Serialization writes the canonical `"<mantissa>e<exponent>"` string:
//! the string form survives magnitudes no native number could hold, the
//! same reason arbitrary-precision decimals serialize as strings.
//! Deserialization accepts that string back, or a plain number.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::LogNum;

impl Serialize for LogNum {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct LogNumVisitor;

impl Visitor<'_> for LogNumVisitor {
    type Value = LogNum;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a number or a '<mantissa>e<exponent>' string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        // lenient: malformed input becomes the NaN sentinel, not an error
        Ok(LogNum::from(v))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(LogNum::new(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(LogNum::from(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(LogNum::from(v))
    }
}

impl<'de> Deserialize<'de> for LogNum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LogNumVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_canonical_string() {
        let x = LogNum::from("1e50");
        assert_eq!(serde_json::to_string(&x).unwrap(), "\"1e50\"");
        assert_eq!(serde_json::to_string(&LogNum::ZERO).unwrap(), "\"0e0\"");
    }

    #[test]
    fn test_round_trip() {
        let x = LogNum::from("2.5e400");
        let json = serde_json::to_string(&x).unwrap();
        let back: LogNum = serde_json::from_str(&json).unwrap();
        assert!((back.log10() - x.log10()).abs() < 1e-9);
    }

    #[test]
    fn test_deserialize_number() {
        let x: LogNum = serde_json::from_str("1000").unwrap();
        assert_eq!(x.log10(), 3.0);
        let y: LogNum = serde_json::from_str("2.5").unwrap();
        assert!((y.log10() - 2.5f64.log10()).abs() < 1e-12);
    }

    #[test]
    fn test_deserialize_malformed_string() {
        let x: LogNum = serde_json::from_str("\"bogus\"").unwrap();
        assert!(x.is_nan());
    }
}
