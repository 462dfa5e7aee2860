//! Best-effort price field handling
//!
//! The API is inconsistent about price representation: rooms carry prices as
//! strings, cabins as integers, and older records may hold garbage. Display
//! code always wants a number, so deserialization parses whatever arrives and
//! falls back to 0 for anything non-numeric.

use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Int(i64),
    Float(f64),
    Text(String),
}

fn coerce(raw: Option<RawPrice>) -> i64 {
    match raw {
        Some(RawPrice::Int(v)) => v,
        Some(RawPrice::Float(v)) => v as i64,
        Some(RawPrice::Text(s)) => s.trim().parse::<f64>().map(|v| v as i64).unwrap_or(0),
        None => 0,
    }
}

/// Numeric on the wire (cabins): lenient parse in, plain number out
pub mod lenient {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        Ok(coerce(Option::<RawPrice>::deserialize(deserializer)?))
    }

    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(*value)
    }
}

/// Stringly-typed on the wire (rooms): lenient parse in, string out, because
/// the backend schema declares these fields as `str` and rejects numbers
pub mod lenient_string {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        Ok(coerce(Option::<RawPrice>::deserialize(deserializer)?))
    }

    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_numeric_string() {
        assert_eq!(coerce(Some(RawPrice::Text("12345".to_string()))), 12345);
    }

    #[test]
    fn test_coerce_garbage_to_zero() {
        assert_eq!(coerce(Some(RawPrice::Text("дорого".to_string()))), 0);
        assert_eq!(coerce(None), 0);
    }

    #[test]
    fn test_coerce_float() {
        assert_eq!(coerce(Some(RawPrice::Float(12500.9))), 12500);
    }
}
