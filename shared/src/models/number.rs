//! Lenient numeric input
//!
//! Numbers reach the API as query strings, JSON numbers or JSON strings
//! holding a number. All of them go through [`parse_decimal`], which takes
//! plain decimals (`12.50`) and scientific notation (`1e2`).

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// Parse a decimal number, allowing surrounding whitespace and an exponent
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

/// Parse a whole number; `3.0` and `3e0` count, `3.5` does not
pub fn parse_integer(raw: &str) -> Option<i64> {
    if let Ok(n) = raw.trim().parse::<i64>() {
        return Some(n);
    }
    parse_decimal(raw)
        .filter(|d| d.fract().is_zero())
        .and_then(|d| d.to_i64())
}

/// A JSON number, or a string that should hold one
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(serde_json::Number),
    Text(String),
}

impl RawNumber {
    fn into_text(self) -> String {
        match self {
            RawNumber::Number(n) => n.to_string(),
            RawNumber::Text(s) => s,
        }
    }
}

/// `deserialize_with` for `Option<Decimal>` fields
pub fn de_decimal<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Decimal>, D::Error> {
    match Option::<RawNumber>::deserialize(d)? {
        None => Ok(None),
        Some(raw) => {
            let text = raw.into_text();
            parse_decimal(&text)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("expected a number, got {text:?}")))
        }
    }
}

/// `deserialize_with` for `Option<i64>` fields
pub fn de_i64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    match Option::<RawNumber>::deserialize(d)? {
        None => Ok(None),
        Some(raw) => {
            let text = raw.into_text();
            parse_integer(&text)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("expected an integer, got {text:?}")))
        }
    }
}

/// `deserialize_with` for `Option<i32>` fields
pub fn de_i32<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i32>, D::Error> {
    match de_i64(d)? {
        None => Ok(None),
        Some(n) => i32::try_from(n)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("integer out of range: {n}"))),
    }
}
