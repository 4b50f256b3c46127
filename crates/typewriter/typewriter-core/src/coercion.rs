//! Lossy numeric coercion for timing fields.
//!
//! Hosts hand over timings as JSON numbers or numeric strings (`"3"`, `" 0.5 "`).
//! Conversion never fails: unparsable text becomes NaN, an empty string is zero,
//! booleans are 1/0. Validation is a separate step ([`crate::Wordset::validate`]).

use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberLike {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl NumberLike {
    fn to_f64(&self) -> f64 {
        match self {
            NumberLike::Number(n) => *n,
            NumberLike::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            NumberLike::Text(s) => to_number(s),
        }
    }
}

/// Convert text to a number the lossy way.
pub fn to_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Truncate a lossy number to an integer (NaN becomes 0, infinities saturate).
#[inline]
pub fn to_integer(value: f64) -> i64 {
    value.trunc() as i64
}

pub fn lossy_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    NumberLike::deserialize(deserializer).map(|n| n.to_f64())
}

pub fn lossy_opt_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Option::<NumberLike>::deserialize(deserializer).map(|n| n.map(|n| n.to_f64()))
}

pub fn lossy_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    lossy_f64(deserializer).map(to_integer)
}

pub fn lossy_opt_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    lossy_opt_f64(deserializer).map(|n| n.map(to_integer))
}
