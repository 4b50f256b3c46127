//! Timeline: the compiled position-key -> content-snapshot mapping.
//!
//! Keys keep their first insertion position; re-inserting a key replaces its
//! content (last-write-wins). `from` and `to` are always present and always
//! first.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::arithmetic::round_percent;
use crate::error::KeyframeKeyError;

/// A cycle position rounded to hundredths of a percent, clamped to `[0, 100]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Percent(i64);

impl Percent {
    pub const ZERO: Percent = Percent(0);
    pub const FULL: Percent = Percent(10_000);

    /// Clamp then round to 2 decimals. NaN maps to zero.
    pub fn from_f64(value: f64) -> Self {
        let clamped = value.clamp(0.0, 100.0);
        Percent((round_percent(clamped) * 100.0).round() as i64)
    }

    #[inline]
    pub fn hundredths(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Position key of a keyframe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyframeKey {
    /// Start of the cycle (0%).
    From,
    /// End of the cycle (100%).
    To,
    /// A single position, rendered `p%`.
    At(Percent),
    /// A held range (pause plateau), rendered `p1%, p2%`.
    Hold(Percent, Percent),
}

impl KeyframeKey {
    pub fn at(position: f64) -> Self {
        KeyframeKey::At(Percent::from_f64(position))
    }

    pub fn hold(start: f64, end: f64) -> Self {
        KeyframeKey::Hold(Percent::from_f64(start), Percent::from_f64(end))
    }

    #[inline]
    pub fn is_hold(&self) -> bool {
        matches!(self, KeyframeKey::Hold(..))
    }
}

impl fmt::Display for KeyframeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyframeKey::From => f.write_str("from"),
            KeyframeKey::To => f.write_str("to"),
            KeyframeKey::At(p) => write!(f, "{p}%"),
            KeyframeKey::Hold(a, b) => write!(f, "{a}%, {b}%"),
        }
    }
}

fn parse_percent(raw: &str, key: &str) -> Result<Percent, KeyframeKeyError> {
    let invalid = || KeyframeKeyError {
        key: key.to_string(),
    };
    let number = raw.trim().strip_suffix('%').ok_or_else(invalid)?;
    let value: f64 = number.trim().parse().map_err(|_| invalid())?;
    if !(0.0..=100.0).contains(&value) {
        return Err(invalid());
    }
    Ok(Percent::from_f64(value))
}

impl FromStr for KeyframeKey {
    type Err = KeyframeKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "from" => Ok(KeyframeKey::From),
            "to" => Ok(KeyframeKey::To),
            other => match other.split_once(',') {
                Some((a, b)) => Ok(KeyframeKey::Hold(
                    parse_percent(a, s)?,
                    parse_percent(b, s)?,
                )),
                None => parse_percent(other, s).map(KeyframeKey::At),
            },
        }
    }
}

/// Count of single-position and plateau keys; stable across jittered recompiles.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TimelineShape {
    pub points: usize,
    pub holds: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    label: String,
    frames: IndexMap<KeyframeKey, String>,
}

impl Timeline {
    /// Fresh timeline: `from` is empty, `to` holds `last_word`.
    pub fn new(label: impl Into<String>, last_word: &str) -> Self {
        let mut frames = IndexMap::new();
        frames.insert(KeyframeKey::From, String::new());
        frames.insert(KeyframeKey::To, last_word.to_string());
        Self {
            label: label.into(),
            frames,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Insert or overwrite; returns the replaced content if the key existed.
    pub fn insert(&mut self, key: KeyframeKey, content: impl Into<String>) -> Option<String> {
        self.frames.insert(key, content.into())
    }

    pub fn get(&self, key: &KeyframeKey) -> Option<&str> {
        self.frames.get(key).map(String::as_str)
    }

    /// Content at 0%.
    pub fn start_content(&self) -> &str {
        self.get(&KeyframeKey::From).unwrap_or_default()
    }

    /// Content at 100%.
    pub fn end_content(&self) -> &str {
        self.get(&KeyframeKey::To).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&KeyframeKey, &str)> {
        self.frames.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &KeyframeKey> {
        self.frames.keys()
    }

    /// Number of keyframes, including `from` and `to`.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn shape(&self) -> TimelineShape {
        self.frames
            .keys()
            .fold(TimelineShape::default(), |mut shape, key| {
                match key {
                    KeyframeKey::At(_) => shape.points += 1,
                    KeyframeKey::Hold(..) => shape.holds += 1,
                    KeyframeKey::From | KeyframeKey::To => {}
                }
                shape
            })
    }

    /// Export as `{ "<key>": "<content>", ... }` in timeline order.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl Extend<(KeyframeKey, String)> for Timeline {
    fn extend<T: IntoIterator<Item = (KeyframeKey, String)>>(&mut self, iter: T) {
        for (key, content) in iter {
            self.frames.insert(key, content);
        }
    }
}

impl Serialize for Timeline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.frames.len()))?;
        for (key, content) in &self.frames {
            map.serialize_entry(&key.to_string(), content)?;
        }
        map.end()
    }
}
