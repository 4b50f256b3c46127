//! Wordset: the immutable input describing one animated label.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::arithmetic::total_duration;
use crate::coercion::{lossy_f64, lossy_i64};
use crate::compiler::compile_timeline_with;
use crate::error::WordsetError;
use crate::jitter::Jitter;
use crate::timeline::Timeline;

/// `repeat` sentinel for an endlessly looping cycle.
pub const INFINITE_REPEAT: i64 = -1;

fn default_repeat() -> i64 {
    INFINITE_REPEAT
}

/// Words plus timing. Speeds are seconds per character; pause and delay are
/// seconds. Numeric fields deserialize from numbers or numeric strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Wordset {
    /// Animation order; each entry is kept verbatim.
    pub words: Vec<String>,
    #[serde(deserialize_with = "lossy_f64")]
    pub write_speed: f64,
    /// Zero disables the erase phase for every word.
    #[serde(deserialize_with = "lossy_f64")]
    pub erase_speed: f64,
    #[serde(deserialize_with = "lossy_f64")]
    pub pause_between: f64,
    /// `-1` loops forever; otherwise the number of extra passes.
    #[serde(default = "default_repeat", deserialize_with = "lossy_i64")]
    pub repeat: i64,
    /// Start delay; not used by compilation, only passed through to adapters.
    #[serde(default, deserialize_with = "lossy_f64")]
    pub delay: f64,
}

/// How many times the cycle plays.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IterationCount {
    Infinite,
    Finite(i64),
}

impl fmt::Display for IterationCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IterationCount::Infinite => f.write_str("infinite"),
            IterationCount::Finite(n) => write!(f, "{n}"),
        }
    }
}

impl Wordset {
    pub fn new<I, S>(words: I, write_speed: f64, erase_speed: f64, pause_between: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            write_speed,
            erase_speed,
            pause_between,
            repeat: INFINITE_REPEAT,
            delay: 0.0,
        }
    }

    pub fn with_repeat(mut self, repeat: i64) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.repeat == INFINITE_REPEAT
    }

    /// Total plays of the cycle: `repeat + 1`, or infinite.
    pub fn iteration_count(&self) -> IterationCount {
        if self.is_infinite() {
            IterationCount::Infinite
        } else {
            IterationCount::Finite(self.repeat.saturating_add(1))
        }
    }

    /// Cycle length in seconds.
    pub fn total_duration(&self) -> f64 {
        total_duration(
            &self.words,
            self.write_speed,
            self.erase_speed,
            self.pause_between,
        )
    }

    /// Compile into a timeline named `label`. Does not call [`Wordset::validate`].
    pub fn compile<J: Jitter + ?Sized>(&self, label: &str, jitter: &mut J) -> Timeline {
        compile_timeline_with(
            label,
            &self.words,
            self.write_speed,
            self.erase_speed,
            self.pause_between,
            self.is_infinite(),
            jitter,
        )
    }

    /// Check the preconditions the compiler assumes.
    pub fn validate(&self) -> Result<(), WordsetError> {
        if self.words.is_empty() {
            return Err(WordsetError::EmptyWords);
        }
        if let Some(index) = self.words.iter().position(String::is_empty) {
            return Err(WordsetError::EmptyWord { index });
        }
        for (field, value) in [
            ("writeSpeed", self.write_speed),
            ("eraseSpeed", self.erase_speed),
            ("pauseBetween", self.pause_between),
            ("delay", self.delay),
        ] {
            if !value.is_finite() {
                return Err(WordsetError::NonFiniteTiming {
                    field: field.to_string(),
                });
            }
            if value < 0.0 {
                return Err(WordsetError::NegativeTiming {
                    field: field.to_string(),
                    value,
                });
            }
        }
        if self.repeat < INFINITE_REPEAT {
            return Err(WordsetError::InvalidRepeat {
                repeat: self.repeat,
            });
        }
        let total = self.total_duration();
        if total <= 0.0 {
            return Err(WordsetError::ZeroDuration { total });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jitter::NoJitter;

    fn vegetables() -> Wordset {
        Wordset::new(["corn", "carrot", "potato"], 2.0, 1.0, 3.0)
    }

    #[test]
    fn deserializes_numeric_strings() {
        let ws: Wordset = serde_json::from_str(
            r#"{"words":["corn","carrot","potato"],"writeSpeed":2,"eraseSpeed":"1","pauseBetween":"3"}"#,
        )
        .unwrap();
        assert_eq!(ws.total_duration(), 57.0);
        assert!(ws.is_infinite());
        assert_eq!(ws.delay, 0.0);
    }

    #[test]
    fn iteration_count_follows_repeat() {
        assert_eq!(vegetables().iteration_count(), IterationCount::Infinite);
        assert_eq!(vegetables().iteration_count().to_string(), "infinite");
        let once = vegetables().with_repeat(0);
        assert_eq!(once.iteration_count(), IterationCount::Finite(1));
        assert_eq!(once.iteration_count().to_string(), "1");
    }

    #[test]
    fn delay_is_carried_but_not_timed() {
        let delayed = vegetables().with_delay(2.5);
        assert_eq!(delayed.delay, 2.5);
        assert_eq!(delayed.total_duration(), vegetables().total_duration());
        assert_eq!(delayed.validate(), Ok(()));
        assert!(matches!(
            vegetables().with_delay(-1.0).validate(),
            Err(WordsetError::NegativeTiming { .. })
        ));
    }

    #[test]
    fn validate_accepts_sane_wordsets() {
        assert_eq!(vegetables().validate(), Ok(()));
        assert_eq!(Wordset::new(["a"], 0.0, 0.0, 1.0).validate(), Ok(()));
    }

    #[test]
    fn validate_reports_precondition_violations() {
        let none: [&str; 0] = [];
        assert_eq!(
            Wordset::new(none, 1.0, 1.0, 1.0).validate(),
            Err(WordsetError::EmptyWords)
        );
        assert_eq!(
            Wordset::new(["a", ""], 1.0, 1.0, 1.0).validate(),
            Err(WordsetError::EmptyWord { index: 1 })
        );
        assert!(matches!(
            Wordset::new(["a"], f64::NAN, 1.0, 1.0).validate(),
            Err(WordsetError::NonFiniteTiming { .. })
        ));
        assert!(matches!(
            Wordset::new(["a"], 1.0, -1.0, 1.0).validate(),
            Err(WordsetError::NegativeTiming { .. })
        ));
        assert_eq!(
            vegetables().with_repeat(-2).validate(),
            Err(WordsetError::InvalidRepeat { repeat: -2 })
        );
        assert_eq!(
            Wordset::new(["a"], 0.0, 0.0, 0.0).validate(),
            Err(WordsetError::ZeroDuration { total: 0.0 })
        );
    }

    #[test]
    fn compile_uses_repeat_for_the_cycle_reset() {
        let ws = Wordset::new(["ab"], 1.0, 0.0, 1.0).with_repeat(0);
        assert_eq!(ws.compile("t", &mut NoJitter).end_content(), "ab");
        let ws = ws.with_repeat(INFINITE_REPEAT);
        assert_eq!(ws.compile("t", &mut NoJitter).end_content(), "");
    }
}
