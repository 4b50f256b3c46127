//! Error types for wordset validation and keyframe key parsing.

/// Reasons a [`crate::Wordset`] cannot produce a meaningful timeline.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum WordsetError {
    /// No words to animate
    #[error("Wordset has no words")]
    EmptyWords,

    /// A word with no characters
    #[error("Word at index {index} is empty")]
    EmptyWord { index: usize },

    /// NaN or infinite timing
    #[error("Timing field '{field}' is not a finite number")]
    NonFiniteTiming { field: String },

    /// Negative timing
    #[error("Timing field '{field}' must be non-negative, got {value}")]
    NegativeTiming { field: String, value: f64 },

    /// Repeat below the infinite sentinel
    #[error("Repeat must be -1 (infinite) or >= 0, got {repeat}")]
    InvalidRepeat { repeat: i64 },

    /// Nothing to normalize against
    #[error("Total duration must be > 0 seconds, got {total}")]
    ZeroDuration { total: f64 },
}

/// A keyframe key string that does not match `from`, `to`, `p%` or `p1%, p2%`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid keyframe key: '{key}'")]
pub struct KeyframeKeyError {
    pub key: String,
}
