//! Timeline arithmetic: pure functions, no state.
//!
//! All lengths are counted in `char`s (raw scalar values), never bytes or
//! grapheme clusters.

/// Number of characters in `word`.
#[inline]
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// Total cycle duration in seconds.
///
/// Sum over all words of `(write_speed + erase_speed) * len(word) + pause_between`.
/// An empty word list yields `0.0`. The result is the normalization
/// denominator for every percentage computed by [`phase_steps`].
pub fn total_duration<S: AsRef<str>>(
    words: &[S],
    write_speed: f64,
    erase_speed: f64,
    pause_between: f64,
) -> f64 {
    words.iter().fold(0.0, |total, word| {
        total + ((write_speed + erase_speed) * char_len(word.as_ref()) as f64 + pause_between)
    })
}

/// Evenly spaced step percentages for one phase (write or erase) of `word`.
///
/// Returns `len(word) + 1` values interpolated from `0` to
/// `phase_speed * len(word) / total_time * 100`, both inclusive. The k-th value
/// marks the k-th character boundary.
///
/// Precondition: `total_time > 0`. A zero total yields NaN or infinite steps.
pub fn phase_steps(word: &str, phase_speed: f64, total_time: f64) -> Vec<f64> {
    let len = char_len(word);
    if len == 0 {
        return vec![0.0];
    }
    let phase_time = phase_speed * len as f64;
    let phase_percentage = phase_time / total_time * 100.0;
    (0..=len)
        .map(|k| phase_percentage * (k as f64 / len as f64))
        .collect()
}

/// Round to 2 decimal places.
#[inline]
pub fn round_percent(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
