//! Timeline compiler.
//!
//! Model:
//! - A single cursor (percent into the cycle) starts at 0 and is threaded
//!   through a left fold over the words; nothing is shared between calls.
//! - Write phase: every non-zero step becomes a keyframe holding the word
//!   prefix up to that step. Positions go through the injected jitter. The
//!   last write step opens a pause plateau `start%, end%` holding the full
//!   word; the cursor moves to `end`.
//! - Erase phase (only when `erase_speed != 0`): every non-zero step becomes a
//!   keyframe holding the word with `i` characters trimmed, unjittered. The
//!   cursor moves when `i` equals the last *write* index.
//! - Finally `to` is reset to empty for infinite cycles or when erasing.

use log::{debug, trace, warn};

use crate::arithmetic::{char_len, phase_steps, total_duration};
use crate::config::Config;
use crate::jitter::Jitter;
use crate::timeline::{KeyframeKey, Timeline};

/// Timing shared by every word of one compilation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompileContext {
    pub write_speed: f64,
    pub erase_speed: f64,
    pub pause_between: f64,
    /// Normalization denominator (seconds); see [`total_duration`].
    pub total_time: f64,
}

impl CompileContext {
    pub fn new<S: AsRef<str>>(
        words: &[S],
        write_speed: f64,
        erase_speed: f64,
        pause_between: f64,
    ) -> Self {
        Self {
            write_speed,
            erase_speed,
            pause_between,
            total_time: total_duration(words, write_speed, erase_speed, pause_between),
        }
    }

    /// Length of one pause plateau, in percent of the cycle.
    #[inline]
    pub fn pause_percentage(&self) -> f64 {
        self.pause_between / self.total_time * 100.0
    }

    #[inline]
    pub fn erases(&self) -> bool {
        self.erase_speed != 0.0
    }
}

/// Keyframes produced by one word, and the cursor to hand to the next word.
#[derive(Clone, Debug, PartialEq)]
pub struct WordFrames {
    pub entries: Vec<(KeyframeKey, String)>,
    pub cursor: f64,
}

#[inline]
fn is_blank(step: f64) -> bool {
    step == 0.0 || step.is_nan()
}

/// First `n` characters of `word`.
fn prefix(word: &str, n: usize) -> &str {
    word.char_indices()
        .nth(n)
        .map_or(word, |(byte_idx, _)| &word[..byte_idx])
}

/// Compile one word starting at `cursor`.
pub fn compile_word<J: Jitter + ?Sized>(
    word: &str,
    cursor: f64,
    ctx: &CompileContext,
    jitter: &mut J,
) -> WordFrames {
    let len = char_len(word);
    let write_steps = phase_steps(word, ctx.write_speed, ctx.total_time);
    let last_write = write_steps.len() - 1;

    let mut cursor = cursor;
    let mut entries = Vec::with_capacity(write_steps.len() * 2);

    for (i, step) in write_steps.iter().copied().enumerate() {
        if is_blank(step) {
            continue;
        }
        let position = jitter.perturb(cursor + step);
        let content = prefix(word, i).to_string();
        if i == last_write {
            let end = position + ctx.pause_percentage();
            entries.push((KeyframeKey::hold(position, end), content));
            cursor = end;
        } else {
            entries.push((KeyframeKey::at(position), content));
        }
    }

    if ctx.erases() {
        let erase_steps = phase_steps(word, ctx.erase_speed, ctx.total_time);
        for (i, step) in erase_steps.into_iter().enumerate() {
            if is_blank(step) {
                continue;
            }
            let position = cursor + step;
            // Advances on the write sequence's last index; both sequences share a length.
            if i == last_write {
                cursor = position;
            }
            entries.push((
                KeyframeKey::at(position),
                prefix(word, len.saturating_sub(i)).to_string(),
            ));
        }
    }

    trace!("word '{word}' -> {} keyframes, cursor {cursor:.4}%", entries.len());
    WordFrames { entries, cursor }
}

/// Compile `words` into a timeline using the supplied jitter source.
///
/// Preconditions (not checked): the total duration of `words` is positive
/// unless `words` is empty. An empty word list yields only `from`/`to`.
pub fn compile_timeline_with<S, J>(
    label: &str,
    words: &[S],
    write_speed: f64,
    erase_speed: f64,
    pause_between: f64,
    infinite: bool,
    jitter: &mut J,
) -> Timeline
where
    S: AsRef<str>,
    J: Jitter + ?Sized,
{
    let ctx = CompileContext::new(words, write_speed, erase_speed, pause_between);
    if !words.is_empty() && ctx.total_time <= 0.0 {
        warn!(
            "timeline '{label}': total duration is {}s; keyframe positions are undefined",
            ctx.total_time
        );
    }

    let last_word: &str = words.last().map(|w| w.as_ref()).unwrap_or("");
    let (mut timeline, cursor) = words.iter().fold(
        (Timeline::new(label, last_word), 0.0),
        |(mut timeline, cursor), word| {
            let frames = compile_word(word.as_ref(), cursor, &ctx, &mut *jitter);
            timeline.extend(frames.entries);
            (timeline, frames.cursor)
        },
    );

    if infinite || ctx.erases() {
        timeline.insert(KeyframeKey::To, String::new());
    }

    debug!(
        "timeline '{label}': {} words, {} keyframes, {}s cycle, cursor ended at {cursor:.4}%",
        words.len(),
        timeline.len(),
        ctx.total_time
    );
    timeline
}

/// Compile `words` with entropy-seeded jitter of the default variance.
pub fn compile_timeline<S: AsRef<str>>(
    label: &str,
    words: &[S],
    write_speed: f64,
    erase_speed: f64,
    pause_between: f64,
    infinite: bool,
) -> Timeline {
    let mut jitter = Config::default().jitter();
    compile_timeline_with(
        label,
        words,
        write_speed,
        erase_speed,
        pause_between,
        infinite,
        &mut jitter,
    )
}
