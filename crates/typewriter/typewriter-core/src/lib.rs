//! Typewriter Core (host-agnostic)
//!
//! Compiles a [`Wordset`] (ordered words plus write/erase/pause timing) into a
//! percentage-keyed [`Timeline`] describing one full "typing" animation cycle.
//!
//! Two layers, evaluated leaf-first:
//! - [`arithmetic`]: total cycle duration and per-phase step percentages.
//! - [`compiler`]: folds the words into keyframes, pause plateaus and the
//!   end-of-cycle reset, with injectable [`jitter`].
//!
//! Escaping and stylesheet syntax belong to host adapters; the core keeps every
//! character it is given.

pub mod arithmetic;
pub mod coercion;
pub mod compiler;
pub mod config;
pub mod error;
pub mod jitter;
pub mod timeline;
pub mod wordset;

// Re-exports for consumers (adapters)
pub use arithmetic::{phase_steps, round_percent, total_duration};
pub use compiler::{
    compile_timeline, compile_timeline_with, compile_word, CompileContext, WordFrames,
};
pub use config::Config;
pub use error::{KeyframeKeyError, WordsetError};
pub use jitter::{Jitter, NoJitter, UniformJitter};
pub use timeline::{KeyframeKey, Percent, Timeline, TimelineShape};
pub use wordset::{IterationCount, Wordset, INFINITE_REPEAT};
