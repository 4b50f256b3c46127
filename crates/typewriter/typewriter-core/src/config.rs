//! Core configuration for typewriter-core.

use serde::{Deserialize, Serialize};

use crate::jitter::UniformJitter;

/// Default spread (in percentage points) applied around each write keyframe.
pub const DEFAULT_JITTER_VARIANCE: f64 = 0.5;

/// Configuration for timeline compilation.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Half-width of the uniform jitter window for write-phase keyframes.
    /// Zero disables jitter.
    pub jitter_variance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            jitter_variance: DEFAULT_JITTER_VARIANCE,
        }
    }
}

impl Config {
    /// Entropy-seeded jitter source using this config's variance.
    pub fn jitter(&self) -> UniformJitter {
        UniformJitter::from_entropy(self.jitter_variance)
    }

    /// Deterministic jitter source, for reproducible output.
    pub fn seeded_jitter(&self, seed: u64) -> UniformJitter {
        UniformJitter::seeded(seed, self.jitter_variance)
    }
}
