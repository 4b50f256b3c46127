//! Error types for the stylesheet adapter

use typewriter_core::WordsetError;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum CssError {
    /// Options document is not valid JSON for [`crate::PluginOptions`]
    #[error("Options parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A resolved wordset violates the compiler's preconditions
    #[error("Wordset '{name}' is invalid: {source}")]
    InvalidWordset {
        name: String,
        #[source]
        source: WordsetError,
    },
}
