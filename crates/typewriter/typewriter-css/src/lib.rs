//! typewriter-css: turns wordset options into a stylesheet.
//!
//! For every wordset this emits a caret-blink `@keyframes`, a `write-<name>`
//! `@keyframes` compiled by `typewriter-core`, and a `.type-<name>::after`
//! utility rule wiring both animations together.

pub mod error;
pub mod escape;
pub mod options;
pub mod render;

use log::debug;
use typewriter_core::{Config, Jitter};

pub use error::CssError;
pub use escape::{escape_identifier, escape_string};
pub use options::{CaretStyle, Defaults, PluginOptions, ResolvedWordset, WordsetOptions};
pub use render::{Block, Declaration, Keyframes, Rule, Stylesheet};

/// Generate the stylesheet with entropy-seeded jitter.
pub fn generate_stylesheet(options: &PluginOptions) -> Result<Stylesheet, CssError> {
    let mut jitter = Config::default().jitter();
    generate_stylesheet_with(options, &Defaults::default(), &mut jitter)
}

/// Generate the stylesheet with explicit defaults and jitter source.
///
/// Order: all caret keyframes, then all write keyframes, then all utility rules,
/// each group following the option map order.
pub fn generate_stylesheet_with<J: Jitter + ?Sized>(
    options: &PluginOptions,
    defaults: &Defaults,
    jitter: &mut J,
) -> Result<Stylesheet, CssError> {
    let resolved = options.resolve(defaults);
    for ws in &resolved {
        ws.wordset
            .validate()
            .map_err(|source| CssError::InvalidWordset {
                name: ws.name.clone(),
                source,
            })?;
    }

    let mut sheet = Stylesheet::default();
    for ws in &resolved {
        sheet.push(render::blink_caret_keyframes(&ws.name, &ws.caret));
    }
    for ws in &resolved {
        let timeline = ws.wordset.compile(&ws.name, &mut *jitter);
        debug!(
            "wordset '{}': {} keyframes over {}s",
            ws.name,
            timeline.len(),
            ws.wordset.total_duration()
        );
        sheet.push(render::write_keyframes(&ws.name, &timeline));
    }
    for ws in &resolved {
        sheet.push(render::caret_utility(ws));
    }
    Ok(sheet)
}

/// Parse JSON options and render them to CSS text.
pub fn generate_css(options_json: &str) -> Result<String, CssError> {
    let options = PluginOptions::from_json(options_json)?;
    generate_stylesheet(&options).map(|sheet| sheet.to_string())
}
