//! Plugin options: user-facing wordset settings and their defaults.
//!
//! Every field is optional; unset fields fall back to [`Defaults`]. Numeric
//! fields accept numbers or numeric strings.

use indexmap::IndexMap;
use log::warn;
use serde::{Deserialize, Serialize};
use typewriter_core::coercion::{lossy_opt_f64, lossy_opt_i64};
use typewriter_core::Wordset;

use crate::error::CssError;

/// Name of the wordset generated when no options are supplied.
pub const DEFAULT_WORDSET_NAME: &str = "example";

/// Values used for any option left unset.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Defaults {
    pub words: Vec<String>,
    pub delay: f64,
    pub repeat: i64,
    pub write_speed: f64,
    pub erase_speed: f64,
    pub pause_between: f64,
    pub caret_color: String,
    pub caret_width: String,
    pub caret_spacing: String,
    pub blink_speed: f64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            words: vec!["apples".into(), "oranges".into(), "bananas".into()],
            delay: 1.0,
            repeat: typewriter_core::INFINITE_REPEAT,
            write_speed: 0.3,
            erase_speed: 0.1,
            pause_between: 4.0,
            caret_color: "currentColor".into(),
            caret_width: "1px".into(),
            caret_spacing: "0.1em".into(),
            blink_speed: 0.8,
        }
    }
}

/// One wordset as written by the user.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WordsetOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lossy_opt_f64", skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    #[serde(default, deserialize_with = "lossy_opt_i64", skip_serializing_if = "Option::is_none")]
    pub repeat: Option<i64>,
    #[serde(default, deserialize_with = "lossy_opt_f64", skip_serializing_if = "Option::is_none")]
    pub write_speed: Option<f64>,
    #[serde(default, deserialize_with = "lossy_opt_f64", skip_serializing_if = "Option::is_none")]
    pub erase_speed: Option<f64>,
    #[serde(default, deserialize_with = "lossy_opt_f64", skip_serializing_if = "Option::is_none")]
    pub pause_between: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caret_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caret_width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caret_spacing: Option<String>,
    #[serde(default, deserialize_with = "lossy_opt_f64", skip_serializing_if = "Option::is_none")]
    pub blink_speed: Option<f64>,
}

/// Caret appearance; only the stylesheet uses it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaretStyle {
    pub color: String,
    pub width: String,
    pub spacing: String,
    /// Seconds per blink cycle.
    pub blink_speed: f64,
}

/// A named wordset with every default applied.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedWordset {
    pub name: String,
    pub wordset: Wordset,
    pub caret: CaretStyle,
}

impl WordsetOptions {
    pub fn resolve(&self, name: &str, defaults: &Defaults) -> ResolvedWordset {
        let wordset = Wordset {
            words: self.words.clone().unwrap_or_else(|| defaults.words.clone()),
            write_speed: self.write_speed.unwrap_or(defaults.write_speed),
            erase_speed: self.erase_speed.unwrap_or(defaults.erase_speed),
            pause_between: self.pause_between.unwrap_or(defaults.pause_between),
            repeat: self.repeat.unwrap_or(defaults.repeat),
            delay: self.delay.unwrap_or(defaults.delay),
        };
        let caret = CaretStyle {
            color: self
                .caret_color
                .clone()
                .unwrap_or_else(|| defaults.caret_color.clone()),
            width: self
                .caret_width
                .clone()
                .unwrap_or_else(|| defaults.caret_width.clone()),
            spacing: self
                .caret_spacing
                .clone()
                .unwrap_or_else(|| defaults.caret_spacing.clone()),
            blink_speed: self.blink_speed.unwrap_or(defaults.blink_speed),
        };
        ResolvedWordset {
            name: name.to_string(),
            wordset,
            caret,
        }
    }
}

/// Top-level options document: `{ "wordsets": { "<name>": { ... } } }`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PluginOptions {
    /// `None` means "use the built-in example wordset"; an empty map emits nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wordsets: Option<IndexMap<String, WordsetOptions>>,
}

impl PluginOptions {
    /// Parse an options document. Blank input and `null` mean "no options".
    pub fn from_json(text: &str) -> Result<Self, CssError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        let parsed: Option<Self> = serde_json::from_str(trimmed)?;
        Ok(parsed.unwrap_or_default())
    }

    pub fn with_wordset(mut self, name: impl Into<String>, options: WordsetOptions) -> Self {
        self.wordsets
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), options);
        self
    }

    /// Apply defaults to every wordset, keeping declaration order.
    pub fn resolve(&self, defaults: &Defaults) -> Vec<ResolvedWordset> {
        match &self.wordsets {
            Some(wordsets) => wordsets
                .iter()
                .map(|(name, opts)| opts.resolve(name, defaults))
                .collect(),
            None => {
                warn!("no wordsets configured; using the '{DEFAULT_WORDSET_NAME}' defaults");
                vec![WordsetOptions::default().resolve(DEFAULT_WORDSET_NAME, defaults)]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_options_resolve_to_example() {
        for raw in ["", "  ", "null", "{}"] {
            let opts = PluginOptions::from_json(raw).unwrap();
            let resolved = opts.resolve(&Defaults::default());
            assert_eq!(resolved.len(), 1);
            assert_eq!(resolved[0].name, "example");
            assert_eq!(resolved[0].wordset.words, vec!["apples", "oranges", "bananas"]);
            assert_eq!(resolved[0].wordset.total_duration(), 20.0);
            assert_eq!(resolved[0].caret.color, "currentColor");
        }
    }

    #[test]
    fn empty_wordset_map_emits_nothing() {
        let opts = PluginOptions::from_json(r#"{"wordsets": {}}"#).unwrap();
        assert!(opts.resolve(&Defaults::default()).is_empty());
    }

    #[test]
    fn user_values_override_defaults_in_order() {
        let opts = PluginOptions::from_json(
            r#"{"wordsets": {
                "zeta": {"words": ["z"], "writeSpeed": "2", "caretColor": "red"},
                "alpha": {"repeat": "3", "blinkSpeed": 1.5}
            }}"#,
        )
        .unwrap();
        let resolved = opts.resolve(&Defaults::default());
        let names: Vec<&str> = resolved.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);

        assert_eq!(resolved[0].wordset.words, vec!["z"]);
        assert_eq!(resolved[0].wordset.write_speed, 2.0);
        assert_eq!(resolved[0].wordset.erase_speed, 0.1);
        assert_eq!(resolved[0].caret.color, "red");

        assert_eq!(resolved[1].wordset.repeat, 3);
        assert_eq!(resolved[1].caret.blink_speed, 1.5);
        assert_eq!(resolved[1].caret.width, "1px");
    }

    #[test]
    fn builder_matches_parsed_options() {
        let built = PluginOptions::default().with_wordset(
            "a",
            WordsetOptions {
                words: Some(vec!["x".into()]),
                ..WordsetOptions::default()
            },
        );
        let parsed = PluginOptions::from_json(r#"{"wordsets": {"a": {"words": ["x"]}}}"#).unwrap();
        assert_eq!(built, parsed);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = PluginOptions::from_json("{wordsets").unwrap_err();
        assert!(matches!(err, CssError::Parse(_)));
    }
}
