//! Minimal stylesheet model and text rendering.
//!
//! Output layout: 4-space indentation per nesting level, `;` between
//! declarations and none after the last one.

use std::fmt;

use typewriter_core::Timeline;

use crate::escape::{escape_identifier, escape_string};
use crate::options::{CaretStyle, ResolvedWordset};

const INDENT: &str = "    ";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keyframes {
    pub name: String,
    pub frames: Vec<Rule>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Keyframes(Keyframes),
    Rule(Rule),
}

impl From<Keyframes> for Block {
    fn from(k: Keyframes) -> Self {
        Block::Keyframes(k)
    }
}

impl From<Rule> for Block {
    fn from(r: Rule) -> Self {
        Block::Rule(r)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub blocks: Vec<Block>,
}

impl Stylesheet {
    pub fn push(&mut self, block: impl Into<Block>) {
        self.blocks.push(block.into());
    }

    pub fn keyframes(&self, name: &str) -> Option<&Keyframes> {
        self.blocks.iter().find_map(|b| match b {
            Block::Keyframes(k) if k.name == name => Some(k),
            _ => None,
        })
    }

    pub fn rule(&self, selector: &str) -> Option<&Rule> {
        self.blocks.iter().find_map(|b| match b {
            Block::Rule(r) if r.selector == selector => Some(r),
            _ => None,
        })
    }
}

fn write_rule(f: &mut fmt::Formatter<'_>, rule: &Rule, depth: usize) -> fmt::Result {
    let pad = INDENT.repeat(depth);
    writeln!(f, "{pad}{} {{", rule.selector)?;
    let last = rule.declarations.len().saturating_sub(1);
    for (i, decl) in rule.declarations.iter().enumerate() {
        let sep = if i == last { "" } else { ";" };
        writeln!(f, "{pad}{INDENT}{}: {}{sep}", decl.property, decl.value)?;
    }
    writeln!(f, "{pad}}}")
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Rule(rule) => write_rule(f, rule, 0),
            Block::Keyframes(k) => {
                writeln!(f, "@keyframes {} {{", k.name)?;
                for frame in &k.frames {
                    write_rule(f, frame, 1)?;
                }
                writeln!(f, "}}")
            }
        }
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{block}")?;
        }
        Ok(())
    }
}

pub fn blink_caret_name(name: &str) -> String {
    format!("blink-caret-{}", escape_identifier(name))
}

pub fn write_name(name: &str) -> String {
    format!("write-{}", escape_identifier(name))
}

pub fn utility_selector(name: &str) -> String {
    format!(".{}::after", escape_identifier(&format!("type-{name}")))
}

/// `from, to` transparent, `50%` caret color.
pub fn blink_caret_keyframes(name: &str, caret: &CaretStyle) -> Keyframes {
    Keyframes {
        name: blink_caret_name(name),
        frames: vec![
            Rule {
                selector: "from, to".into(),
                declarations: vec![Declaration::new("border-color", "transparent")],
            },
            Rule {
                selector: "50%".into(),
                declarations: vec![Declaration::new("border-color", caret.color.clone())],
            },
        ],
    }
}

/// One frame per timeline entry, in timeline order.
pub fn write_keyframes(name: &str, timeline: &Timeline) -> Keyframes {
    let frames = timeline
        .iter()
        .map(|(key, content)| Rule {
            selector: key.to_string(),
            declarations: vec![Declaration::new(
                "content",
                format!("\"{}\"", escape_string(content)),
            )],
        })
        .collect();
    Keyframes {
        name: write_name(name),
        frames,
    }
}

/// The `.type-<name>::after` rule running both animations.
pub fn caret_utility(ws: &ResolvedWordset) -> Rule {
    let caret = &ws.caret;
    let animation = format!(
        "{} {}s infinite, {} {}s {}s {} forwards",
        blink_caret_name(&ws.name),
        caret.blink_speed,
        write_name(&ws.name),
        ws.wordset.total_duration(),
        ws.wordset.delay,
        ws.wordset.iteration_count(),
    );
    Rule {
        selector: utility_selector(&ws.name),
        declarations: vec![
            Declaration::new("content", "\"\""),
            Declaration::new("border-right", format!("{} solid {}", caret.width, caret.color)),
            Declaration::new("padding-right", caret.spacing.clone()),
            Declaration::new("animation", animation),
            Declaration::new("transition", "border-color 50ms cubic-bezier(0.4, 0, 0.2, 1)"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Defaults, WordsetOptions};
    use typewriter_core::{compile_timeline_with, NoJitter};

    #[test]
    fn rule_layout_has_no_trailing_semicolon() {
        let rule = Rule {
            selector: ".x".into(),
            declarations: vec![Declaration::new("a", "1"), Declaration::new("b", "2")],
        };
        assert_eq!(Block::from(rule).to_string(), ".x {\n    a: 1;\n    b: 2\n}\n");
    }

    #[test]
    fn caret_keyframes_layout() {
        let caret = WordsetOptions::default()
            .resolve("example", &Defaults::default())
            .caret;
        let text = Block::from(blink_caret_keyframes("example", &caret)).to_string();
        assert_eq!(
            text,
            "@keyframes blink-caret-example {\n    from, to {\n        border-color: transparent\n    }\n    50% {\n        border-color: currentColor\n    }\n}\n"
        );
    }

    #[test]
    fn write_keyframes_escape_content_and_name() {
        let tl = compile_timeline_with("1x", &["a\"b"], 1.0, 0.0, 1.0, false, &mut NoJitter);
        let k = write_keyframes("1x", &tl);
        assert_eq!(k.name, "write-\\31x");
        let selectors: Vec<&str> = k.frames.iter().map(|r| r.selector.as_str()).collect();
        assert_eq!(selectors, vec!["from", "to", "25%", "50%", "75%, 100%"]);
        assert_eq!(k.frames[1].declarations[0].value, "\"a\\\"b\"");
        assert_eq!(k.frames[0].declarations[0].value, "\"\"");
    }

    #[test]
    fn utility_animation_shorthand() {
        let ws = WordsetOptions {
            repeat: Some(0),
            delay: Some(2.5),
            ..WordsetOptions::default()
        }
        .resolve("hero", &Defaults::default());
        let rule = caret_utility(&ws);
        assert_eq!(rule.selector, ".type-hero::after");
        assert_eq!(
            rule.declarations[3].value,
            "blink-caret-hero 0.8s infinite, write-hero 20s 2.5s 1 forwards"
        );
    }
}
