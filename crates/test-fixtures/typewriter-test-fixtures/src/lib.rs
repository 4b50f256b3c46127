use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    wordsets: HashMap<String, String>,
    options: HashMap<String, OptionsEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OptionsEntry {
    Path(String),
    Detailed {
        path: String,
        #[serde(default)]
        expected: Option<String>,
    },
}

impl OptionsEntry {
    fn as_path(&self) -> &str {
        match self {
            OptionsEntry::Path(path) => path,
            OptionsEntry::Detailed { path, .. } => path,
        }
    }

    fn expected(&self) -> Option<&str> {
        match self {
            OptionsEntry::Path(_) => None,
            OptionsEntry::Detailed { expected, .. } => expected.as_deref(),
        }
    }
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

/// Bare wordset documents (`{ "words": [...], "writeSpeed": ... }`).
pub mod wordsets {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.wordsets.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.wordsets, "wordset", name)?;
        read_to_string(rel)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let rel = lookup(&MANIFEST.wordsets, "wordset", name)?;
        super::load_json(rel)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let rel = lookup(&MANIFEST.wordsets, "wordset", name)?;
        Ok(resolve_path(rel))
    }
}

/// Plugin option documents (`{ "wordsets": { "<name>": {...} } }`), optionally
/// paired with a file of CSS fragments the rendered stylesheet must contain.
pub mod options {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.options.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        let entry = lookup(&MANIFEST.options, "options", name)?;
        read_to_string(entry.as_path())
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let entry = lookup(&MANIFEST.options, "options", name)?;
        super::load_json(entry.as_path())
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let entry = lookup(&MANIFEST.options, "options", name)?;
        Ok(resolve_path(entry.as_path()))
    }

    /// Expected CSS fragments, one per `---`-separated block.
    pub fn expected_fragments(name: &str) -> Result<Vec<String>> {
        let entry = lookup(&MANIFEST.options, "options", name)?;
        match entry.expected() {
            Some(rel) => {
                let text = read_to_string(rel)?;
                Ok(text
                    .split("\n---\n")
                    .map(|block| block.trim().to_string())
                    .filter(|block| !block.is_empty())
                    .collect())
            }
            None => Ok(Vec::new()),
        }
    }
}
