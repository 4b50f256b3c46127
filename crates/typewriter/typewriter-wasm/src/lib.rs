use serde::{Deserialize, Serialize};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use typewriter_core::{Config, UniformJitter};
use typewriter_css::{generate_stylesheet_with, Defaults, PluginOptions, WordsetOptions};

/// Bumped whenever the JS-facing surface changes shape.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Settings for a [`Typewriter`] instance.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct TypewriterCfg {
    config: Config,
    defaults: Defaults,
    /// Fixed jitter seed for reproducible output; entropy when absent.
    seed: Option<u64>,
}

#[wasm_bindgen]
pub struct Typewriter {
    defaults: Defaults,
    jitter: UniformJitter,
}

#[wasm_bindgen]
impl Typewriter {
    /// Create a generator. Pass `{ config, defaults, seed }` or undefined/null for defaults.
    /// Example:
    ///   new Typewriter({ seed: 7, defaults: { caretColor: "red" } })
    #[wasm_bindgen(constructor)]
    pub fn new(cfg: JsValue) -> Result<Typewriter, JsError> {
        console_error_panic_hook::set_once();

        let cfg: TypewriterCfg = if jsvalue_is_undefined_or_null(&cfg) {
            TypewriterCfg::default()
        } else {
            swb::from_value(cfg).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        let jitter = match cfg.seed {
            Some(seed) => cfg.config.seeded_jitter(seed),
            None => cfg.config.jitter(),
        };
        Ok(Typewriter {
            defaults: cfg.defaults,
            jitter,
        })
    }

    /// Render `{ wordsets: { name: {...} } }` (or undefined/null for the example) to CSS text.
    #[wasm_bindgen(js_name = generateCss)]
    pub fn generate_css(&mut self, options: JsValue) -> Result<String, JsError> {
        let opts = parse_options(options)?;
        let sheet = generate_stylesheet_with(&opts, &self.defaults, &mut self.jitter)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(sheet.to_string())
    }

    /// Compile one wordset (unset fields take defaults) to `{ "<key>": "<content>" }`.
    #[wasm_bindgen(js_name = compileTimeline)]
    pub fn compile_timeline(
        &mut self,
        label: String,
        wordset: JsValue,
    ) -> Result<JsValue, JsError> {
        let resolved = parse_wordset(wordset)?.resolve(&label, &self.defaults);
        let timeline = resolved.wordset.compile(&label, &mut self.jitter);
        timeline
            .serialize(&swb::Serializer::json_compatible())
            .map_err(|e| JsError::new(&format!("timeline serialize error: {e}")))
    }

    /// Cycle length in seconds for one wordset (unset fields take defaults).
    #[wasm_bindgen(js_name = totalDuration)]
    pub fn total_duration(&self, wordset: JsValue) -> Result<f64, JsError> {
        let resolved = parse_wordset(wordset)?.resolve("", &self.defaults);
        Ok(resolved.wordset.total_duration())
    }
}

fn parse_options(options: JsValue) -> Result<PluginOptions, JsError> {
    if jsvalue_is_undefined_or_null(&options) {
        return Ok(PluginOptions::default());
    }
    swb::from_value(options).map_err(|e| JsError::new(&format!("options parse error: {e}")))
}

fn parse_wordset(wordset: JsValue) -> Result<WordsetOptions, JsError> {
    if jsvalue_is_undefined_or_null(&wordset) {
        return Ok(WordsetOptions::default());
    }
    swb::from_value(wordset).map_err(|e| JsError::new(&format!("wordset parse error: {e}")))
}
