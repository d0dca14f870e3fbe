use wasm_bindgen::prelude::*;
use semantics_analyzer::{format_analysis, Analyzer};
use semantics_lexicon::Lexicon;
use serde::Serialize;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// The Engine Instance running in the Browser
#[wasm_bindgen]
pub struct SemanticsEngine {
    lexicon: Lexicon,
}

#[wasm_bindgen]
impl SemanticsEngine {
    /// Engine backed by the built-in English lexicon.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::english(),
        }
    }

    /// Engine backed by a lexicon archive (loaded via fetch() in JS).
    #[wasm_bindgen(js_name = fromArchive)]
    pub fn from_archive(data: &[u8]) -> Result<SemanticsEngine, JsError> {
        let lexicon = Lexicon::from_archive_bytes(data).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self { lexicon })
    }

    #[wasm_bindgen(getter, js_name = lexiconVersion)]
    pub fn lexicon_version(&self) -> u32 {
        self.lexicon.version()
    }

    /// Text -> plain JS object with the same keys as the JSON output.
    pub fn analyze(&self, sentence: &str) -> Result<JsValue, JsError> {
        let analysis = Analyzer::new(&self.lexicon).analyze(sentence);

        // json_compatible: absent values become `null`, maps become plain objects
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        analysis
            .serialize(&serializer)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Text -> multi-line report.
    pub fn format(&self, sentence: &str) -> String {
        format_analysis(&Analyzer::new(&self.lexicon).analyze(sentence))
    }
}

impl Default for SemanticsEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semantics_lexicon::{archive_data, english};

    #[test]
    fn test_format_in_engine() {
        let engine = SemanticsEngine::new();
        let report = engine.format("Alice likes Bob.");
        assert!(report.contains("  Subject: Alice"));
    }

    #[test]
    fn test_engine_from_archive() {
        let bytes = archive_data(&english::data()).unwrap();
        let engine = SemanticsEngine::from_archive(&bytes).ok().unwrap();
        assert_eq!(engine.lexicon_version(), english::VERSION);
    }
}
