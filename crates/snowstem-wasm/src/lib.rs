// WASM bindings for snowstem.
//
// Provides a `WasmStemmer` class exported via wasm-bindgen that wraps a
// `SnowballStemmer`. Errors are thrown as plain objects serialized with
// serde-wasm-bindgen so callers can branch on `name`.
//
// Usage from JavaScript:
//
//   listLanguages();                         // => ["arabic", "danish", ...]
//   const stemmer = new WasmStemmer("english");
//   stemmer.stem(["running", "flies"]);      // => ["run", "fli"]
//   stemmer.stem(["ok", 42]);                // throws { name: "InvalidInputTypeError", index: 1, ... }
//   stemmer.stem("running");                 // throws TypeError
//   stemmer.stemWord("happiness");           // => "happi"
//   stemmer.release();                       // further calls throw

use std::borrow::Cow;

use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use snowstem::{BatchItem, SnowballStemmer, StemError, Text};

// ============================================================================
// Error conversion
// ============================================================================

/// Serializable representation of a stemming error.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsStemError {
    name: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl From<StemError> for JsStemError {
    fn from(e: StemError) -> Self {
        let mut js = JsStemError {
            name: e.kind(),
            message: e.to_string(),
            language: None,
            index: None,
            value: None,
        };
        match e {
            StemError::UnsupportedLanguage { language } => js.language = Some(language),
            StemError::InvalidInputType { index, value } => {
                js.index = Some(index);
                js.value = Some(value);
            }
        }
        js
    }
}

fn stem_error_to_js(e: StemError) -> JsValue {
    serde_wasm_bindgen::to_value(&JsStemError::from(e)).unwrap_or_else(JsValue::from)
}

// ============================================================================
// Batch items
// ============================================================================

/// A JavaScript array element. Only JS strings count as text.
struct JsItem(JsValue);

impl BatchItem for JsItem {
    fn as_text(&self) -> Option<Text<'_>> {
        let s = self.0.dyn_ref::<js_sys::JsString>()?;
        Some(Text::Utf16(Cow::Owned(s.iter().collect())))
    }

    fn describe(&self) -> String {
        js_sys::JSON::stringify(&self.0)
            .ok()
            .and_then(|s| s.as_string())
            .or_else(|| self.0.as_string())
            .unwrap_or_else(|| format!("{:?}", self.0))
    }
}

// ============================================================================
// WasmStemmer
// ============================================================================

/// List supported languages, sorted ascending.
#[wasm_bindgen(js_name = "listLanguages")]
pub fn list_languages() -> Vec<String> {
    snowstem::list_languages().into_iter().map(String::from).collect()
}

/// Language-bound Snowball stemmer for WebAssembly.
#[wasm_bindgen]
pub struct WasmStemmer {
    handle: SnowballStemmer,
}

#[wasm_bindgen]
impl WasmStemmer {
    /// Create a stemmer for `language`. Throws `UnsupportedLanguageError`.
    #[wasm_bindgen(constructor)]
    pub fn new(language: &str) -> Result<WasmStemmer, JsValue> {
        let handle = snowstem::create_stemmer(language).map_err(stem_error_to_js)?;
        Ok(WasmStemmer { handle })
    }

    /// The language this stemmer was created with.
    #[wasm_bindgen(getter)]
    pub fn language(&self) -> String {
        self.handle.language().to_string()
    }

    /// Stem an array of strings in order.
    ///
    /// Throws a `TypeError` if `items` is not an array, and
    /// `InvalidInputTypeError` if any element is not a string; no partial
    /// result is returned in either case.
    pub fn stem(&mut self, items: JsValue) -> Result<Vec<String>, JsValue> {
        let Some(items) = items.dyn_ref::<js_sys::Array>() else {
            return Err(js_sys::TypeError::new("stem() expects an array of strings").into());
        };
        self.handle.stem(items.iter().map(JsItem)).map_err(stem_error_to_js)
    }

    /// Stem a single word.
    #[wasm_bindgen(js_name = "stemWord")]
    pub fn stem_word(&mut self, word: &str) -> String {
        self.handle.stem_word(word)
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Release the engine instance now.
    ///
    /// Consumes the instance: wasm-bindgen detaches the JS object, so any
    /// later call on it throws instead of reaching a freed stemmer.
    pub fn release(self) {
        self.handle.release();
    }
}
