//! WASM bindings for mathtext
//!
//! This module provides JavaScript-accessible functions so the quiz front end
//! and its PDF export can share one converter.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::{MathTextError, MathTextResult, ReadableOptions};

/// Conversion options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WasmConvertOptions {
    /// Unwrap braces until nothing changes (no nesting ceiling)
    #[serde(default)]
    pub exhaustive_braces: bool,
    /// Total brace-unwrap passes; ignored when `exhaustiveBraces` is set
    #[serde(default)]
    pub brace_passes: Option<usize>,
}

#[cfg(feature = "wasm")]
impl WasmConvertOptions {
    fn into_readable(self) -> ReadableOptions {
        if self.exhaustive_braces {
            return ReadableOptions::exhaustive();
        }
        match self.brace_passes {
            Some(passes) => ReadableOptions::new().with_brace_passes(passes),
            None => ReadableOptions::new(),
        }
    }
}

/// Conversion result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ConvertResult {
    /// The converted output
    pub output: String,
    /// Whether the options were accepted
    pub success: bool,
    /// Error message if the options were rejected
    pub error: Option<String>,
    /// Unknown commands dropped during conversion
    pub dropped: Vec<String>,
}

/// Safely serialize a value to JsValue, returning an error object on failure.
#[cfg(feature = "wasm")]
fn to_js_value<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or_else(|e| {
        let error_obj = ConvertResult {
            output: String::new(),
            success: false,
            error: Some(format!("Serialization error: {}", e)),
            dropped: vec![],
        };
        serde_wasm_bindgen::to_value(&error_obj).unwrap_or(JsValue::NULL)
    })
}

#[cfg(feature = "wasm")]
fn parse_options(options: JsValue) -> MathTextResult<ReadableOptions> {
    if options.is_undefined() || options.is_null() {
        return Ok(ReadableOptions::default());
    }
    let opts: WasmConvertOptions = serde_wasm_bindgen::from_value(options)
        .map_err(|e| MathTextError::invalid_options(e.to_string()))?;
    Ok(opts.into_readable())
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Split mixed text into `{ type, content, displayMode? }` objects
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "segment")]
pub fn segment_wasm(input: &str) -> JsValue {
    to_js_value(&crate::segment(input))
}

/// Convert mixed text to a single plain string
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "toPlainText")]
pub fn to_plain_text_wasm(input: &str) -> String {
    crate::to_plain_text(input)
}

/// Convert a LaTeX math body (without delimiters) to readable text
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "convertMath")]
pub fn convert_math_wasm(input: &str) -> String {
    crate::convert_math(input)
}

/// Convert a LaTeX math body with options; returns a `ConvertResult`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "convertMathWithOptions")]
pub fn convert_math_with_options_wasm(input: &str, options: JsValue) -> JsValue {
    let result = match parse_options(options) {
        Ok(opts) => {
            let report = crate::convert_math_with_report(input, &opts);
            ConvertResult {
                output: report.content,
                success: true,
                error: None,
                dropped: report.dropped,
            }
        }
        Err(e) => ConvertResult {
            output: String::new(),
            success: false,
            error: Some(e.to_string()),
            dropped: vec![],
        },
    };

    to_js_value(&result)
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
