//! WebAssembly bindings for bittext
//!
//! This module provides JavaScript-friendly bindings for the codec. Missing
//! (`null`/`undefined`) arguments are rejected rather than treated as empty.

use crate::host;
use wasm_bindgen::prelude::*;

fn to_js(e: crate::CodecError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Convert text into a binary string
#[wasm_bindgen(js_name = stringToBinary)]
pub fn string_to_binary(input_text: Option<String>) -> Result<String, JsValue> {
    host::string_to_binary(input_text.as_deref()).map_err(to_js)
}

/// Convert a binary string into an array of 0/1 digits
#[wasm_bindgen(js_name = stringToIntArray)]
pub fn string_to_int_array(input_string: Option<String>) -> Result<Vec<i32>, JsValue> {
    host::string_to_int_array(input_string.as_deref()).map_err(to_js)
}

/// Convert a binary string back into text
#[wasm_bindgen(js_name = binaryToString)]
pub fn binary_to_string(input_text: Option<String>) -> Result<String, JsValue> {
    host::binary_to_string(input_text.as_deref()).map_err(to_js)
}

#[wasm_bindgen(js_name = replaceSingleDigit)]
pub fn replace_single_digit(target: i32, single_digit: i32) -> i32 {
    crate::codec::replace_single_digit(target, single_digit)
}
