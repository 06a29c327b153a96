//! Host-facing conversions
//!
//! The host runtime hands over nullable strings and expects strings or int
//! arrays back. These functions do that translation around the codec so any
//! binding layer (see the `wasm` module) stays a one-line wrapper.

use crate::codec::{self, CodecError};

fn require(input: Option<&str>) -> Result<&str, CodecError> {
    input.ok_or(CodecError::InvalidInput)
}

/// Text to binary string
pub fn string_to_binary(input: Option<&str>) -> Result<String, CodecError> {
    Ok(codec::encode(require(input)?.as_bytes()))
}

/// Binary string to an int array with one 0/1 element per character
pub fn string_to_int_array(input: Option<&str>) -> Result<Vec<i32>, CodecError> {
    let digits = codec::to_digit_array(require(input)?)?;
    Ok(digits.into_iter().map(i32::from).collect())
}

/// Binary string to text. Bytes that are not valid UTF-8 become U+FFFD.
pub fn binary_to_string(input: Option<&str>) -> Result<String, CodecError> {
    let bytes = codec::decode(require(input)?)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
