//! # bittext
//!
//! Bit-level text codec - text to binary strings, digit arrays, and back.
//!
//! This library provides functionality to:
//! - Encode text as a string of `'0'`/`'1'` characters, 8 per byte
//! - Split a binary string into one 0/1 digit per character
//! - Decode a binary string back into bytes
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), bittext::CodecError> {
//! let binary = bittext::encode(b"Hi");
//! assert_eq!(binary, "0100100001101001");
//!
//! let digits = bittext::to_digit_array(&binary)?;
//! assert_eq!(digits.len(), binary.len());
//!
//! let text = bittext::decode(&binary)?;
//! assert_eq!(text, b"Hi");
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod host;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used items
#[doc(inline)]
pub use codec::{
    decode, encode, format_groups, replace_single_digit, to_digit_array, CodecError,
    BITS_PER_BYTE,
};
