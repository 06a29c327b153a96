//! Bit-level text codec
//!
//! Converts text to a binary string of `'0'`/`'1'` characters and back.
//!
//! Format:
//! 1. Every input byte becomes exactly 8 characters, MSB first
//! 2. Groups are concatenated in input order, so the output is `8 * len` long
//! 3. Decoding reads groups of 8 and drops any incomplete trailing group
//!
//! The digit array form is a per-character view of a binary string. It does
//! not regroup bits into bytes: `"01000001"` becomes eight digits, not `[65]`.

mod bitstream;

use bitstream::{BitReader, BitWriter};
use std::fmt::Write;

/// Bits per encoded byte
pub const BITS_PER_BYTE: usize = 8;

/// Errors that can occur while converting binary strings
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("Invalid input: no value was provided")]
    InvalidInput,

    #[error("Malformed binary string: {character:?} at position {position} is not '0' or '1'")]
    MalformedBinaryString { character: char, position: usize },
}

/// Convert text into its binary string representation.
///
/// Each byte is written as 8 characters, most significant bit first.
///
/// ```
/// assert_eq!(bittext::encode(b"A"), "01000001");
/// ```
pub fn encode(text: &[u8]) -> String {
    tracing::trace!(bytes = text.len(), "encoding text");

    let reader = BitReader::new(text);
    let mut result = String::with_capacity(reader.remaining_bits());
    for bit in reader {
        result.push(if bit == 1 { '1' } else { '0' });
    }
    result
}

/// Map each character of a binary string to its digit value.
///
/// Fails on the first character that is not `'0'` or `'1'`.
pub fn to_digit_array(binary: &str) -> Result<Vec<u8>, CodecError> {
    tracing::trace!(chars = binary.len(), "converting binary string to digits");

    binary
        .chars()
        .enumerate()
        .map(|(position, character)| digit_value(character, position))
        .collect()
}

/// Convert a binary string back into the bytes it encodes.
///
/// Trailing characters that don't fill a whole byte are dropped.
pub fn decode(binary: &str) -> Result<Vec<u8>, CodecError> {
    let digits = to_digit_array(binary)?;

    let mut writer = BitWriter::with_capacity(digits.len());
    for digit in digits {
        writer.write_bit(digit);
    }

    let dropped = writer.pending_bits();
    if dropped > 0 {
        tracing::debug!(dropped, "discarding incomplete trailing bit group");
    }

    Ok(writer.finish())
}

/// Replace the last decimal digit of `target` with `digit`.
///
/// Computed as `(target / 10) * 10 + digit` with truncating division, so
/// `digit` is not range-checked and negative targets round toward zero.
pub fn replace_single_digit(target: i32, digit: i32) -> i32 {
    (target / 10).wrapping_mul(10).wrapping_add(digit)
}

/// Render a byte slice as space-separated 8-bit groups (for display only)
pub fn format_groups(text: &[u8]) -> String {
    let mut out = String::with_capacity(text.len() * (BITS_PER_BYTE + 1));
    for (i, byte) in text.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // Writing to a String cannot fail
        let _ = write!(out, "{:08b}", byte);
    }
    out
}

fn digit_value(character: char, position: usize) -> Result<u8, CodecError> {
    match character {
        '0' => Ok(0),
        '1' => Ok(1),
        _ => Err(CodecError::MalformedBinaryString {
            character,
            position,
        }),
    }
}
