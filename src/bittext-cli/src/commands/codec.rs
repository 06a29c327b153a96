//! Codec command handlers

use crate::cli::{DigitsFormat, TextFormat};
use crate::input::{read_binary, read_input};
use anyhow::{Context, Result};
use std::path::Path;

/// Handle the encode command
pub fn encode(text: Option<&str>, input: Option<&Path>, grouped: bool) -> Result<()> {
    println!("{}", encode_output(text, input, grouped)?);
    Ok(())
}

/// Handle the digits command
pub fn digits(binary: Option<&str>, input: Option<&Path>, format: DigitsFormat) -> Result<()> {
    println!("{}", digits_output(binary, input, format)?);
    Ok(())
}

/// Handle the decode command
pub fn decode(binary: Option<&str>, input: Option<&Path>, format: TextFormat) -> Result<()> {
    println!("{}", decode_output(binary, input, format)?);
    Ok(())
}

fn encode_output(text: Option<&str>, input: Option<&Path>, grouped: bool) -> Result<String> {
    let bytes = read_input(text, input)?;
    tracing::debug!(bytes = bytes.len(), "encode");
    Ok(render_encoded(&bytes, grouped))
}

fn digits_output(
    binary: Option<&str>,
    input: Option<&Path>,
    format: DigitsFormat,
) -> Result<String> {
    let binary = read_binary(binary, input)?;
    let digits = bittext::to_digit_array(&binary).context("Failed to convert binary string")?;
    render_digits(&digits, format)
}

fn decode_output(binary: Option<&str>, input: Option<&Path>, format: TextFormat) -> Result<String> {
    let binary = read_binary(binary, input)?;
    let bytes = bittext::decode(&binary).context("Failed to decode binary string")?;

    let dropped = binary.chars().count() % bittext::BITS_PER_BYTE;
    if dropped > 0 {
        tracing::warn!(dropped, "ignoring trailing bits that do not form a whole byte");
    }

    Ok(render_decoded(&bytes, format))
}

/// Handle the digit command
pub fn replace_digit(target: i32, digit: i32) {
    println!("{}", bittext::replace_single_digit(target, digit));
}

fn render_encoded(bytes: &[u8], grouped: bool) -> String {
    if grouped {
        bittext::format_groups(bytes)
    } else {
        bittext::encode(bytes)
    }
}

fn render_digits(digits: &[u8], format: DigitsFormat) -> Result<String> {
    Ok(match format {
        DigitsFormat::Plain => digits
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(" "),
        DigitsFormat::Json => {
            serde_json::to_string(digits).context("Failed to serialize digits")?
        }
    })
}

fn render_decoded(bytes: &[u8], format: TextFormat) -> String {
    match format {
        TextFormat::Text => String::from_utf8_lossy(bytes).into_owned(),
        TextFormat::Hex => hex::encode(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_encoded() {
        assert_eq!(render_encoded(b"AB", false), "0100000101000010");
        assert_eq!(render_encoded(b"AB", true), "01000001 01000010");
    }

    #[test]
    fn test_render_digits() {
        let digits = [0, 1, 1];
        assert_eq!(render_digits(&digits, DigitsFormat::Plain).unwrap(), "0 1 1");
        assert_eq!(render_digits(&digits, DigitsFormat::Json).unwrap(), "[0,1,1]");
        assert_eq!(render_digits(&[], DigitsFormat::Json).unwrap(), "[]");
    }

    #[test]
    fn test_render_decoded() {
        assert_eq!(render_decoded(b"A", TextFormat::Text), "A");
        assert_eq!(render_decoded(&[0x41, 0xFF], TextFormat::Hex), "41ff");
        assert_eq!(render_decoded(&[0xFF], TextFormat::Text), "\u{FFFD}");
    }

    #[test]
    fn test_decode_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bits.txt");
        std::fs::write(&path, "0100000101000\n").unwrap();

        assert_eq!(decode_output(None, Some(&path), TextFormat::Text).unwrap(), "A");
        assert_eq!(decode_output(None, Some(&path), TextFormat::Hex).unwrap(), "41");
    }

    #[test]
    fn test_grouped_encoding_decodes_back() {
        let grouped = render_encoded(b"AB", true);
        assert_eq!(
            decode_output(Some(grouped.as_str()), None, TextFormat::Text).unwrap(),
            "AB"
        );
        assert_eq!(
            digits_output(Some(grouped.as_str()), None, DigitsFormat::Json).unwrap(),
            "[0,1,0,0,0,0,0,1,0,1,0,0,0,0,1,0]"
        );
    }

    #[test]
    fn test_encode_output() {
        assert_eq!(encode_output(Some("A"), None, false).unwrap(), "01000001");
        assert_eq!(encode_output(Some("AB"), None, true).unwrap(), "01000001 01000010");
    }

    #[test]
    fn test_malformed_input_fails() {
        assert!(digits_output(Some("012"), None, DigitsFormat::Plain).is_err());
        assert!(decode_output(Some("0100000x"), None, TextFormat::Text).is_err());
    }
}
