//! Reading command input from arguments, files, or stdin

use anyhow::{bail, Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Resolve command input to raw bytes
///
/// A literal argument wins; `-` or no argument at all reads stdin unless a
/// file was given. Passing both a literal and a file is an error.
pub fn read_input(literal: Option<&str>, path: Option<&Path>) -> Result<Vec<u8>> {
    match (literal, path) {
        (Some(value), Some(_)) if value != "-" => {
            bail!("Pass either a value or --input, not both")
        }
        (Some(value), None) if value != "-" => Ok(value.as_bytes().to_vec()),
        (_, Some(path)) => {
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        _ => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Resolve command input as a binary string
///
/// ASCII whitespace anywhere in the input is stripped, so grouped output
/// (`01000001 01000010`) and trailing newlines are accepted. Anything else is
/// handed to the codec untouched.
pub fn read_binary(literal: Option<&str>, path: Option<&Path>) -> Result<String> {
    let bytes = read_input(literal, path)?;
    let text = String::from_utf8(bytes).context("Binary string input is not valid UTF-8")?;
    Ok(text.chars().filter(|c| !c.is_ascii_whitespace()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_input() {
        assert_eq!(read_input(Some("Hi"), None).unwrap(), b"Hi");
    }

    #[test]
    fn test_file_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, b"\x00\xFFraw").unwrap();

        assert_eq!(read_input(None, Some(&path)).unwrap(), b"\x00\xFFraw");
        assert_eq!(read_input(Some("-"), Some(&path)).unwrap(), b"\x00\xFFraw");
    }

    #[test]
    fn test_literal_and_file_conflict() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, b"x").unwrap();

        assert!(read_input(Some("x"), Some(&path)).is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_input(None, Some(&dir.path().join("nope"))).is_err());
    }

    #[test]
    fn test_binary_input_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bits.txt");
        fs::write(&path, "01000001\n").unwrap();

        assert_eq!(read_binary(None, Some(&path)).unwrap(), "01000001");
    }

    #[test]
    fn test_binary_input_whitespace_between_groups() {
        assert_eq!(
            read_binary(Some("01000001 01000010\n\t0101"), None).unwrap(),
            "01000001010000100101"
        );
    }

    #[test]
    fn test_binary_input_keeps_other_characters() {
        assert_eq!(read_binary(Some("01 2x"), None).unwrap(), "012x");
    }
}
