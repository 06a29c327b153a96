//! Core CLI definitions

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bittext")]
#[command(about = "Convert text to and from binary strings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// How digit arrays are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigitsFormat {
    /// Space-separated digits
    #[default]
    Plain,
    /// JSON array
    Json,
}

/// How decoded text is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    /// UTF-8 text, invalid sequences replaced
    #[default]
    Text,
    /// Lowercase hex bytes
    Hex,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert text into a binary string (8 digits per byte)
    #[command(visible_alias = "e")]
    Encode {
        /// Text to encode ("-" or omitted reads stdin)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Separate each byte's 8 digits with a space
        #[arg(short, long)]
        grouped: bool,
    },

    /// Split a binary string into one 0/1 digit per character
    #[command(visible_alias = "i")]
    Digits {
        /// Binary string ("-" or omitted reads stdin)
        binary: Option<String>,

        /// Read the binary string from a file instead
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format (uses configured default if not provided)
        #[arg(short, long, value_enum)]
        format: Option<DigitsFormat>,
    },

    /// Convert a binary string back into text
    #[command(visible_alias = "d")]
    Decode {
        /// Binary string ("-" or omitted reads stdin)
        binary: Option<String>,

        /// Read the binary string from a file instead
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format (uses configured default if not provided)
        #[arg(short, long, value_enum)]
        format: Option<TextFormat>,
    },

    /// Replace the last decimal digit of a number
    #[command(visible_alias = "r")]
    Digit {
        /// Number whose last digit is replaced
        #[arg(allow_negative_numbers = true)]
        target: i32,

        /// Replacement digit
        #[arg(allow_negative_numbers = true)]
        digit: i32,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default digits output format
        #[arg(long, value_enum)]
        digits_format: Option<DigitsFormat>,

        /// Set default decode output format
        #[arg(long, value_enum)]
        text_format: Option<TextFormat>,

        /// Set default log filter (e.g. "debug", "bittext=trace")
        #[arg(long)]
        log_level: Option<String>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
