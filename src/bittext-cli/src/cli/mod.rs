//! CLI argument definitions for bittext
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod core;

pub use core::{Cli, Commands, DigitsFormat, TextFormat};
