//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up bittext CLI defaults.

use crate::cli::{DigitsFormat, TextFormat};
use crate::config::Config;
use anyhow::Result;

/// Handle the configure command
///
/// `config` is whatever main loaded, defaults if the file was unusable, so
/// saving here also repairs a broken config file.
pub fn handle(
    mut config: Config,
    digits_format: Option<DigitsFormat>,
    text_format: Option<TextFormat>,
    log_level: Option<String>,
    show: bool,
) -> Result<()> {
    if show {
        show_config(&config);
        return Ok(());
    }

    if !apply(&mut config, digits_format, text_format, log_level) {
        show_usage();
        return Ok(());
    }

    let path = config.save()?;
    println!("Config saved to: {}", path.display());
    show_config(&config);

    Ok(())
}

/// Apply any provided settings, returning whether anything changed
fn apply(
    config: &mut Config,
    digits_format: Option<DigitsFormat>,
    text_format: Option<TextFormat>,
    log_level: Option<String>,
) -> bool {
    let changed = digits_format.is_some() || text_format.is_some() || log_level.is_some();

    if digits_format.is_some() {
        config.digits_format = digits_format;
    }
    if text_format.is_some() {
        config.text_format = text_format;
    }
    if log_level.is_some() {
        config.log_level = log_level;
    }

    changed
}

/// Display current configuration
fn show_config(config: &Config) {
    println!("Digits format: {:?}", config.digits_format());
    println!("Text format: {:?}", config.text_format());
    println!("Log level: {}", config.log_level());

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: bittext configure --digits-format json --text-format hex");
    println!("   or: bittext configure --log-level debug");
    println!("   or: bittext configure --show");
}
