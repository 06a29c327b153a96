mod cli;
mod commands;
mod config;
mod input;

use anyhow::Result;
use clap::Parser;
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

fn init_tracing(config: &Config) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, load_error) = Config::load_or_default();
    init_tracing(&config);
    if let Some(e) = load_error {
        tracing::warn!("Ignoring unusable config, using defaults: {:#}", e);
    }

    match cli.command {
        Commands::Encode {
            text,
            input,
            grouped,
        } => {
            commands::codec::encode(text.as_deref(), input.as_deref(), grouped)?;
        }

        Commands::Digits {
            binary,
            input,
            format,
        } => {
            let format = format.unwrap_or_else(|| config.digits_format());
            commands::codec::digits(binary.as_deref(), input.as_deref(), format)?;
        }

        Commands::Decode {
            binary,
            input,
            format,
        } => {
            let format = format.unwrap_or_else(|| config.text_format());
            commands::codec::decode(binary.as_deref(), input.as_deref(), format)?;
        }

        Commands::Digit { target, digit } => {
            commands::codec::replace_digit(target, digit);
        }

        Commands::Configure {
            digits_format,
            text_format,
            log_level,
            show,
        } => {
            commands::configure::handle(config, digits_format, text_format, log_level, show)?;
        }
    }

    Ok(())
}
