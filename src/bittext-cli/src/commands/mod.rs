//! Command handlers for bittext CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod codec;
pub mod configure;
