//! Command routing and execution
//!
//! This module handles routing CLI commands to their respective implementations.

use crate::cli::args::{Commands, OutputFormat};
use crate::cli::commands::{run_encode, run_layout, run_validate};
use crate::config::Config;
use crate::error::KeycipherError;
use anyhow::Result;

/// Input retyped when no command is given
pub const DEFAULT_INPUT: &str = "DOG";

/// Execute a CLI command and return what should be printed
pub fn execute_command(command: Option<Commands>, config: &Config) -> Result<String> {
    let rendered = match command {
        Some(Commands::Encode {
            input,
            cipher,
            format,
        }) => run_encode(config, &input, cipher.as_deref(), format)?,
        Some(Commands::Validate { cipher, format }) => run_validate(&cipher, format)?,
        Some(Commands::Layout { cipher, format }) => {
            run_layout(config, cipher.as_deref(), format)?
        }
        None => run_encode(config, DEFAULT_INPUT, None, OutputFormat::Text)?,
    };
    Ok(rendered)
}

/// Process exit code for an error surfaced by a command
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<KeycipherError>()
        .map(KeycipherError::exit_code)
        .unwrap_or(1)
}
