//! Command implementations
//!
//! Each command renders its result to a string; the router prints it.

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::KeycipherError;
use crate::grid::Grid;
use crate::operations::Operation;
use crate::transformer::{apply_all, execute, parse_cipher};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Serialize)]
struct EncodeReport<'a> {
    cipher: &'a str,
    input: &'a str,
    output: &'a str,
}

#[derive(Debug, Serialize)]
struct ValidateReport<'a> {
    cipher: &'a str,
    operations: &'a [Operation],
}

#[derive(Debug, Serialize)]
struct LayoutReport<'a> {
    cipher: Option<&'a str>,
    rows: &'a Grid<char>,
}

/// Retype `input` on the configured layout transformed by `cipher`
pub fn run_encode(
    config: &Config,
    input: &str,
    cipher: Option<&str>,
    format: OutputFormat,
) -> Result<String, KeycipherError> {
    let cipher = match cipher {
        Some(cipher) => cipher,
        None => config.resolve_default_cipher()?,
    };
    let layout = config.get_layout()?;
    debug!(cipher, "Encoding input");

    let output = execute(&layout, cipher, input)?;
    match format {
        OutputFormat::Text => Ok(output),
        OutputFormat::Json => to_json(&EncodeReport {
            cipher,
            input,
            output: &output,
        }),
    }
}

/// Validate `cipher` and describe the operations it encodes
pub fn run_validate(cipher: &str, format: OutputFormat) -> Result<String, KeycipherError> {
    let operations = parse_cipher(cipher)?;
    match format {
        OutputFormat::Text => {
            let mut lines = vec![format!(
                "Cipher '{}' is valid ({} operation{})",
                cipher,
                operations.len(),
                if operations.len() == 1 { "" } else { "s" }
            )];
            lines.extend(
                operations
                    .iter()
                    .enumerate()
                    .map(|(i, op)| format!("  {}. {}", i + 1, describe_operation(op))),
            );
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => to_json(&ValidateReport {
            cipher,
            operations: &operations,
        }),
    }
}

/// Render the configured layout, transformed by `cipher` when given
pub fn run_layout(
    config: &Config,
    cipher: Option<&str>,
    format: OutputFormat,
) -> Result<String, KeycipherError> {
    let original = config.get_layout()?;
    let layout = match cipher {
        Some(cipher) => apply_all(&original, &parse_cipher(cipher)?),
        None => original,
    };

    match format {
        OutputFormat::Text => Ok(layout.to_string()),
        OutputFormat::Json => to_json(&LayoutReport {
            cipher,
            rows: &layout,
        }),
    }
}

fn describe_operation(op: &Operation) -> String {
    match op {
        Operation::HorizontalFlip => format!("{}: horizontal flip", op),
        Operation::VerticalFlip => format!("{}: vertical flip", op),
        Operation::Rotate(amount) => format!("{}: rotate columns by {}", op, amount),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, KeycipherError> {
    serde_json::to_string_pretty(value).map_err(|e| {
        KeycipherError::other(format!("Failed to serialize output: {}", e)).with_source(e)
    })
}
