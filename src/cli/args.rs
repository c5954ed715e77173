//! CLI argument structures
//!
//! This module defines the command-line interface used by keycipher.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Retype text on a keyboard layout transformed by a cipher
#[derive(Parser, Debug)]
#[command(name = "keycipher")]
#[command(about = "keycipher - Retype text on a keyboard layout transformed by a cipher", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Retype input on the layout transformed by a cipher
    #[command(name = "encode")]
    Encode {
        /// Text to retype; every character must be on the layout
        input: String,

        /// Cipher to apply (e.g. "HS2" or "VS-3"); defaults to the configured cipher
        #[arg(short = 'k', long, allow_hyphen_values = true)]
        cipher: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Check a cipher and list the operations it encodes
    #[command(name = "validate")]
    Validate {
        /// Cipher to check
        #[arg(allow_hyphen_values = true)]
        cipher: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the layout, optionally after applying a cipher
    #[command(name = "layout")]
    Layout {
        /// Cipher to apply before printing
        #[arg(short = 'k', long, allow_hyphen_values = true)]
        cipher: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}
