//! CLI command handlers
//!
//! This module contains all CLI-related functionality including:
//! - Argument parsing structures
//! - Command implementations
//! - Log level selection and fatal error reporting

pub mod args;
pub mod commands;
pub mod error_handling;
pub mod help;
pub mod router;

// Re-export the main CLI structures for convenience
pub use args::{Cli, Commands, OutputFormat};
pub use error_handling::{handle_fatal_error, render_error};
pub use help::{get_log_level, resolve_log_level};
pub use router::{execute_command, exit_code_for, DEFAULT_INPUT};
