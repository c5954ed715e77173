//! # keycipher
//!
//! Retype text on a keyboard layout that has been flipped and rotated according
//! to a cipher.
//!
//! ## Usage
//!
//! ```bash
//! keycipher encode DOG --cipher HS2
//! ```
//!
//! ```
//! use keycipher::{execute, Grid};
//!
//! let keyboard = Grid::qwerty();
//! assert_eq!(execute(&keyboard, "S1", "DOG").unwrap(), "SIF");
//! ```
//!
//! ## Cipher syntax
//!
//! - `H` flips the layout horizontally (mirror left-right)
//! - `V` flips the layout vertically (mirror top-bottom)
//! - `S<n>` rotates every row's columns by `n`; `n` may be negative and have
//!   several digits (`S12`, `S-3`)
//!
//! Operators apply left to right.
//!
//! ## Modules
//!
//! - `cli` - Command-line argument parsing and command handlers
//! - `config` - Layered TOML/environment configuration
//! - `error` - Application error type and error code registry
//! - `grid` - Rectangular layouts of unique cells
//! - `operations` - Flip and rotate operations and the shift-amount scanner
//! - `transformer` - Cipher parsing, transformation and retyping
//! - `validation` - Cipher and input validation
pub mod cli;
pub mod config;
pub mod error;
pub mod grid;
pub mod operations;
pub mod transformer;
pub mod validation;

#[cfg(test)]
mod property_tests;

pub use error::{ErrorCode, KeycipherError};
pub use grid::{Grid, GridError};
pub use operations::{apply_operation, Operation};
pub use transformer::{execute, parse_cipher, transform};
pub use validation::{validate_cipher, validate_input, ValidationError};
