//! Core utilities for the prisma-camel schema converter.
//!
//! This crate provides the identifier case helpers and file helpers shared
//! by the converter and the command-line tool.

mod file;
mod utils;

// File operations
pub use file::{WriteResult, write_if_changed};
// String utilities
pub use utils::{
    is_identifier_char, is_identifier_start, is_snake_case, to_camel_case, to_pascal_case,
};
