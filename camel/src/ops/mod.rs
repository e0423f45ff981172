//! Core operations.
//!
//! This module contains the business logic for prisma-camel commands,
//! separated from CLI argument parsing and output rendering.

pub mod convert;

pub use convert::convert;
