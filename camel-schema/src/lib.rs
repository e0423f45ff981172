//! Prisma schema converter.
//!
//! Rewrites snake_case model, enum, type and field names to camelCase /
//! PascalCase in a single forward pass over the schema lines, adding
//! `@map` / `@@map` attributes so the database names stay unchanged.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod block;
mod convert;
mod error;
mod file;
mod line;
mod remainder;
mod scan;

pub use block::Block;
pub use convert::{Change, ChangeKind, Conversion, convert, convert_with_changes};
pub use error::{Error, Result};
pub use file::SchemaFile;
pub use prisma_camel_core::WriteResult;
