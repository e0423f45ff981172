//! Convert operation - schema rewrite and write-back.

use std::path::Path;

use prisma_camel_schema::{Result, SchemaFile};

use crate::reports::ConvertReport;

/// What to do with the converted schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertMode {
    /// Write the converted schema to the output path.
    Write,
    /// Only report whether the schema would change.
    Check,
    /// Hand the converted schema back for printing.
    Stdout,
}

/// Options for the convert operation.
pub struct ConvertOptions<'a> {
    pub output: &'a Path,
    pub mode: ConvertMode,
    pub verbose: bool,
}

/// Execute the convert operation.
///
/// Converts the schema and, in [`ConvertMode::Write`], writes the result to
/// the output path unless it already holds identical content.
pub fn convert(file: &SchemaFile, options: ConvertOptions<'_>) -> Result<ConvertReport> {
    let conversion = file.convert();

    let written = match options.mode {
        ConvertMode::Write => Some(SchemaFile::save_to(options.output, &conversion.output)?),
        ConvertMode::Check | ConvertMode::Stdout => None,
    };

    Ok(ConvertReport {
        schema_path: file.path().to_path_buf(),
        output_path: options.output.to_path_buf(),
        mode: options.mode,
        verbose: options.verbose,
        changed: conversion.is_changed(),
        changes: conversion.changes,
        written,
        output: conversion.output,
    })
}
