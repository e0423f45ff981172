//! Convert command report data structures.

use std::path::PathBuf;

use prisma_camel_core::WriteResult;
use prisma_camel_schema::Change;

use super::output::{Output, Report};
use crate::ops::convert::ConvertMode;

/// Report data from converting a schema.
#[derive(Debug)]
pub struct ConvertReport {
    /// Path to the input schema.
    pub schema_path: PathBuf,
    /// Path the converted schema is written to.
    pub output_path: PathBuf,
    pub mode: ConvertMode,
    /// Whether to list every change.
    pub verbose: bool,
    /// Whether the converted schema differs from the input.
    pub changed: bool,
    pub changes: Vec<Change>,
    /// Outcome of the write, in write mode.
    pub written: Option<WriteResult>,
    /// The converted schema text.
    pub output: String,
}

impl ConvertReport {
    /// Whether conversion changed the schema.
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    fn change_count(&self) -> String {
        let count = self.changes.len();
        format!("{} change{}", count, if count == 1 { "" } else { "s" })
    }
}

impl Report for ConvertReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Schema", &self.schema_path.display().to_string());

        if self.verbose && !self.changes.is_empty() {
            out.section("Changes");
            for change in &self.changes {
                out.list_item(&change.to_string());
            }
        }

        out.newline();
        match self.mode {
            ConvertMode::Check if self.changed => {
                out.warning(&format!(
                    "{} is not camelCase ({})",
                    self.schema_path.display(),
                    self.change_count()
                ));
                out.preformatted("Run `prisma-camel <schema>` to fix.");
            }
            ConvertMode::Check => {
                out.preformatted(&format!(
                    "✓ {} is already camelCase",
                    self.schema_path.display()
                ));
            }
            ConvertMode::Write => match self.written {
                Some(WriteResult::Written) => out.preformatted(&format!(
                    "✓ Converted {} ({}), wrote {}",
                    self.schema_path.display(),
                    self.change_count(),
                    self.output_path.display()
                )),
                Some(WriteResult::Unchanged) | None => out.preformatted(&format!(
                    "{} is already up to date",
                    self.output_path.display()
                )),
            },
            ConvertMode::Stdout => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use prisma_camel_schema::convert_with_changes;

    use super::*;

    #[derive(Default)]
    struct RecordingOutput {
        lines: Vec<String>,
    }

    impl Output for RecordingOutput {
        fn section(&mut self, name: &str) {
            self.lines.push(format!("{}:", name));
        }

        fn key_value(&mut self, key: &str, value: &str) {
            self.lines.push(format!("{}: {}", key, value));
        }

        fn list_item(&mut self, text: &str) {
            self.lines.push(format!("  - {}", text));
        }

        fn warning(&mut self, msg: &str) {
            self.lines.push(format!("warning: {}", msg));
        }

        fn preformatted(&mut self, text: &str) {
            self.lines.push(text.to_string());
        }

        fn newline(&mut self) {
            self.lines.push(String::new());
        }
    }

    fn report(mode: ConvertMode, verbose: bool, written: Option<WriteResult>) -> ConvertReport {
        let conversion = convert_with_changes("model blog_post {\n}");
        ConvertReport {
            schema_path: PathBuf::from("schema.prisma"),
            output_path: PathBuf::from("out.prisma"),
            mode,
            verbose,
            changed: conversion.is_changed(),
            changes: conversion.changes,
            written,
            output: conversion.output,
        }
    }

    fn render(report: &ConvertReport) -> Vec<String> {
        let mut out = RecordingOutput::default();
        report.render(&mut out);
        out.lines
    }

    #[test]
    fn test_render_written() {
        let lines = render(&report(
            ConvertMode::Write,
            false,
            Some(WriteResult::Written),
        ));
        assert_eq!(
            lines,
            vec![
                "Schema: schema.prisma",
                "",
                "✓ Converted schema.prisma (2 changes), wrote out.prisma",
            ]
        );
    }

    #[test]
    fn test_render_verbose_lists_changes() {
        let lines = render(&report(
            ConvertMode::Write,
            true,
            Some(WriteResult::Written),
        ));
        assert_eq!(lines[1], "Changes:");
        assert_eq!(lines[2], "  - line 1: model blog_post -> BlogPost");
        assert_eq!(lines[3], "  - line 2: added @@map(\"blog_post\")");
    }

    #[test]
    fn test_render_check_failure() {
        let lines = render(&report(ConvertMode::Check, false, None));
        assert_eq!(
            lines[2],
            "warning: schema.prisma is not camelCase (2 changes)"
        );
    }
}
