use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use prisma_camel_schema::SchemaFile;

use super::UnwrapOrExit;
use crate::{
    ops::{
        self,
        convert::{ConvertMode, ConvertOptions},
    },
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ConvertCommand {
    /// Path to the Prisma schema file to convert
    #[arg(required = true)]
    pub schema: Option<PathBuf>,

    /// Output file path (defaults to overwriting the schema file)
    pub output: Option<PathBuf>,

    /// Check if the schema is already converted without writing (exit 1 if not)
    #[arg(long, conflicts_with = "stdout")]
    pub check: bool,

    /// Print the converted schema to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// List every rename and inserted attribute
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl ConvertCommand {
    pub fn run(&self) -> Result<()> {
        let Some(schema) = &self.schema else {
            eyre::bail!("no schema file given");
        };
        let output = self.output.as_ref().unwrap_or(schema);

        let file = SchemaFile::open(schema).unwrap_or_exit();
        let report = ops::convert(
            &file,
            ConvertOptions {
                output,
                mode: self.mode(),
                verbose: self.verbose,
            },
        )
        .unwrap_or_exit();

        if self.stdout {
            print!("{}", report.output);
        } else if !self.quiet {
            report.render(&mut TerminalOutput::new());
        }

        if self.check && report.is_changed() {
            std::process::exit(1);
        }
        Ok(())
    }

    fn mode(&self) -> ConvertMode {
        if self.check {
            ConvertMode::Check
        } else if self.stdout {
            ConvertMode::Stdout
        } else {
            ConvertMode::Write
        }
    }
}
