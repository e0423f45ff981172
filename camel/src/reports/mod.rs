//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod convert;
mod output;

pub use convert::ConvertReport;
pub use output::{Report, TerminalOutput};
