use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for schema file operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("file not found: '{path}'")]
    #[diagnostic(
        code(prisma_camel::not_found),
        help("pass the path to an existing schema file, e.g. 'prisma/schema.prisma'")
    )]
    NotFound { path: PathBuf },

    #[error("failed to read '{path}'")]
    #[diagnostic(code(prisma_camel::read_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(
        code(prisma_camel::write_error),
        help("check that the output directory is writable")
    )]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a read error for `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a write error for `path`
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Write {
            path: path.into(),
            source,
        })
    }
}
