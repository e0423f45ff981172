use std::path::{Path, PathBuf};

use prisma_camel_core::{WriteResult, write_if_changed};

use crate::{Conversion, Error, Result, convert_with_changes};

/// A schema file on disk with its raw content.
#[derive(Debug)]
pub struct SchemaFile {
    path: PathBuf,
    content: String,
}

impl SchemaFile {
    /// Open and read a schema file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Box::new(Error::NotFound { path }));
        }
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;

        Ok(Self { path, content })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Convert the content to camelCase.
    pub fn convert(&self) -> Conversion {
        convert_with_changes(&self.content)
    }

    /// Write converted content to `path`, skipping the write when the file
    /// already holds exactly that content.
    pub fn save_to(path: impl AsRef<Path>, content: &str) -> Result<WriteResult> {
        let path = path.as_ref();
        write_if_changed(path, content).map_err(|e| Error::write(path, e))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.prisma");

        let err = SchemaFile::open(&path).unwrap_err();

        assert!(matches!(*err, Error::NotFound { .. }));
        assert!(err.to_string().contains("missing.prisma"));
    }

    #[test]
    fn test_open_and_convert() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("schema.prisma");
        fs::write(&path, "model User {\n  user_name String\n}\n").unwrap();

        let file = SchemaFile::open(&path).unwrap();
        let conversion = file.convert();

        assert_eq!(file.path(), path);
        assert_eq!(file.content(), "model User {\n  user_name String\n}\n");
        assert_eq!(
            conversion.output,
            "model User {\n  userName String @map(\"user_name\")\n}\n"
        );
    }

    #[test]
    fn test_save_to_reports_unchanged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out").join("schema.prisma");

        assert_eq!(
            SchemaFile::save_to(&path, "model User {}").unwrap(),
            WriteResult::Written
        );
        assert_eq!(
            SchemaFile::save_to(&path, "model User {}").unwrap(),
            WriteResult::Unchanged
        );
    }

    #[test]
    fn test_save_to_directory_fails() {
        let temp = TempDir::new().unwrap();

        let err = SchemaFile::save_to(temp.path(), "model User {}").unwrap_err();

        assert!(matches!(*err, Error::Write { .. }));
    }
}
