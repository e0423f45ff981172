use std::{io, path::Path};

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already held the same content
    Unchanged,
}

/// Write `content` to `path` unless the file already holds exactly that content.
///
/// Parent directories are created as needed.
pub fn write_if_changed(path: &Path, content: &str) -> io::Result<WriteResult> {
    if let Ok(existing) = std::fs::read_to_string(path)
        && existing == content
    {
        return Ok(WriteResult::Unchanged);
    }
    write_file(path, content)?;
    Ok(WriteResult::Written)
}

fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}
