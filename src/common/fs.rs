use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a whole file into a string, naming the path on failure.
pub(crate) fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("[common::fs] Failed to read {}", path.display()))
}

/// Read a whole file into bytes, naming the path on failure.
pub(crate) fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path)
        .with_context(|| format!("[common::fs] Failed to read {}", path.display()))
}

/// Write bytes to `path`, refusing to clobber an existing file unless `force` is set.
pub(crate) fn write_bytes(path: &Path, bytes: &[u8], force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("[common::fs] Refusing to overwrite existing file: {}", path.display());
    }
    fs::write(path, bytes)
        .with_context(|| format!("[common::fs] Failed to write {}", path.display()))
}
