use std::{fs, path::Path};

use anyhow::{bail, Context, Result};

/// Create the directory if it doesn’t exist; error if a non-directory exists there.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            bail!("[io::fs] Path exists but is not a directory: {}", path.display());
        }
    } else {
        fs::create_dir_all(path)
            .with_context(|| format!("[io::fs] Failed to create directory {}", path.display()))?;
    }
    Ok(())
}

/// Refuse to clobber an existing file unless `force` is set; "-" (stdout) is never a valid target.
pub fn check_output_path(path: &Path, force: bool) -> Result<()> {
    if path == Path::new("-") { bail!("[io::fs] stdout is not supported as an output file.") }
    if path.is_dir() { bail!("[io::fs] Output path is a directory: {}", path.display()) }
    if path.exists() && !force {
        bail!("[io::fs] Refusing to overwrite {} (pass --force to replace it)", path.display());
    }
    Ok(())
}

/// Write a finished document to `path`.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)
        .with_context(|| format!("[io::fs] Failed to write {}", path.display()))
}
