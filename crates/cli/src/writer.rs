// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Atomic in-place file replacement.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Replace `path` with `contents`.
///
/// Writes to a temp file in the same directory and renames it over the
/// original, so a failed write leaves the original untouched. The
/// original's permissions carry over to the new file.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let io_err = |source: std::io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let permissions = std::fs::metadata(path).map_err(io_err)?.permissions();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(io_err)?;
    temp.write_all(contents.as_bytes()).map_err(io_err)?;
    temp.as_file().sync_all().map_err(io_err)?;
    std::fs::set_permissions(temp.path(), permissions).map_err(io_err)?;

    // Temp file is removed on drop if persist fails
    temp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
