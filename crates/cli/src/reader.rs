// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Whole-file UTF-8 reading.
//!
//! Content is read into memory in one go and decoded strictly. Bytes are
//! not normalised: line endings and a leading BOM are kept as they are.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// Size at which to log a large file (1MB).
pub const LARGE_FILE_WARN: u64 = 1024 * 1024;

/// Eager UTF-8 file reader.
#[derive(Debug, Default)]
pub struct FileReader;

impl FileReader {
    pub fn new() -> Self {
        Self
    }

    /// Read a file and decode it as UTF-8.
    ///
    /// Returns `Err(Encoding)` when the bytes are not valid UTF-8.
    pub fn read_text(&self, path: &Path) -> Result<String> {
        let bytes = self.read_bytes(path)?;
        String::from_utf8(bytes).map_err(|e| Error::Encoding {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        let mut file = File::open(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let size = file.metadata().map(|m| m.len()).unwrap_or(0);
        if size > LARGE_FILE_WARN {
            tracing::info!(
                path = %path.display(),
                size_mb = size as f64 / 1_000_000.0,
                "Reading large file"
            );
        }

        let mut buffer = Vec::with_capacity(size as usize);
        file.read_to_end(&mut buffer).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(buffer)
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
