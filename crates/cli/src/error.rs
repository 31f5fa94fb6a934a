// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// Detoast error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid UTF-8.
    #[error("encoding error: {}: {source}", .path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl Error {
    /// Underlying cause without the path prefix, for per-file report lines.
    pub fn reason(&self) -> String {
        match self {
            Error::Io { source, .. } => source.to_string(),
            Error::Encoding { source, .. } => source.to_string(),
            Error::Config { message, .. } => message.clone(),
        }
    }
}

/// Result type using detoast Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
///
/// Per-file failures never change the exit code; only errors raised
/// before the walk starts do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Run completed (possibly with per-file failures)
    Success = 0,
    /// Configuration error (clap also exits 2 on bad arguments)
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } => ExitCode::ConfigError,
            Error::Io { .. } | Error::Encoding { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
