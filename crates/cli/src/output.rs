// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented run report.
//!
//! ```text
//! Cleaning uni.showToast calls...
//! cleaned file: src/pages/index.vue
//! error processing file src/legacy.js: invalid utf-8 sequence of 1 bytes from index 0
//! Done: cleaned 1 file(s)
//! ```

use std::path::Path;

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::color::scheme;
use crate::error::Error;
use crate::rewrite::Rewrite;

/// Writes report lines as files are processed.
pub struct Reporter<W> {
    out: W,
}

impl Reporter<StandardStream> {
    /// Reporter on stdout with the given color choice.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Start-of-run line.
    pub fn banner(&mut self, pass: &dyn Rewrite) -> std::io::Result<()> {
        writeln!(self.out, "{}", pass.banner())
    }

    /// A file was rewritten.
    pub fn modified(&mut self, pass: &dyn Rewrite, path: &Path) -> std::io::Result<()> {
        write!(self.out, "{} file: ", pass.verb())?;
        self.out.set_color(&scheme::path())?;
        write!(self.out, "{}", path.display())?;
        self.out.reset()?;
        writeln!(self.out)
    }

    /// A file could not be processed.
    pub fn failed(&mut self, path: &Path, err: &Error) -> std::io::Result<()> {
        self.out.set_color(&scheme::error())?;
        write!(self.out, "error")?;
        self.out.reset()?;
        write!(self.out, " processing file ")?;
        self.out.set_color(&scheme::path())?;
        write!(self.out, "{}", path.display())?;
        self.out.reset()?;
        writeln!(self.out, ": {}", err.reason())
    }

    /// End-of-run line with the modified-file count.
    pub fn summary(&mut self, pass: &dyn Rewrite, modified: usize) -> std::io::Result<()> {
        write!(self.out, "Done: {} ", pass.verb())?;
        self.out.set_color(&scheme::count())?;
        write!(self.out, "{}", modified)?;
        self.out.reset()?;
        writeln!(self.out, " file(s)")?;
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
