// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential pass runner with per-file error isolation.
//!
//! Each source file is read, transformed and, when the text changed,
//! replaced before the next file is touched. A failure on one file is
//! reported and the run moves on.

use std::borrow::Cow;
use std::path::Path;

use termcolor::WriteColor;

use crate::error::{Error, Result};
use crate::output::Reporter;
use crate::reader::FileReader;
use crate::rewrite::Rewrite;
use crate::walker::{FileWalker, WalkStats};
use crate::writer;

/// Result of processing one file.
#[derive(Debug)]
pub enum FileOutcome {
    /// Content changed and was written back.
    Modified,
    /// Nothing to do; the file was not written.
    Unchanged,
    /// The file could not be read, decoded or written.
    Failed(Error),
}

/// Totals for a completed run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub modified: usize,
    pub unchanged: usize,
    pub failed: usize,
    pub walk: WalkStats,
}

/// Applies a pass to every source file under a root.
pub struct Runner {
    walker: FileWalker,
    reader: FileReader,
}

impl Runner {
    pub fn new(walker: FileWalker) -> Self {
        Self {
            walker,
            reader: FileReader::new(),
        }
    }

    /// Walk `root`, apply `pass` to each source file and report as it goes.
    ///
    /// A report line that cannot be written is logged and the run carries
    /// on, so every file is still processed.
    pub fn run<W: WriteColor>(
        &self,
        pass: &dyn Rewrite,
        root: &Path,
        reporter: &mut Reporter<W>,
    ) -> RunSummary {
        report(reporter.banner(pass));

        let (files, walk) = self.walker.walk_collect(root);
        tracing::debug!(
            root = %root.display(),
            found = walk.files_found,
            skipped = walk.files_skipped,
            "walk complete"
        );

        let mut summary = RunSummary {
            walk,
            ..Default::default()
        };

        for file in &files {
            match self.process_file(pass, &file.path) {
                FileOutcome::Modified => {
                    summary.modified += 1;
                    report(reporter.modified(pass, &file.path));
                }
                FileOutcome::Unchanged => summary.unchanged += 1,
                FileOutcome::Failed(err) => {
                    summary.failed += 1;
                    report(reporter.failed(&file.path, &err));
                }
            }
        }

        report(reporter.summary(pass, summary.modified));
        summary
    }

    /// Apply `pass` to a single file.
    pub fn process_file(&self, pass: &dyn Rewrite, path: &Path) -> FileOutcome {
        match self.rewrite_file(pass, path) {
            Ok(true) => FileOutcome::Modified,
            Ok(false) => FileOutcome::Unchanged,
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "file failed");
                FileOutcome::Failed(err)
            }
        }
    }

    fn rewrite_file(&self, pass: &dyn Rewrite, path: &Path) -> Result<bool> {
        let content = self.reader.read_text(path)?;

        let Cow::Owned(updated) = pass.apply(&content) else {
            tracing::trace!(path = %path.display(), pass = pass.name(), "no match");
            return Ok(false);
        };

        writer::write_atomic(path, &updated)?;
        tracing::debug!(path = %path.display(), pass = pass.name(), "rewrote file");
        Ok(true)
    }
}

fn report(result: std::io::Result<()>) {
    if let Err(err) = result {
        tracing::warn!("failed to write report line: {}", err);
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
