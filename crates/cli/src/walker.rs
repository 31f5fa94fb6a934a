// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential source-tree walking.
//!
//! Uses the `ignore` crate's walker with its standard filters turned off:
//! hidden files and `.gitignore` rules do not hide anything. Only exclude
//! patterns from config prune the tree. Entries come out sorted by file
//! name so runs are reproducible.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;

use crate::rewrite;

/// Walker configuration.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Glob patterns excluded at the walker level (no I/O on matching subtrees).
    pub exclude_patterns: Vec<String>,
}

/// Source file discovered by the walker.
#[derive(Debug)]
pub struct WalkedFile {
    /// Path to the file, prefixed with the walk root.
    pub path: PathBuf,
}

/// Statistics from a walk operation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WalkStats {
    /// Source files discovered.
    pub files_found: usize,

    /// Files skipped because of their extension.
    pub files_skipped: usize,

    /// Errors encountered (unreadable directories, missing root).
    pub errors: usize,
}

/// Source-tree walker.
pub struct FileWalker {
    config: WalkerConfig,
}

impl FileWalker {
    /// Create a new walker with the given configuration.
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Create a walker that excludes the given patterns.
    pub fn with_excludes(patterns: &[String]) -> Self {
        Self::new(WalkerConfig {
            exclude_patterns: patterns.to_vec(),
        })
    }

    fn builder(&self, root: &Path) -> WalkBuilder {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));

        // In ignore's override system a `!` prefix excludes
        if !self.config.exclude_patterns.is_empty() {
            let mut overrides = OverrideBuilder::new(root);
            for pattern in &self.config.exclude_patterns {
                if let Err(err) = overrides.add(&format!("!{}", pattern)) {
                    tracing::warn!("ignoring exclude pattern {:?}: {}", pattern, err);
                }
            }
            match overrides.build() {
                Ok(overrides) => {
                    builder.overrides(overrides);
                }
                Err(err) => tracing::warn!("exclude patterns not applied: {}", err),
            }
        }

        builder
    }

    /// Walk `root` and collect every source file under it, in order.
    pub fn walk_collect(&self, root: &Path) -> (Vec<WalkedFile>, WalkStats) {
        let mut files = Vec::new();
        let mut stats = WalkStats::default();

        for entry in self.builder(root).build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!("Walk error: {}", err);
                    stats.errors += 1;
                    continue;
                }
            };

            // Symlinked directories are not descended, symlinked files count
            let is_file = entry
                .file_type()
                .map(|t| t.is_file() || (t.is_symlink() && entry.path().is_file()))
                .unwrap_or(false);
            if !is_file {
                continue;
            }

            if !rewrite::is_source_file(entry.path()) {
                tracing::trace!(path = %entry.path().display(), "skipping non-source file");
                stats.files_skipped += 1;
                continue;
            }

            stats.files_found += 1;
            files.push(WalkedFile {
                path: entry.into_path(),
            });
        }

        (files, stats)
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
