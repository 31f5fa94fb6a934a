// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text passes over `uni.showToast` calls.
//!
//! Both passes are lexical: a regex stands in for a parser. The argument
//! object of a call must not contain nested braces; matching stops at the
//! first `}` after the opening `({`.

pub mod reformat;
pub mod remove;

use std::borrow::Cow;
use std::path::Path;

pub use reformat::ReformatPass;
pub use remove::RemovePass;

/// File name suffixes the passes apply to.
pub const SOURCE_EXTENSIONS: &[&str] = &[".vue", ".js", ".ts"];

/// Whether a file name ends in one of [`SOURCE_EXTENSIONS`].
pub fn is_source_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| {
            let name = name.to_string_lossy();
            SOURCE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
        })
        .unwrap_or(false)
}

/// A whole-buffer text transformation applied to each source file.
pub trait Rewrite {
    /// Subcommand name.
    fn name(&self) -> &'static str;

    /// Line printed before the walk starts.
    fn banner(&self) -> &'static str;

    /// Past-tense verb used in per-file and summary lines ("cleaned").
    fn verb(&self) -> &'static str;

    /// Transform a content buffer. `Cow::Borrowed` means nothing changed.
    fn apply<'a>(&self, content: &'a str) -> Cow<'a, str>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
