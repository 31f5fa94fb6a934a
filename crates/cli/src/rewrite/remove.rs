// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Replace `uni.showToast({...})` calls with a one-line marker comment.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::Rewrite;

/// A call, optionally already behind `//`, through the `)` that follows
/// the first `}`. Group 1 is the leading whitespace, line breaks included.
#[allow(clippy::expect_used)]
static TOAST_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\s*)(?://\s*)?uni\.showToast\s*\(\s*\{[^}]*?\}\s*\)").expect("valid regex")
});

/// A line holding only `//` and whitespace.
#[allow(clippy::expect_used)]
static EMPTY_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*//\s*$").expect("valid regex"));

/// A commented continuation line left over from a multi-line call.
#[allow(clippy::expect_used)]
static ORPHAN_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*//\s*(title:|icon:|duration:|mask:)").expect("valid regex")
});

/// Text that replaces each matched call.
pub const MARKER: &str = "// uni.showToast() - 已屏蔽";

/// The toast-call remover.
#[derive(Debug, Default, Clone, Copy)]
pub struct RemovePass;

impl Rewrite for RemovePass {
    fn name(&self) -> &'static str {
        "remove"
    }

    fn banner(&self) -> &'static str {
        "Cleaning uni.showToast calls..."
    }

    fn verb(&self) -> &'static str {
        "cleaned"
    }

    fn apply<'a>(&self, content: &'a str) -> Cow<'a, str> {
        remove_toast_calls(content)
    }
}

/// Replace every toast call and drop the comment debris around it.
///
/// Lines are only filtered when at least one call was replaced, so a
/// file without calls comes back borrowed and untouched.
pub fn remove_toast_calls(content: &str) -> Cow<'_, str> {
    let replaced = TOAST_CALL.replace_all(content, |caps: &Captures<'_>| {
        format!("{}{}", &caps[1], MARKER)
    });

    let Cow::Owned(replaced) = replaced else {
        return Cow::Borrowed(content);
    };

    let cleaned = strip_debris(&replaced);
    if cleaned == content {
        Cow::Borrowed(content)
    } else {
        Cow::Owned(cleaned)
    }
}

fn strip_debris(content: &str) -> String {
    content
        .split('\n')
        .filter(|line| !EMPTY_COMMENT.is_match(line) && !ORPHAN_PARAM.is_match(line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "remove_tests.rs"]
mod tests;
