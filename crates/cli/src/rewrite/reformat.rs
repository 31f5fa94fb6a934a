// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Expand single-line `// uni.showToast({...})` comments into a block
//! that mirrors the layout of the original call.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::Rewrite;

/// A commented call. Group 1 is the leading whitespace, group 2 the text
/// between `({` and the first `})`.
#[allow(clippy::expect_used)]
static COMMENTED_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\s*)// uni\.showToast\(\{([^}]*?)\}\)").expect("valid regex")
});

/// The toast-comment reformatter.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReformatPass;

impl Rewrite for ReformatPass {
    fn name(&self) -> &'static str {
        "reformat"
    }

    fn banner(&self) -> &'static str {
        "Fixing uni.showToast comments..."
    }

    fn verb(&self) -> &'static str {
        "fixed"
    }

    fn apply<'a>(&self, content: &'a str) -> Cow<'a, str> {
        reformat_toast_comments(content)
    }
}

/// Rewrite every commented call as an open line, one `//\t` line per
/// non-empty parameter fragment, and a closing `// })`.
pub fn reformat_toast_comments(content: &str) -> Cow<'_, str> {
    let result = COMMENTED_CALL.replace_all(content, |caps: &Captures<'_>| {
        expand_block(&caps[1], &caps[2])
    });

    match result {
        Cow::Owned(text) if text != content => Cow::Owned(text),
        _ => Cow::Borrowed(content),
    }
}

fn expand_block(lead: &str, params: &str) -> String {
    // Continuation lines take only the horizontal part of the lead.
    let indent = lead.rfind('\n').map_or(lead, |i| &lead[i + 1..]);

    let mut block = String::with_capacity(lead.len() + params.len() + 64);
    block.push_str(lead);
    block.push_str("// uni.showToast({\n");
    for fragment in params.split('\n').map(str::trim).filter(|f| !f.is_empty()) {
        block.push_str(indent);
        block.push_str("//\t");
        block.push_str(fragment);
        block.push('\n');
    }
    block.push_str(indent);
    block.push_str("// })");
    block
}

#[cfg(test)]
#[path = "reformat_tests.rs"]
mod tests;
