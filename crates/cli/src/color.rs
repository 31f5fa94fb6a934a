// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. `--no-color` / `--color` flags
//! 2. NO_COLOR env var → no color
//! 3. COLOR env var → use color
//! 4. default: color only when stdout is a TTY outside CI

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// Color mode requested on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Force color output.
    Always,
    /// Disable color output.
    Never,
    /// Decide from environment and TTY.
    #[default]
    Auto,
}

impl ColorMode {
    /// Build from the `--color` / `--no-color` flag pair. `--no-color` wins.
    pub fn from_flags(color: bool, no_color: bool) -> Self {
        match (color, no_color) {
            (_, true) => ColorMode::Never,
            (true, false) => ColorMode::Always,
            (false, false) => ColorMode::Auto,
        }
    }

    /// Resolve to a termcolor choice.
    pub fn resolve(self) -> ColorChoice {
        match self {
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto => resolve_color(),
        }
    }
}

/// Resolve color choice from environment variables.
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` set to any value
/// (including empty string) disables color.
pub fn resolve_color() -> ColorChoice {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    if std::env::var_os("COLOR").is_some() {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() || std::env::var_os("CI").is_some() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Color scheme for report lines.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Cyan file path.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Red bold "error" label.
    pub fn error() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Green bold modified-file count.
    pub fn count() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
