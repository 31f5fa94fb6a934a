// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;
use crate::rewrite::{ReformatPass, RemovePass, Rewrite};

/// Comment out and reformat uni.showToast calls across a front-end source tree
#[derive(Parser)]
#[command(name = "detoast")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "DETOAST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Force color output
    #[arg(long, global = true)]
    pub color: bool,

    /// Disable color output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn color_mode(&self) -> ColorMode {
        ColorMode::from_flags(self.color, self.no_color)
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Replace uni.showToast calls with a marker comment
    Remove(PassArgs),
    /// Expand single-line commented uni.showToast calls into blocks
    Reformat(PassArgs),
}

impl Command {
    /// The pass this subcommand runs.
    pub fn pass(&self) -> &'static dyn Rewrite {
        match self {
            Command::Remove(_) => &RemovePass,
            Command::Reformat(_) => &ReformatPass,
        }
    }

    pub fn args(&self) -> &PassArgs {
        match self {
            Command::Remove(args) | Command::Reformat(args) => args,
        }
    }
}

#[derive(clap::Args)]
pub struct PassArgs {
    /// Directory to scan (default: `root` from detoast.toml, else `src`)
    #[arg(value_name = "PATH", env = "DETOAST_ROOT")]
    pub path: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
