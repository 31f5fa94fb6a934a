pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod output;
pub mod reader;
pub mod rewrite;
pub mod runner;
pub mod walker;
pub mod writer;

pub use cli::{Cli, Command, PassArgs};
pub use color::ColorMode;
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use output::Reporter;
pub use reader::FileReader;
pub use rewrite::{ReformatPass, RemovePass, Rewrite};
pub use runner::{FileOutcome, RunSummary, Runner};
pub use walker::{FileWalker, WalkStats, WalkedFile, WalkerConfig};
