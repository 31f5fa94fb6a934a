// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Detoast CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use detoast::cli::Cli;
use detoast::error::ExitCode;
use detoast::{FileWalker, Reporter, Runner, config};

fn init_logging() {
    let filter = EnvFilter::try_from_env("DETOAST_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("detoast: {}", e);
            match e.downcast_ref::<detoast::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let Some(command) = &cli.command else {
        // Show help for bare invocation
        Cli::command().print_help()?;
        println!();
        return Ok(ExitCode::Success);
    };

    let cwd = std::env::current_dir()?;
    let config = config::resolve(cli.config.as_deref(), &cwd)?;

    let root = command
        .args()
        .path
        .clone()
        .unwrap_or_else(|| config.root.clone());
    tracing::debug!(root = %root.display(), pass = command.pass().name(), "starting run");

    let runner = Runner::new(FileWalker::with_excludes(&config.exclude));
    let mut reporter = Reporter::stdout(cli.color_mode().resolve());
    let summary = runner.run(command.pass(), &root, &mut reporter);

    tracing::debug!(
        modified = summary.modified,
        unchanged = summary.unchanged,
        failed = summary.failed,
        walk_errors = summary.walk.errors,
        "run complete"
    );

    // Per-file and report failures are logged, not fatal
    Ok(ExitCode::Success)
}
