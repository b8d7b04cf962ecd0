// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;
use tracing_subscriber::EnvFilter;

use twostage::cli::{Cli, Command};
use twostage::config::defaults::LOG_ENV;

mod cmd_config;
mod cmd_run;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::Run(args) => cmd_run::run(&cli, args),
        Command::Config(args) => cmd_config::run(&cli, args),
    }
}

/// Log to stderr, filtered by `TWOSTAGE_LOG` (default `warn`, or `debug`
/// with `--verbose`).
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
