// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `twostage config` command implementation.

use serde_json::json;

use twostage::cli::{Cli, ConfigArgs, OutputFormat};
use twostage::config::{self, Config};
use twostage::discovery;

/// Load config from `--config`/`TWOSTAGE_CONFIG`, else a discovered
/// twostage.toml, else defaults.
pub fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    if let Some(path) = &cli.config {
        return config::load(path);
    }
    let cwd = std::env::current_dir()?;
    match discovery::find_config(&cwd) {
        Some(path) => {
            tracing::debug!("using config {}", path.display());
            config::load(&path)
        }
        None => Ok(Config::default()),
    }
}

/// Run the `twostage config` command.
pub fn run(cli: &Cli, args: &ConfigArgs) -> anyhow::Result<()> {
    let pipeline = resolve_config(cli)?.pipeline()?;

    match args.output {
        OutputFormat::Text => {
            println!("variant = {}", pipeline.variant());
            println!("constant = {}", pipeline.constant());
        }
        OutputFormat::Json => {
            let value = json!({
                "variant": pipeline.variant(),
                "constant": pipeline.constant(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}
