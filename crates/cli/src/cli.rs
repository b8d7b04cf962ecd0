// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::defaults::CONFIG_ENV;
use crate::number::Number;
use crate::variant::Variant;

/// Combine two operands, then scale the result by a constant
#[derive(Parser)]
#[command(name = "twostage")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the pipeline on two operands
    Run(RunArgs),
    /// Show the resolved pipeline settings
    Config(ConfigArgs),
}

#[derive(clap::Args)]
pub struct RunArgs {
    /// First operand
    #[arg(value_name = "X", allow_negative_numbers = true)]
    pub x: Number,

    /// Second operand
    #[arg(value_name = "Y", allow_negative_numbers = true)]
    pub y: Number,

    /// Operator family (overrides config)
    #[arg(long)]
    pub variant: Option<Variant>,

    /// Scale constant (overrides config)
    #[arg(long, allow_negative_numbers = true, value_name = "C")]
    pub constant: Option<Number>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct ConfigArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
