// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `twostage run` command implementation.

use serde::Serialize;

use twostage::cli::{Cli, OutputFormat, RunArgs};
use twostage::{Number, Variant};

use crate::cmd_config::resolve_config;

/// JSON shape of a run.
#[derive(Serialize)]
struct RunReport {
    variant: Variant,
    x: Number,
    y: Number,
    combined: Number,
    constant: Number,
    result: Number,
}

/// Run the `twostage run` command.
pub fn run(cli: &Cli, args: &RunArgs) -> anyhow::Result<()> {
    let mut config = resolve_config(cli)?;

    // CLI flags override file values. A new variant without a new constant
    // falls back to that variant's default rather than the old constant.
    if let Some(variant) = args.variant.filter(|v| *v != config.pipeline.variant) {
        config.pipeline.variant = variant;
        config.pipeline.constant = None;
    }
    if let Some(constant) = args.constant {
        config.pipeline.constant = Some(constant);
    }

    let pipeline = config.pipeline()?;
    let stages = pipeline.run(args.x, args.y)?;

    match args.output {
        OutputFormat::Text => println!("{}", stages.result),
        OutputFormat::Json => {
            let report = RunReport {
                variant: pipeline.variant(),
                x: args.x,
                y: args.y,
                combined: stages.combined,
                constant: pipeline.constant(),
                result: stages.result,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
