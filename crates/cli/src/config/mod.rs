// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading from `twostage.toml`.
//!
//! ```toml
//! version = 1
//!
//! [pipeline]
//! variant = "subtractive"
//! constant = 2.5
//! ```

pub mod defaults;

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::number::Number;
use crate::pipeline::Pipeline;
use crate::variant::Variant;

/// Root of `twostage.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Schema version, must be [`defaults::VERSION`].
    #[serde(default = "Config::default_version")]
    pub version: i64,

    /// Pipeline settings.
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// `[pipeline]` table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Operator family.
    #[serde(default)]
    pub variant: Variant,

    /// Scale constant (None = family default).
    #[serde(default)]
    pub constant: Option<Number>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            pipeline: PipelineConfig::default(),
        }
    }
}

impl Config {
    fn default_version() -> i64 {
        defaults::VERSION
    }

    /// Build the configured pipeline, rejecting a constant the family
    /// cannot use.
    pub fn pipeline(&self) -> Result<Pipeline> {
        let mut pipeline = Pipeline::new(self.pipeline.variant);
        if let Some(constant) = self.pipeline.constant {
            pipeline = pipeline.with_constant(constant);
        }
        pipeline.validate()?;
        Ok(pipeline)
    }
}

/// Parse config text.
pub fn parse(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    if config.version != defaults::VERSION {
        return Err(Error::UnsupportedVersion(config.version));
    }
    tracing::debug!(
        variant = %config.pipeline.variant,
        constant = ?config.pipeline.constant,
        "parsed config"
    );
    Ok(config)
}

/// Read and parse a config file.
pub fn load(path: &Path) -> anyhow::Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = parse(&content).with_context(|| format!("failed to load {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
