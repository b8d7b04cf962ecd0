// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! The per-family constants live with their families in
//! [`crate::variant`]; everything else is here.

/// Config schema version understood by this build.
pub const VERSION: i64 = 1;

/// Config file looked up by [`crate::discovery::find_config`].
pub const CONFIG_FILE: &str = "twostage.toml";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "TWOSTAGE_CONFIG";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "TWOSTAGE_LOG";
