// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Resolves which twostage.toml applies to a working directory.

use std::path::{Path, PathBuf};

use crate::config::defaults::CONFIG_FILE;

/// Nearest twostage.toml at or above `start_dir`.
///
/// The search ends at the first directory holding `.git`; a config above the
/// repository root never applies to it.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
