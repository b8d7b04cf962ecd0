// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types.

use thiserror::Error;

/// Errors produced by the pipeline and its configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument makes the operation undefined, e.g. a zero divisor.
    #[error("{0}")]
    InvalidArgument(&'static str),

    /// Text that is neither an integer nor a float literal.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// Malformed or unknown configuration.
    #[error("invalid config: {0}")]
    Config(String),

    /// Config `version` this build does not understand.
    #[error("unsupported config version {0} (expected {expected})", expected = crate::config::defaults::VERSION)]
    UnsupportedVersion(i64),
}

impl Error {
    /// Message carried by [`Error::InvalidArgument`] for a zero divisor.
    pub const ZERO_CONSTANT: &'static str = "Constant cannot be zero.";

    /// True for [`Error::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.message().to_string())
    }
}

/// Result alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
