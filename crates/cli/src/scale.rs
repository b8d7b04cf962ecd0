// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stage B: scale the combined value by a constant.
//!
//! Multiplication accepts any constant. Division rejects a constant equal to
//! zero with [`Error::InvalidArgument`]; negative and fractional constants
//! are fine.

use crate::error::{Error, Result};
use crate::number::Number;

/// Operator applied by the scale stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleOp {
    /// `value * constant`
    Multiply,
    /// `value / constant`, always a float.
    Divide,
}

impl ScaleOp {
    /// Check that `constant` is usable with this operator.
    pub fn validate(self, constant: Number) -> Result<()> {
        if self == ScaleOp::Divide && constant.is_zero() {
            return Err(Error::InvalidArgument(Error::ZERO_CONSTANT));
        }
        Ok(())
    }

    /// Apply the operator.
    pub fn apply(self, value: Number, constant: Number) -> Result<Number> {
        self.validate(constant)?;
        Ok(self.compute(value, constant))
    }

    /// Apply the operator to a constant already known to be valid.
    pub(crate) fn compute(self, value: Number, constant: Number) -> Number {
        let scaled = match self {
            ScaleOp::Multiply => value * constant,
            ScaleOp::Divide => value / constant,
        };
        tracing::debug!(op = self.symbol(), %value, %constant, %scaled, "scale");
        scaled
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ScaleOp::Multiply => "*",
            ScaleOp::Divide => "/",
        }
    }
}

#[cfg(test)]
#[path = "scale_tests.rs"]
mod tests;
