// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stage A: combine two operands under a fixed binary operator.

use crate::number::Number;

/// Operator applied by the combine stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineOp {
    /// `x + y`
    Add,
    /// `x - y`
    Subtract,
}

impl CombineOp {
    /// Apply the operator. Total over all inputs.
    pub fn apply(self, x: Number, y: Number) -> Number {
        let combined = match self {
            CombineOp::Add => x + y,
            CombineOp::Subtract => x - y,
        };
        tracing::debug!(op = self.symbol(), %x, %y, %combined, "combine");
        combined
    }

    pub fn symbol(self) -> &'static str {
        match self {
            CombineOp::Add => "+",
            CombineOp::Subtract => "-",
        }
    }
}

#[cfg(test)]
#[path = "combine_tests.rs"]
mod tests;
