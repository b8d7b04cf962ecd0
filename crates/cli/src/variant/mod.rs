// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Variant families.
//!
//! A family fixes both stage operators, the default constant, and the
//! divisor policy together. The two families are never mixed: an additive
//! pipeline cannot pick up the subtractive default, and vice versa.

pub mod additive;
pub mod subtractive;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::combine::CombineOp;
use crate::error::Result;
use crate::number::Number;
use crate::scale::ScaleOp;

/// Operator family for the two stages.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Combine by addition, scale by multiplication (default constant 10).
    #[default]
    Additive,
    /// Combine by subtraction, scale by division (default constant 5).
    Subtractive,
}

impl Variant {
    pub fn combine_op(self) -> CombineOp {
        match self {
            Variant::Additive => CombineOp::Add,
            Variant::Subtractive => CombineOp::Subtract,
        }
    }

    pub fn scale_op(self) -> ScaleOp {
        match self {
            Variant::Additive => ScaleOp::Multiply,
            Variant::Subtractive => ScaleOp::Divide,
        }
    }

    /// Constant used when the caller does not supply one.
    pub fn default_constant(self) -> Number {
        match self {
            Variant::Additive => additive::DEFAULT_CONSTANT,
            Variant::Subtractive => subtractive::DEFAULT_CONSTANT,
        }
    }

    /// Stage A for this family.
    pub fn combine(self, x: Number, y: Number) -> Number {
        self.combine_op().apply(x, y)
    }

    /// Stage B for this family; `None` selects [`Variant::default_constant`].
    pub fn scale(self, value: Number, constant: Option<Number>) -> Result<Number> {
        let constant = constant.unwrap_or_else(|| self.default_constant());
        self.scale_op().apply(value, constant)
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Additive => "additive",
            Variant::Subtractive => "subtractive",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
