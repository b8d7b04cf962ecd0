// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The composed pipeline: `scale(combine(x, y))`.

use serde::Serialize;

use crate::error::Result;
use crate::number::Number;
use crate::variant::Variant;

/// A variant family bound to the constant its scale stage uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipeline {
    variant: Variant,
    constant: Number,
}

/// Intermediate and final values of one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stages {
    /// Output of the combine stage.
    pub combined: Number,
    /// Output of the scale stage.
    pub result: Number,
}

impl Pipeline {
    /// Pipeline using the family's default constant.
    pub fn new(variant: Variant) -> Self {
        Self { variant, constant: variant.default_constant() }
    }

    /// Replace the constant. Not validated here; a zero divisor surfaces as
    /// an error from [`Pipeline::run`], or earlier via [`Pipeline::validate`].
    #[must_use]
    pub fn with_constant(mut self, constant: Number) -> Self {
        self.constant = constant;
        self
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn constant(&self) -> Number {
        self.constant
    }

    /// Check the constant against the family's divisor policy.
    pub fn validate(&self) -> Result<()> {
        self.variant.scale_op().validate(self.constant)
    }

    /// Run both stages. Errors from the scale stage propagate unchanged.
    pub fn run(&self, x: Number, y: Number) -> Result<Stages> {
        let combined = self.variant.combine(x, y);
        let result = self.variant.scale(combined, Some(self.constant))?;
        Ok(Stages { combined, result })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
