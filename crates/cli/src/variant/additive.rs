// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Additive family: `(x + y) * constant`.

use crate::combine::CombineOp;
use crate::number::Number;
use crate::scale::ScaleOp;

/// Multiplier used by [`scale`].
pub const DEFAULT_CONSTANT: Number = Number::Int(10);

/// `x + y`
pub fn combine(x: impl Into<Number>, y: impl Into<Number>) -> Number {
    CombineOp::Add.apply(x.into(), y.into())
}

/// `value * 10`
pub fn scale(value: impl Into<Number>) -> Number {
    scale_with(value, DEFAULT_CONSTANT)
}

/// `value * constant`
pub fn scale_with(value: impl Into<Number>, constant: impl Into<Number>) -> Number {
    ScaleOp::Multiply.compute(value.into(), constant.into())
}
