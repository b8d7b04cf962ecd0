// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subtractive family: `(x - y) / constant`.

use crate::combine::CombineOp;
use crate::error::Result;
use crate::number::Number;
use crate::scale::ScaleOp;

/// Divisor used by [`scale`].
pub const DEFAULT_CONSTANT: Number = Number::Int(5);

/// `x - y`
pub fn combine(x: impl Into<Number>, y: impl Into<Number>) -> Number {
    CombineOp::Subtract.apply(x.into(), y.into())
}

/// `value / 5`, always a float.
pub fn scale(value: impl Into<Number>) -> Number {
    ScaleOp::Divide.compute(value.into(), DEFAULT_CONSTANT)
}

/// `value / constant`, always a float.
///
/// Fails with [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
/// `constant` is zero.
pub fn scale_with(value: impl Into<Number>, constant: impl Into<Number>) -> Result<Number> {
    ScaleOp::Divide.apply(value.into(), constant.into())
}
