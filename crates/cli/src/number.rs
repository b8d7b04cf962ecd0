// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Numeric values flowing through the pipeline.
//!
//! A [`Number`] is either an integer or a float. Arithmetic follows the usual
//! promotion rule: if either operand is a float the result is a float,
//! otherwise it stays an integer. Division is the exception and always
//! yields a float.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// A signed real value: integer or floating-point.
///
/// Equality is structural: `Int(2) != Float(2.0)`, so the kind of a result
/// is part of what tests compare. Use [`Number::eq_numeric`] to compare by
/// value alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Whole number. Sums and products of `i64` operands never leave this
    /// range.
    Int(i128),
    /// IEEE double-precision value.
    Float(f64),
}

impl Number {
    /// True when the value is stored as a float.
    pub fn is_float(self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// True for integer `0`, `0.0` and `-0.0`.
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(v) => v == 0,
            Number::Float(v) => v == 0.0,
        }
    }

    /// Compare by value, ignoring kind: `Int(2)` equals `Float(2.0)`.
    pub fn eq_numeric(self, other: Number) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }

    /// Widen to `f64`. Integers beyond 2^53 lose precision.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    /// Multiplicative inverse, always a float.
    pub fn recip(self) -> Number {
        Number::Float(1.0 / self.as_f64())
    }

    /// Integer arithmetic when both sides are integers, float otherwise.
    ///
    /// `i128` overflow is redone in `f64` so the operation stays total.
    fn promote(
        self,
        rhs: Number,
        op: &'static str,
        checked: fn(i128, i128) -> Option<i128>,
        float: fn(f64, f64) -> f64,
    ) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => match checked(a, b) {
                Some(v) => Number::Int(v),
                None => {
                    tracing::warn!(lhs = a, rhs = b, "integer {} overflowed, using float", op);
                    Number::Float(float(a as f64, b as f64))
                }
            },
            _ => Number::Float(float(self.as_f64(), rhs.as_f64())),
        }
    }
}

macro_rules! promoting_op {
    ($trait_name:ident, $method:ident, $checked:ident, $sym:tt) => {
        impl $trait_name for Number {
            type Output = Number;

            #[inline]
            fn $method(self, rhs: Number) -> Number {
                self.promote(rhs, stringify!($method), i128::$checked, |a, b| a $sym b)
            }
        }
    };
}

promoting_op!(Add, add, checked_add, +);
promoting_op!(Sub, sub, checked_sub, -);
promoting_op!(Mul, mul, checked_mul, *);

/// True division. No zero check here; callers that forbid a zero divisor
/// validate before dividing.
impl Div for Number {
    type Output = Number;

    #[inline]
    fn div(self, rhs: Number) -> Number {
        Number::Float(self.as_f64() / rhs.as_f64())
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::Int(i128::from(v))
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Number::Int(i128::from(v))
    }
}

impl From<i128> for Number {
    fn from(v: i128) -> Self {
        Number::Int(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

/// Floats are written in positional notation and, when finite, always carry
/// a decimal point (`5.0`, `10000000000000000.0`, `0.0000001`), so the kind
/// of a printed value is never ambiguous. Non-finite floats print as `inf`,
/// `-inf` and `NaN`.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{v}"),
            Number::Float(v) => {
                let text = v.to_string();
                if v.is_finite() && !text.contains('.') {
                    write!(f, "{text}.0")
                } else {
                    f.write_str(&text)
                }
            }
        }
    }
}

/// Integers serialize as `i64` when they fit, so formats without 128-bit
/// support still accept every value the pipeline produces from `i64` input.
impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Number::Int(v) => match i64::try_from(v) {
                Ok(small) => serializer.serialize_i64(small),
                Err(_) => serializer.serialize_i128(v),
            },
            Number::Float(v) => serializer.serialize_f64(v),
        }
    }
}

struct NumberVisitor;

impl<'de> Visitor<'de> for NumberVisitor {
    type Value = Number;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a float")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Number, E> {
        Ok(Number::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Number, E> {
        Ok(Number::Int(i128::from(v)))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Number, E> {
        Ok(Number::Int(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Number, E> {
        i128::try_from(v)
            .map(Number::Int)
            .map_err(|_| E::custom(format!("integer {v} out of range")))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Number, E> {
        Ok(Number::Float(v))
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NumberVisitor)
    }
}

impl FromStr for Number {
    type Err = Error;

    /// Integer literals parse as [`Number::Int`]; anything else `f64`
    /// accepts parses as [`Number::Float`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(v) = s.parse::<i128>() {
            return Ok(Number::Int(v));
        }
        s.parse::<f64>()
            .map(Number::Float)
            .map_err(|_| Error::InvalidNumber(s.to_string()))
    }
}

#[cfg(test)]
#[path = "number_tests.rs"]
mod tests;
