// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A two-stage numeric pipeline.
//!
//! Stage A combines two operands, stage B scales the result by a constant:
//!
//! ```
//! use twostage::{Number, additive, subtractive};
//!
//! assert_eq!(additive::scale(additive::combine(5, 7)), Number::Int(120));
//! assert_eq!(subtractive::scale(subtractive::combine(10, 4)), Number::Float(1.2));
//! assert!(subtractive::scale_with(subtractive::combine(15, 5), 0).is_err());
//! ```

pub mod cli;
pub mod combine;
pub mod config;
pub mod discovery;
pub mod error;
pub mod number;
pub mod pipeline;
pub mod scale;
pub mod variant;

#[cfg(test)]
pub mod test_utils;

pub use error::{Error, Result};
pub use number::Number;
pub use pipeline::{Pipeline, Stages};
pub use variant::{Variant, additive, subtractive};
