// Copyright (c) The sop-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Boolean function representation and minimization in positional-cube
//! notation: cube algebra, sum-of-products covers, consensus-based prime
//! implicant generation, and unate-recursive complementation and tautology
//! checking.

pub mod cube;
pub mod errors;
pub mod logic_function;
pub mod parse;
pub mod sop;
pub mod vars;

#[cfg(any(test, feature = "proptest1"))]
mod proptest_helpers;
