// Copyright (c) The sop-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Errors reported by cube construction, the literal table, and the
/// expression parser.
///
/// Width mismatches cannot occur at runtime: the cube width is a const
/// generic, so mixing widths is rejected by the compiler.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A numeric cube entry was not one of 0 (false), 1 (true) or 2
    /// (don't-care).
    #[error("invalid numeric cube entry '{value}' at position {position}: must be 0, 1 or 2")]
    InvalidCubeNumeric { value: u8, position: usize },

    /// More literal names were supplied than the table can hold.
    #[error("too many literal names ({count}) for a table of capacity {capacity}")]
    TooManyLiterals { count: usize, capacity: usize },

    /// A new literal name was requested after the table reached capacity.
    #[error("literal table is full (capacity {capacity}); cannot add '{name}'")]
    LiteralTableFull { name: String, capacity: usize },

    /// A strict lookup named a literal that is not registered.
    #[error("unknown literal '{name}'")]
    UnknownLiteral { name: String },

    /// The parser encountered a character it cannot start a token with.
    #[error("unexpected character '{found}' at byte {position}")]
    UnexpectedCharacter { found: char, position: usize },

    /// The parser ran out of input mid-expression.
    #[error("unexpected end of expression")]
    UnexpectedEnd,
}
