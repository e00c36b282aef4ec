// Copyright (c) The sop-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::Error;
use arrayvec::ArrayVec;
use std::borrow::Cow;

const ASCII_SYMBOLS: [char; 52] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L',
    'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Ordered registry mapping literal names to cube positions.
///
/// One table is shared by all cubes of a given width-N configuration. Names
/// are registered incrementally as they are first seen; position `i` in the
/// table corresponds to position `i` of every cube. The table holds at most N
/// names, and interning a new name into a full table is an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VarTable<const N: usize> {
    names: ArrayVec<String, N>,
}

impl<const N: usize> VarTable<N> {
    pub const CAPACITY: usize = N;

    /// An empty table; names are assigned on first use via [`intern`].
    ///
    /// [`intern`]: Self::intern
    pub fn new() -> Self {
        Self {
            names: ArrayVec::new(),
        }
    }

    /// A table pre-seeded with an ordered name prefix.
    pub fn with_names<I, S>(names: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        let mut count = 0;
        for name in names {
            count += 1;
            if table.names.try_push(name.into()).is_err() {
                return Err(Error::TooManyLiterals {
                    count,
                    capacity: N,
                });
            }
        }
        Ok(table)
    }

    /// Returns the position of `name`, registering it if unseen.
    pub fn intern(&mut self, name: &str) -> Result<usize, Error> {
        if let Some(ix) = self.index_of(name) {
            return Ok(ix);
        }
        if self.names.is_full() {
            return Err(Error::LiteralTableFull {
                name: name.to_owned(),
                capacity: N,
            });
        }
        self.names.push(name.to_owned());
        Ok(self.names.len() - 1)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Like [`index_of`], but a missing name is an error rather than a
    /// registration opportunity.
    ///
    /// [`index_of`]: Self::index_of
    pub fn lookup(&self, name: &str) -> Result<usize, Error> {
        self.index_of(name).ok_or_else(|| Error::UnknownLiteral {
            name: name.to_owned(),
        })
    }

    /// Number of names registered so far.
    pub fn named_count(&self) -> usize {
        self.names.len()
    }

    /// A full set of N display names: the registered names, then positions
    /// filled with unused ascii letters, then synthesized multi-character
    /// symbols once the alphabet runs out.
    pub fn display_names(&self) -> ArrayVec<Cow<'_, str>, N> {
        let mut result: ArrayVec<Cow<'_, str>, N> =
            self.names.iter().map(|n| Cow::Borrowed(n.as_str())).collect();

        let mut candidates = generated_symbols().filter(|sym| self.names.iter().all(|n| n != sym));
        while result.len() < N {
            let sym = candidates
                .next()
                .expect("symbol generator is unbounded");
            result.push(Cow::Owned(sym));
        }
        result
    }
}

/// Unbounded symbol stream: `a..z`, `A..Z`, then `aa`, `ab`, ...
fn generated_symbols() -> impl Iterator<Item = String> {
    (0..).map(|ix| {
        if ix < ASCII_SYMBOLS.len() {
            ASCII_SYMBOLS[ix].to_string()
        } else {
            let mut rest = ix - ASCII_SYMBOLS.len();
            let mut symbol = String::new();
            loop {
                symbol.insert(0, ASCII_SYMBOLS[rest % 26]);
                rest /= 26;
                if rest == 0 {
                    break;
                }
                rest -= 1;
            }
            symbol.insert(0, 'a');
            symbol
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_assigns_positions_in_order() {
        let mut table = VarTable::<3>::new();
        assert_eq!(table.intern("x"), Ok(0));
        assert_eq!(table.intern("y"), Ok(1));
        assert_eq!(table.intern("x"), Ok(0));
        assert_eq!(table.intern("z"), Ok(2));
        assert_eq!(
            table.intern("w"),
            Err(Error::LiteralTableFull {
                name: "w".to_owned(),
                capacity: 3
            })
        );
    }

    #[test]
    fn test_lookup_does_not_register() {
        let table = VarTable::<3>::with_names(["x", "y"]).unwrap();
        assert_eq!(table.lookup("y"), Ok(1));
        assert_eq!(
            table.lookup("z"),
            Err(Error::UnknownLiteral {
                name: "z".to_owned()
            })
        );
        assert_eq!(table.named_count(), 2);
    }

    #[test]
    fn test_with_names_overflow() {
        let err = VarTable::<2>::with_names(["a", "b", "c"]).unwrap_err();
        assert_eq!(
            err,
            Error::TooManyLiterals {
                count: 3,
                capacity: 2
            }
        );
    }

    #[test]
    fn test_display_names_autofill() {
        let table = VarTable::<6>::new();
        let names = table.display_names();
        assert_eq!(names.as_slice(), ["a", "b", "c", "d", "e", "f"]);

        let table = VarTable::<4>::with_names(["b", "out"]).unwrap();
        let names = table.display_names();
        // "b" is taken, so the fill skips it.
        assert_eq!(names.as_slice(), ["b", "out", "a", "c"]);
    }

    #[test]
    fn test_display_names_beyond_alphabet() {
        let table = VarTable::<54>::new();
        let names = table.display_names();
        assert_eq!(names[51], "Z");
        assert_eq!(names[52], "aa");
        assert_eq!(names[53], "ab");
    }
}
