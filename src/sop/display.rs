// Copyright (c) The sop-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    cube::{canonical_order, Cube},
    sop::Sop,
    vars::VarTable,
};
use itertools::{Itertools, Position};
use std::fmt;

/// Canonical rendering of an SOP: cubes sorted (sentinels first, then fewest
/// defined literals, then first literal index, then polarity) and joined by
/// `" + "`. The empty SOP renders as `"0"` and `{ONE}` as `"1"`.
pub struct SopDisplay<'a, const N: usize> {
    sop: &'a Sop<N>,
    vars: &'a VarTable<N>,
    verbose: bool,
}

impl<'a, const N: usize> SopDisplay<'a, N> {
    pub(super) fn new(sop: &'a Sop<N>, vars: &'a VarTable<N>) -> Self {
        Self {
            sop,
            vars,
            verbose: false,
        }
    }

    /// Also renders don't-care positions within each cube, as `-`.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl<'a, const N: usize> fmt::Display for SopDisplay<'a, N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.sop.is_zero() {
            return write!(f, "0");
        }

        let mut cubes: Vec<&Cube<N>> = self.sop.elements().iter().collect();
        cubes.sort_by(|a, b| canonical_order(a, b));

        for elem in cubes.into_iter().with_position() {
            match elem {
                Position::First(cube) | Position::Middle(cube) => {
                    write!(f, "{} + ", cube.display(self.vars).verbose(self.verbose))?;
                }
                Position::Last(cube) | Position::Only(cube) => {
                    write!(f, "{}", cube.display(self.vars).verbose(self.verbose))?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sop(numeric: impl IntoIterator<Item = [u8; 3]>) -> Sop<3> {
        Sop::from_numeric(numeric).unwrap()
    }

    #[test]
    fn test_constants() {
        let vars = VarTable::<3>::new();
        assert_eq!(Sop::<3>::zero().display(&vars).to_string(), "0");
        assert_eq!(Sop::<3>::one().display(&vars).to_string(), "1");
    }

    #[test]
    fn test_cube_ordering() {
        let vars = VarTable::<3>::new();

        // Fewer defined literals sort first.
        let f = sop([[1, 0, 1], [2, 1, 2]]);
        assert_eq!(f.display(&vars).to_string(), "b + a~bc");

        // Same count: earlier first-literal index sorts first.
        let f = sop([[2, 0, 0], [0, 1, 2]]);
        assert_eq!(f.display(&vars).to_string(), "~ab + ~b~c");

        // Same count and index: asserted before negated.
        let f = sop([[1, 0, 1], [1, 1, 1]]);
        assert_eq!(f.display(&vars).to_string(), "abc + a~bc");
    }

    #[test]
    fn test_verbose() {
        let vars = VarTable::<3>::new();
        let f = sop([[1, 2, 0]]);
        assert_eq!(f.display(&vars).to_string(), "a~c");
        assert_eq!(f.display(&vars).verbose(true).to_string(), "a-~c");
    }
}
