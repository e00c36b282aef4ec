// Copyright (c) The sop-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{cube::Cube, sop::Sop};

/// An incompletely specified boolean function: the on-set holds the inputs
/// where the function is 1, the dc-set the inputs where its value is
/// unconstrained. The two sets are assumed disjoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogicFunction<const N: usize> {
    pub on_set: Sop<N>,
    pub dc_set: Sop<N>,
}

impl<const N: usize> LogicFunction<N> {
    pub fn new(on_set: Sop<N>, dc_set: Sop<N>) -> Self {
        Self { on_set, dc_set }
    }

    /// A completely specified function: the dc-set is empty.
    pub fn completely_specified(on_set: Sop<N>) -> Self {
        Self {
            on_set,
            dc_set: Sop::zero(),
        }
    }

    /// The prime implicants of the function.
    ///
    /// Don't-care minterms may let an implicant of the on-set expand
    /// further, so the closure is computed over the union of both sets;
    /// primes that cover only don't-care minterms are then discarded.
    pub fn prime_implicants(&self) -> Sop<N> {
        if self.on_set.is_tautology() {
            return Sop::one();
        }
        if self.on_set.is_zero() {
            return Sop::zero();
        }
        let f_on = self.on_set.complete();
        let f_dc = self.dc_set.complete();
        &(&f_on | &f_dc).complete() - &f_dc
    }

    /// Whether `cube` is one of the function's prime implicants.
    pub fn is_prime(&self, cube: &Cube<N>) -> bool {
        self.prime_implicants().elements().contains(cube)
    }
}

impl<const N: usize> Sop<N> {
    /// Whether `cube` is a prime implicant of the function whose on-set is
    /// this SOP and whose dc-set is `dc_set`.
    pub fn is_prime(&self, dc_set: &Self, cube: &Cube<N>) -> bool {
        LogicFunction::new(self.clone(), dc_set.clone()).is_prime(cube)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sop(numeric: impl IntoIterator<Item = [u8; 3]>) -> Sop<3> {
        Sop::from_numeric(numeric).unwrap()
    }

    fn cube(numeric: [u8; 3]) -> Cube<3> {
        Cube::from_numeric(numeric).unwrap()
    }

    #[test]
    fn test_completely_specified_primes() {
        // ab + ~ac closes over the consensus bc.
        let f = LogicFunction::completely_specified(sop([[1, 1, 2], [0, 2, 1]]));
        let primes = f.prime_implicants();
        assert_eq!(primes, sop([[1, 1, 2], [0, 2, 1], [2, 1, 1]]));

        assert!(f.is_prime(&cube([2, 1, 1])));
        assert!(f.is_prime(&cube([1, 1, 2])));
        // abc is an implicant but not prime.
        assert!(!f.is_prime(&cube([1, 1, 1])));
    }

    #[test]
    fn test_dont_cares_expand_primes() {
        // On-set ab, dc-set a~b: together they make `a` prime.
        let f = LogicFunction::new(sop([[1, 1, 2]]), sop([[1, 0, 2]]));
        let primes = f.prime_implicants();
        assert!(primes.elements().contains(&cube([1, 2, 2])));
        // The bare on-set cube is no longer prime.
        assert!(!f.is_prime(&cube([1, 1, 2])));
    }

    #[test]
    fn test_degenerate_functions() {
        let taut = LogicFunction::completely_specified(Sop::<3>::one());
        assert_eq!(taut.prime_implicants(), Sop::one());

        let never = LogicFunction::completely_specified(Sop::<3>::zero());
        assert_eq!(never.prime_implicants(), Sop::zero());
        assert!(!never.is_prime(&cube([1, 2, 2])));
    }

    #[test]
    fn test_sop_is_prime_convenience() {
        let on = sop([[1, 1, 2], [0, 2, 1]]);
        assert!(on.is_prime(&Sop::zero(), &cube([2, 1, 1])));
        assert!(!on.is_prime(&Sop::zero(), &cube([1, 1, 1])));
    }
}
