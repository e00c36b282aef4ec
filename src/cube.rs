// Copyright (c) The sop-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{errors::Error, sop::Sop, vars::VarTable};
use std::{
    cmp::Ordering,
    fmt,
    ops::{BitAnd, Not},
};

/// A product term over N literals in positional-cube notation.
///
/// A cube is either the always-false sentinel [`Cube::Zero`] or a ternary
/// vector of exactly N entries, one per literal position: `Some(true)` for an
/// asserted literal, `Some(false)` for a negated literal, `None` for a
/// don't-care. The all-don't-care vector is the always-true sentinel `ONE`,
/// the identity for the cube product.
///
/// Cubes are value objects: equality is element-wise and a cube is never
/// mutated after construction. The derived `Ord` is structural (it makes
/// cubes storable in ordered sets); use [`contains`](Self::contains) for the
/// containment partial order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cube<const N: usize> {
    Zero,
    Term([Option<bool>; N]),
}

impl<const N: usize> Cube<N> {
    pub const WIDTH: usize = N;

    /// The always-false sentinel.
    #[inline]
    pub fn zero() -> Self {
        Cube::Zero
    }

    /// The always-true sentinel (all positions don't-care).
    #[inline]
    pub fn one() -> Self {
        Cube::Term([None; N])
    }

    /// A cube from explicit ternary entries.
    #[inline]
    pub fn new(bits: [Option<bool>; N]) -> Self {
        Cube::Term(bits)
    }

    /// A cube from the numeric encoding: 0 = false, 1 = true, 2 = don't-care.
    pub fn from_numeric(numeric: [u8; N]) -> Result<Self, Error> {
        let mut bits = [None; N];
        for (position, &value) in numeric.iter().enumerate() {
            bits[position] = match value {
                0 => Some(false),
                1 => Some(true),
                2 => None,
                _ => return Err(Error::InvalidCubeNumeric { value, position }),
            };
        }
        Ok(Cube::Term(bits))
    }

    /// The one-hot cube asserting literal `index`.
    pub fn positive_half_space(index: usize) -> Self {
        Self::literal(index, true)
    }

    /// The one-hot cube negating literal `index`.
    pub fn negative_half_space(index: usize) -> Self {
        Self::literal(index, false)
    }

    /// The one-hot cube holding `bit` at `index` and don't-care elsewhere.
    pub fn literal(index: usize, bit: bool) -> Self {
        let mut bits = [None; N];
        bits[index] = Some(bit);
        Cube::Term(bits)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        matches!(self, Cube::Zero)
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        match self {
            Cube::Zero => false,
            Cube::Term(bits) => bits.iter().all(|b| b.is_none()),
        }
    }

    /// The ternary entries, or `None` for the Zero sentinel.
    #[inline]
    pub fn bits(&self) -> Option<&[Option<bool>; N]> {
        match self {
            Cube::Zero => None,
            Cube::Term(bits) => Some(bits),
        }
    }

    /// Number of don't-care positions; N for Zero.
    pub fn dont_care_count(&self) -> usize {
        match self {
            Cube::Zero => N,
            Cube::Term(bits) => bits.iter().filter(|b| b.is_none()).count(),
        }
    }

    /// Number of defined (non-don't-care) positions.
    pub fn defined_count(&self) -> usize {
        N - self.dont_care_count()
    }

    /// Returns true if `other` is contained in this cube, i.e. every
    /// assignment satisfying `other` also satisfies `self`.
    pub fn contains(&self, other: &Self) -> bool {
        if self.is_zero() || other.is_one() {
            return false;
        }
        if other.is_zero() || self.is_one() {
            return true;
        }
        self.cofactor(other).is_one()
    }

    /// Containment excluding equality.
    pub fn strictly_contains(&self, other: &Self) -> bool {
        self != other && self.contains(other)
    }

    /// The consensus of two cubes, or `None` when no consensus exists.
    ///
    /// A consensus requires exactly one opposing position (true against
    /// false); that position is raised to don't-care in the result. Zero
    /// oppositions, more than one opposition, or a Zero operand all mean
    /// there is no consensus.
    pub fn consensus(&self, other: &Self) -> Option<Self> {
        let (a, b) = match (self, other) {
            (Cube::Term(a), Cube::Term(b)) => (a, b),
            _ => return None,
        };

        let mut result = [None; N];
        let mut opposition = false;
        for i in 0..N {
            result[i] = match (a[i], b[i]) {
                (l1, l2) if l1 == l2 => l1,
                (l1, None) => l1,
                (None, l2) => l2,
                _ if opposition => return None,
                _ => {
                    opposition = true;
                    None
                }
            };
        }
        opposition.then(|| Cube::Term(result))
    }

    /// The cofactor of this cube with respect to `other`.
    ///
    /// Positions where the two cubes clash make the whole cofactor Zero;
    /// positions where `other` is don't-care pass through; matched positions
    /// are raised to don't-care.
    pub fn cofactor(&self, other: &Self) -> Self {
        if self.is_zero() {
            return Cube::Zero;
        }
        if self.is_one() || self == other {
            return Self::one();
        }
        let (a, b) = match (self, other) {
            (Cube::Term(a), Cube::Term(b)) => (a, b),
            // other is Zero: the cofactor is self unchanged.
            _ => return *self,
        };

        let mut result = [None; N];
        for i in 0..N {
            result[i] = match (a[i], b[i]) {
                (Some(x), Some(y)) if x != y => return Cube::Zero,
                (l1, None) => l1,
                _ => None,
            };
        }
        Cube::Term(result)
    }

    /// Cofactor against the one-hot cube for literal `index` with `bit`.
    pub fn literal_cofactor(&self, index: usize, bit: bool) -> Self {
        self.cofactor(&Self::literal(index, bit))
    }

    /// Algebraic division: returns `(quotient, remainder)`.
    ///
    /// If this cube is not contained in the divisor the quotient is Zero and
    /// the remainder is the cube itself; otherwise the quotient drops every
    /// position the divisor defines and the remainder is Zero.
    pub fn divide(&self, divisor: &Self) -> (Self, Self) {
        if self.is_zero() {
            return (Cube::Zero, Cube::Zero);
        }
        if !divisor.contains(self) {
            return (Cube::Zero, *self);
        }
        let (a, b) = match (self, divisor) {
            (Cube::Term(a), Cube::Term(b)) => (a, b),
            _ => unreachable!("containment rules out sentinel divisors here"),
        };

        let mut result = [None; N];
        for i in 0..N {
            result[i] = if a[i] == b[i] { None } else { a[i] };
        }
        (Cube::Term(result), Cube::Zero)
    }

    /// Evaluates the cube at a full assignment of the N literals.
    pub fn evaluate(&self, values: &[bool; N]) -> bool {
        match self {
            Cube::Zero => false,
            Cube::Term(bits) => bits
                .iter()
                .zip(values)
                .all(|(bit, value)| bit.map_or(true, |b| b == *value)),
        }
    }

    /// Renders the cube against the names in `vars`.
    #[inline]
    pub fn display<'a>(&'a self, vars: &'a VarTable<N>) -> CubeDisplay<'a, N> {
        CubeDisplay {
            cube: self,
            vars,
            verbose: false,
        }
    }

    fn product_impl(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Cube::Zero;
        }
        if self.is_one() {
            return *other;
        }
        if other.is_one() || self == other {
            return *self;
        }
        let (a, b) = match (self, other) {
            (Cube::Term(a), Cube::Term(b)) => (a, b),
            _ => unreachable!("sentinels handled above"),
        };

        let mut result = [None; N];
        for i in 0..N {
            result[i] = match (a[i], b[i]) {
                (Some(x), Some(y)) if x != y => return Cube::Zero,
                (l1, None) => l1,
                (None, l2) => l2,
                (l1, _) => l1,
            };
        }
        Cube::Term(result)
    }

    fn complement_impl(&self) -> Sop<N> {
        match self {
            Cube::Zero => Sop::one(),
            Cube::Term(bits) => {
                if bits.iter().all(|b| b.is_none()) {
                    return Sop::zero();
                }
                Sop::new(
                    bits.iter()
                        .enumerate()
                        .filter_map(|(i, bit)| bit.map(|b| Self::literal(i, !b))),
                )
            }
        }
    }
}

/// Product (AND) of two cubes; a clash in any position yields Zero.
impl<const N: usize> BitAnd for Cube<N> {
    type Output = Cube<N>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.product_impl(&rhs)
    }
}

impl<'a, const N: usize> BitAnd<&'a Cube<N>> for Cube<N> {
    type Output = Cube<N>;

    fn bitand(self, rhs: &'a Cube<N>) -> Self::Output {
        self.product_impl(rhs)
    }
}

impl<'a, 'b, const N: usize> BitAnd<&'a Cube<N>> for &'b Cube<N> {
    type Output = Cube<N>;

    fn bitand(self, rhs: &'a Cube<N>) -> Self::Output {
        self.product_impl(rhs)
    }
}

impl<'b, const N: usize> BitAnd<Cube<N>> for &'b Cube<N> {
    type Output = Cube<N>;

    fn bitand(self, rhs: Cube<N>) -> Self::Output {
        self.product_impl(&rhs)
    }
}

/// De Morgan complement: a conjunction of literals negates to the
/// disjunction of the negated one-hot literals.
impl<const N: usize> Not for Cube<N> {
    type Output = Sop<N>;

    fn not(self) -> Self::Output {
        self.complement_impl()
    }
}

impl<'a, const N: usize> Not for &'a Cube<N> {
    type Output = Sop<N>;

    fn not(self) -> Self::Output {
        self.complement_impl()
    }
}

/// Canonical ordering used when rendering covers: ONE and Zero first, then
/// ascending defined-literal count, then the index of the first defined
/// literal, then asserted before negated, position by position.
pub(crate) fn canonical_order<const N: usize>(a: &Cube<N>, b: &Cube<N>) -> Ordering {
    fn sentinel_rank<const N: usize>(c: &Cube<N>) -> u8 {
        if c.is_one() {
            0
        } else if c.is_zero() {
            1
        } else {
            2
        }
    }

    fn first_defined<const N: usize>(bits: &[Option<bool>; N]) -> usize {
        bits.iter().position(|b| b.is_some()).unwrap_or(N)
    }

    fn bit_rank(bit: Option<bool>) -> u8 {
        match bit {
            None => 0,
            Some(true) => 1,
            Some(false) => 2,
        }
    }

    let rank = sentinel_rank(a).cmp(&sentinel_rank(b));
    let (a_bits, b_bits) = match (a.bits(), b.bits()) {
        (Some(a_bits), Some(b_bits)) if rank == Ordering::Equal => (a_bits, b_bits),
        _ => return rank,
    };

    a.defined_count()
        .cmp(&b.defined_count())
        .then_with(|| first_defined(a_bits).cmp(&first_defined(b_bits)))
        .then_with(|| {
            for i in 0..N {
                match bit_rank(a_bits[i]).cmp(&bit_rank(b_bits[i])) {
                    Ordering::Equal => continue,
                    unequal => return unequal,
                }
            }
            Ordering::Equal
        })
}

pub struct CubeDisplay<'a, const N: usize> {
    cube: &'a Cube<N>,
    vars: &'a VarTable<N>,
    verbose: bool,
}

impl<'a, const N: usize> CubeDisplay<'a, N> {
    /// Also renders don't-care positions, as `-`.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl<'a, const N: usize> fmt::Display for CubeDisplay<'a, N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.cube.is_zero() {
            return write!(f, "0");
        }
        if self.cube.is_one() {
            return write!(f, "1");
        }
        let bits = self.cube.bits().expect("sentinels handled above");

        let names = self.vars.display_names();
        let multichar = names.iter().any(|n| n.chars().count() > 1);

        let mut first = true;
        for (bit, name) in bits.iter().zip(&names) {
            let piece = match bit {
                Some(true) => format!("{}", name),
                Some(false) => format!("~{}", name),
                None if self.verbose => "-".to_owned(),
                None => continue,
            };
            if !first && multichar {
                write!(f, "*")?;
            }
            write!(f, "{}", piece)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cube(numeric: [u8; 3]) -> Cube<3> {
        Cube::from_numeric(numeric).unwrap()
    }

    #[test]
    fn test_sentinels() {
        assert!(Cube::<3>::zero().is_zero());
        assert!(Cube::<3>::one().is_one());
        assert_eq!(Cube::<3>::one(), cube([2, 2, 2]));
        assert!(!Cube::<3>::one().is_zero());
        assert_eq!(
            Cube::<3>::from_numeric([0, 1, 3]),
            Err(Error::InvalidCubeNumeric {
                value: 3,
                position: 2
            })
        );
    }

    #[test]
    fn test_product() {
        // ab * bc = abc
        assert_eq!(cube([1, 1, 2]) & cube([2, 1, 1]), cube([1, 1, 1]));
        // ab * ~b = 0
        assert_eq!(cube([1, 1, 2]) & cube([2, 0, 2]), Cube::Zero);
        assert_eq!(cube([1, 1, 2]) & Cube::one(), cube([1, 1, 2]));
        assert_eq!(cube([1, 1, 2]) & Cube::zero(), Cube::Zero);
    }

    #[test]
    fn test_product_containment() {
        let product = cube([1, 2, 2]) & cube([2, 0, 2]);
        assert!(cube([1, 2, 2]).contains(&product));
        assert!(cube([2, 0, 2]).contains(&product));
    }

    #[test]
    fn test_consensus() {
        // ab % ~bc = ac, exactly one opposition.
        assert_eq!(
            cube([1, 1, 2]).consensus(&cube([2, 0, 1])),
            Some(cube([1, 2, 1]))
        );
        // ab % a: no opposition, no consensus.
        assert_eq!(cube([1, 1, 2]).consensus(&cube([1, 2, 2])), None);
        // ab % ~a~b: two oppositions, no consensus.
        assert_eq!(cube([1, 1, 2]).consensus(&cube([0, 0, 2])), None);
        assert_eq!(cube([1, 1, 2]).consensus(&Cube::zero()), None);
        // a % ~a = 1 at width 1 scale: the single opposition is raised.
        assert_eq!(
            cube([1, 2, 2]).consensus(&cube([0, 2, 2])),
            Some(Cube::one())
        );
    }

    #[test]
    fn test_cofactor() {
        // (abc) cofactored by ab = c raised over a, b.
        assert_eq!(cube([1, 1, 1]).cofactor(&cube([1, 1, 2])), cube([2, 2, 1]));
        // Clash yields Zero.
        assert_eq!(cube([1, 1, 2]).cofactor(&cube([0, 2, 2])), Cube::Zero);
        assert_eq!(cube([1, 1, 2]).cofactor(&Cube::zero()), cube([1, 1, 2]));
        assert_eq!(cube([1, 1, 2]).cofactor(&cube([1, 1, 2])), Cube::one());
        assert_eq!(Cube::<3>::zero().cofactor(&cube([1, 1, 2])), Cube::Zero);
        // One-hot shorthand.
        assert_eq!(cube([1, 1, 1]).literal_cofactor(0, true), cube([2, 1, 1]));
        assert_eq!(cube([1, 1, 1]).literal_cofactor(0, false), Cube::Zero);
    }

    #[test]
    fn test_containment() {
        // a contains abc.
        assert!(cube([1, 2, 2]).contains(&cube([1, 1, 1])));
        assert!(!cube([1, 1, 1]).contains(&cube([1, 2, 2])));
        assert!(cube([1, 2, 2]).strictly_contains(&cube([1, 1, 1])));
        assert!(!cube([1, 2, 2]).strictly_contains(&cube([1, 2, 2])));
        // Sentinel rules.
        assert!(Cube::<3>::one().contains(&cube([1, 2, 2])));
        assert!(cube([1, 2, 2]).contains(&Cube::zero()));
        assert!(!Cube::<3>::zero().contains(&cube([1, 2, 2])));
        assert!(!cube([1, 2, 2]).contains(&Cube::one()));
    }

    #[test]
    fn test_divide() {
        // abc / ab = c
        assert_eq!(
            cube([1, 1, 1]).divide(&cube([1, 1, 2])),
            (cube([2, 2, 1]), Cube::Zero)
        );
        // ab / c: not contained, remainder is the dividend.
        assert_eq!(
            cube([1, 1, 2]).divide(&cube([2, 2, 1])),
            (Cube::Zero, cube([1, 1, 2]))
        );
        assert_eq!(
            Cube::<3>::zero().divide(&cube([1, 2, 2])),
            (Cube::Zero, Cube::Zero)
        );
        // Dividing by ONE returns the cube unchanged.
        assert_eq!(
            cube([1, 0, 2]).divide(&Cube::one()),
            (cube([1, 0, 2]), Cube::Zero)
        );
    }

    #[test]
    fn test_de_morgan_complement() {
        let complement = !cube([1, 0, 2]);
        assert_eq!(
            complement,
            Sop::new([cube([0, 2, 2]), cube([2, 1, 2])])
        );
        assert_eq!(!Cube::<3>::zero(), Sop::one());
        assert_eq!(!Cube::<3>::one(), Sop::zero());
    }

    #[test]
    fn test_evaluate() {
        let c = cube([1, 0, 2]);
        assert!(c.evaluate(&[true, false, true]));
        assert!(c.evaluate(&[true, false, false]));
        assert!(!c.evaluate(&[true, true, false]));
        assert!(!Cube::<3>::zero().evaluate(&[true, true, true]));
        assert!(Cube::<3>::one().evaluate(&[false, false, false]));
    }

    proptest! {
        #[test]
        fn proptest_containment_partial_order(a: Cube<4>, b: Cube<4>, c: Cube<4>) {
            // Antisymmetry.
            if a.contains(&b) && b.contains(&a) {
                prop_assert_eq!(a, b);
            }
            // Transitivity.
            if a.contains(&b) && b.contains(&c) {
                prop_assert!(a.contains(&c));
            }
        }

        #[test]
        fn proptest_product_containment(a: Cube<4>, b: Cube<4>) {
            let product = &a & &b;
            // ONE is a strict top, so ONE * ONE is exempt.
            if !product.is_zero() && !product.is_one() {
                prop_assert!(a.contains(&product));
                prop_assert!(b.contains(&product));
            }
        }
    }

    #[test]
    fn test_display() {
        let vars = VarTable::<3>::new();
        assert_eq!(cube([1, 0, 2]).display(&vars).to_string(), "a~b");
        assert_eq!(
            cube([1, 0, 2]).display(&vars).verbose(true).to_string(),
            "a~b-"
        );
        assert_eq!(Cube::<3>::zero().display(&vars).to_string(), "0");
        assert_eq!(Cube::<3>::one().display(&vars).to_string(), "1");

        let vars = VarTable::<3>::with_names(["sel", "x"]).unwrap();
        assert_eq!(cube([1, 0, 1]).display(&vars).to_string(), "sel*~x*a");
    }
}
