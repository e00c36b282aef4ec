// Copyright (c) The sop-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{cube::Cube, errors::Error, sop::SopDisplay, vars::VarTable};
use itertools::Itertools;
use std::{
    collections::BTreeSet,
    ops::{BitAnd, BitOr, Not, Sub},
};

use super::caches::{ColumnCounts, SopCache};

/// A sum of products: a set of width-N cubes representing a disjunction.
///
/// Invariants hold after construction and after every exposed mutation:
/// the ONE cube absorbs every other element, Zero is never an element, and no
/// cube is contained in another (single-cube-containment minimality). The
/// empty set represents the constant false function; `{ONE}` represents the
/// constant true function.
///
/// Algebraic operators return fresh values; mutation is confined to
/// [`minimize`](Self::minimize) and the private working copy inside
/// [`complete`](Self::complete).
#[derive(Clone, Debug, Default)]
pub struct Sop<const N: usize> {
    elements: SopElements<N>,
    cache: SopCache<N>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct SopElements<const N: usize>(BTreeSet<Cube<N>>);

impl<const N: usize> Sop<N> {
    pub const WIDTH: usize = N;

    /// Builds an SOP from cubes, applying the container invariants.
    pub fn new(cubes: impl IntoIterator<Item = Cube<N>>) -> Self {
        let mut elements: BTreeSet<Cube<N>> = cubes.into_iter().collect();
        if elements.iter().any(|c| c.is_one()) {
            elements = BTreeSet::from([Cube::one()]);
        } else {
            elements.retain(|c| !c.is_zero());
        }

        let mut sop = Self {
            elements: SopElements(elements),
            cache: SopCache::default(),
        };
        sop.minimize();
        sop
    }

    /// The constant false function.
    pub fn zero() -> Self {
        Self::new([])
    }

    /// The constant true function.
    pub fn one() -> Self {
        Self::new([Cube::one()])
    }

    /// Builds an SOP from cubes in the numeric 0/1/2 encoding.
    pub fn from_numeric(
        numeric: impl IntoIterator<Item = [u8; N]>,
    ) -> Result<Self, Error> {
        let cubes: Vec<_> = numeric
            .into_iter()
            .map(Cube::from_numeric)
            .collect::<Result<_, _>>()?;
        Ok(Self::new(cubes))
    }

    #[inline]
    pub fn elements(&self) -> &BTreeSet<Cube<N>> {
        &self.elements.0
    }

    #[inline]
    pub(super) fn elements_mut(&mut self) -> &mut BTreeSet<Cube<N>> {
        self.cache.invalidate();
        &mut self.elements.0
    }

    #[inline]
    pub fn cube_count(&self) -> usize {
        self.elements().len()
    }

    /// True for the constant false function (no cubes).
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.elements().is_empty()
    }

    /// True for the constant true function (`{ONE}`).
    #[inline]
    pub fn is_one(&self) -> bool {
        self.elements().iter().any(|c| c.is_one())
    }

    /// The cofactor of every cube with respect to `cube`; clashing cubes
    /// drop out.
    pub fn cofactor(&self, cube: &Cube<N>) -> Self {
        Self::new(self.elements().iter().map(|c| c.cofactor(cube)))
    }

    /// Cofactor against the one-hot cube for literal `index` with `bit`.
    pub fn literal_cofactor(&self, index: usize, bit: bool) -> Self {
        self.cofactor(&Cube::literal(index, bit))
    }

    /// Reduces the SOP to single-cube-containment minimality in place.
    ///
    /// Cubes are processed in order of increasing don't-care count: a cube
    /// with more defined literals is more likely to be contained and is
    /// tested first, against the most-don't-care candidates first.
    pub fn minimize(&mut self) {
        if self.cube_count() <= 1 {
            return;
        }
        let mut candidates: Vec<Cube<N>> = self.elements().iter().copied().collect();
        candidates.sort_by_key(|c| c.dont_care_count());

        let mut minimals: Vec<Cube<N>> = Vec::new();
        let mut ix = 0;
        while ix < candidates.len() {
            let (cube, rest) = {
                let (head, tail) = candidates.split_at(ix + 1);
                (head[ix], tail)
            };
            let contained = rest
                .iter()
                .rev()
                .chain(minimals.iter().rev())
                .any(|other| other.contains(&cube));
            if !contained {
                minimals.push(cube);
            }
            ix += 1;
        }

        *self.elements_mut() = minimals.into_iter().collect();
    }

    /// Evaluates the represented function at a full assignment.
    pub fn evaluate(&self, values: &[bool; N]) -> bool {
        self.elements().iter().any(|c| c.evaluate(values))
    }

    /// Exhaustively compares two SOPs as boolean functions, returning the
    /// first differing assignment on mismatch.
    pub fn check_logically_equivalent(&self, other: &Self) -> Result<(), [bool; N]> {
        for input_bits in 0..2_u64.pow(N as u32) {
            let mut values = [false; N];
            for bit in 0..N {
                if (input_bits >> bit) & 1 == 1 {
                    values[bit] = true;
                }
            }
            if self.evaluate(&values) != other.evaluate(&values) {
                return Err(values);
            }
        }
        Ok(())
    }

    /// Algebraic division by a single cube: `(quotient, remainder)` with
    /// `self == quotient * divisor + remainder`.
    pub fn divide_by_cube(&self, divisor: &Cube<N>) -> (Self, Self) {
        let quotient = Self::new(self.elements().iter().map(|c| c.divide(divisor).0));
        let remainder = self - &(&quotient & divisor);
        (quotient, remainder)
    }

    /// Algebraic division by an SOP: the quotient is the product of the
    /// per-cube quotients. Dividing by the constant false function yields a
    /// zero quotient and the dividend as remainder.
    pub fn divide(&self, divisor: &Self) -> (Self, Self) {
        let mut cubes = divisor.elements().iter();
        let first = match cubes.next() {
            Some(first) => first,
            None => return (Self::zero(), self.clone()),
        };
        let mut quotient = self.divide_by_cube(first).0;
        for cube in cubes {
            quotient = &quotient & &self.divide_by_cube(cube).0;
        }
        let remainder = self - &(&quotient & divisor);
        (quotient, remainder)
    }

    /// Renders the SOP against the names in `vars`, cubes in canonical
    /// order joined by `" + "`.
    #[inline]
    pub fn display<'a>(&'a self, vars: &'a VarTable<N>) -> SopDisplay<'a, N> {
        SopDisplay::new(self, vars)
    }

    pub(super) fn column_counts(&self) -> &ColumnCounts<N> {
        self.cache.get_or_init_columns(self.elements())
    }

    // ---
    // Operator bodies
    // ---

    fn union_impl(&self, other: &Self) -> Self {
        Self::new(self.elements().iter().chain(other.elements()).copied())
    }

    fn union_cube_impl(&self, cube: &Cube<N>) -> Self {
        Self::new(
            self.elements()
                .iter()
                .copied()
                .chain(std::iter::once(*cube)),
        )
    }

    fn difference_impl(&self, other: &Self) -> Self {
        Self::new(self.elements().difference(other.elements()).copied())
    }

    fn multiply_impl(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        if self.is_one() {
            return other.clone();
        }
        if other.is_one() {
            return self.clone();
        }
        Self::new(
            self.elements()
                .iter()
                .cartesian_product(other.elements())
                .map(|(c1, c2)| c1 & c2),
        )
    }

    fn multiply_cube_impl(&self, cube: &Cube<N>) -> Self {
        Self::new(self.elements().iter().map(|c| c & cube))
    }

    fn de_morgan_impl(&self) -> Self {
        self.elements()
            .iter()
            .fold(Self::one(), |acc, cube| &acc & &!cube)
    }
}

impl<const N: usize> PartialEq for Sop<N> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<const N: usize> Eq for Sop<N> {}

impl<const N: usize> From<Cube<N>> for Sop<N> {
    fn from(cube: Cube<N>) -> Self {
        Self::new([cube])
    }
}

// Union (disjunction) of two SOPs, or of an SOP and a cube.

impl<const N: usize> BitOr for Sop<N> {
    type Output = Sop<N>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union_impl(&rhs)
    }
}

impl<'a, const N: usize> BitOr<&'a Sop<N>> for Sop<N> {
    type Output = Sop<N>;

    fn bitor(self, rhs: &'a Sop<N>) -> Self::Output {
        self.union_impl(rhs)
    }
}

impl<'a, 'b, const N: usize> BitOr<&'a Sop<N>> for &'b Sop<N> {
    type Output = Sop<N>;

    fn bitor(self, rhs: &'a Sop<N>) -> Self::Output {
        self.union_impl(rhs)
    }
}

impl<'b, const N: usize> BitOr<Sop<N>> for &'b Sop<N> {
    type Output = Sop<N>;

    fn bitor(self, rhs: Sop<N>) -> Self::Output {
        self.union_impl(&rhs)
    }
}

impl<'a, 'b, const N: usize> BitOr<&'a Cube<N>> for &'b Sop<N> {
    type Output = Sop<N>;

    fn bitor(self, rhs: &'a Cube<N>) -> Self::Output {
        self.union_cube_impl(rhs)
    }
}

impl<const N: usize> BitOr<Cube<N>> for Sop<N> {
    type Output = Sop<N>;

    fn bitor(self, rhs: Cube<N>) -> Self::Output {
        self.union_cube_impl(&rhs)
    }
}

// Set difference.

impl<const N: usize> Sub for Sop<N> {
    type Output = Sop<N>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference_impl(&rhs)
    }
}

impl<'a, 'b, const N: usize> Sub<&'a Sop<N>> for &'b Sop<N> {
    type Output = Sop<N>;

    fn sub(self, rhs: &'a Sop<N>) -> Self::Output {
        self.difference_impl(rhs)
    }
}

impl<'a, 'b, const N: usize> Sub<&'a Cube<N>> for &'b Sop<N> {
    type Output = Sop<N>;

    fn sub(self, rhs: &'a Cube<N>) -> Self::Output {
        let mut elements = self.elements().clone();
        elements.remove(rhs);
        Sop::new(elements)
    }
}

// Distributive product (conjunction of disjunctions).

impl<const N: usize> BitAnd for Sop<N> {
    type Output = Sop<N>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.multiply_impl(&rhs)
    }
}

impl<'a, const N: usize> BitAnd<&'a Sop<N>> for Sop<N> {
    type Output = Sop<N>;

    fn bitand(self, rhs: &'a Sop<N>) -> Self::Output {
        self.multiply_impl(rhs)
    }
}

impl<'a, 'b, const N: usize> BitAnd<&'a Sop<N>> for &'b Sop<N> {
    type Output = Sop<N>;

    fn bitand(self, rhs: &'a Sop<N>) -> Self::Output {
        self.multiply_impl(rhs)
    }
}

impl<'b, const N: usize> BitAnd<Sop<N>> for &'b Sop<N> {
    type Output = Sop<N>;

    fn bitand(self, rhs: Sop<N>) -> Self::Output {
        self.multiply_impl(&rhs)
    }
}

impl<'a, 'b, const N: usize> BitAnd<&'a Cube<N>> for &'b Sop<N> {
    type Output = Sop<N>;

    fn bitand(self, rhs: &'a Cube<N>) -> Self::Output {
        self.multiply_cube_impl(rhs)
    }
}

impl<'a, 'b, const N: usize> BitAnd<&'a Sop<N>> for &'b Cube<N> {
    type Output = Sop<N>;

    fn bitand(self, rhs: &'a Sop<N>) -> Self::Output {
        rhs.multiply_cube_impl(self)
    }
}

/// De Morgan complement: the product of the complements of every cube.
impl<const N: usize> Not for Sop<N> {
    type Output = Sop<N>;

    fn not(self) -> Self::Output {
        self.de_morgan_impl()
    }
}

impl<'a, const N: usize> Not for &'a Sop<N> {
    type Output = Sop<N>;

    fn not(self) -> Self::Output {
        self.de_morgan_impl()
    }
}
