// Copyright (c) The sop-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The unate recursive engine: consensus closure, tautology checking and
//! complementation, all driven by the unate-literal selection heuristic.

use crate::{cube::Cube, sop::Sop};
use itertools::Itertools;

/// Outcome of scanning an SOP for its most useful branching literal.
///
/// `polarity` is `Some(true)` for a positive-unate column (the literal never
/// appears negated), `Some(false)` for a negative-unate column, and `None`
/// when the function is binate in every defined column and `index` is merely
/// the first defined position. `count` is the number of cubes defining the
/// column; a higher count means fewer don't-cares and a smaller cofactor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnateLiteral {
    pub index: usize,
    pub polarity: Option<bool>,
    pub count: usize,
}

/// The positive and negative literal-cofactors of an SOP about one
/// position, together with the one-hot half-space cubes for recombination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShannonExpansion<const N: usize> {
    positive: Sop<N>,
    negative: Sop<N>,
    index: usize,
    pos_half_space: Cube<N>,
    neg_half_space: Cube<N>,
}

impl<const N: usize> ShannonExpansion<N> {
    pub fn new(sop: &Sop<N>, index: usize) -> Self {
        let pos_half_space = Cube::positive_half_space(index);
        let neg_half_space = Cube::negative_half_space(index);
        let positive = sop.cofactor(&pos_half_space);
        let negative = sop.cofactor(&neg_half_space);
        Self {
            positive,
            negative,
            index,
            pos_half_space,
            neg_half_space,
        }
    }

    #[inline]
    pub fn positive(&self) -> &Sop<N> {
        &self.positive
    }

    #[inline]
    pub fn negative(&self) -> &Sop<N> {
        &self.negative
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn pos_half_space(&self) -> &Cube<N> {
        &self.pos_half_space
    }

    #[inline]
    pub fn neg_half_space(&self) -> &Cube<N> {
        &self.neg_half_space
    }
}

impl<const N: usize> Sop<N> {
    /// Selects the branching literal for the unate recursion.
    ///
    /// Among unate columns the one with the most defining cubes wins; a
    /// unate column defined by every cube resolves the scan immediately. If
    /// every defined column is binate, the fallback is the first defined
    /// position with no polarity. An SOP with no defined positions reports
    /// position 0, no polarity, count 0.
    pub fn best_unate_literal(&self) -> UnateLiteral {
        let counts = self.column_counts();
        let mut best: Option<UnateLiteral> = None;

        for index in 0..N {
            let (ones, zeroes) = (counts.ones[index], counts.zeroes[index]);
            let (polarity, count) = if zeroes == 0 && ones > 0 {
                (true, ones)
            } else if ones == 0 && zeroes > 0 {
                (false, zeroes)
            } else {
                continue;
            };

            let candidate = UnateLiteral {
                index,
                polarity: Some(polarity),
                count,
            };
            if count == self.cube_count() {
                // No don't-cares in this column; nothing can beat it.
                return candidate;
            }
            if best.map_or(true, |b| count > b.count) {
                best = Some(candidate);
            }
        }

        best.unwrap_or_else(|| UnateLiteral {
            index: counts.first_defined().unwrap_or(0),
            polarity: None,
            count: 0,
        })
    }

    #[inline]
    pub fn shannon_expansion(&self, index: usize) -> ShannonExpansion<N> {
        ShannonExpansion::new(self, index)
    }

    /// The complete sum: the consensus closure of this SOP, whose cubes are
    /// exactly the prime implicants of the represented function.
    ///
    /// Works on a private copy. Each round minimizes the copy, then looks
    /// for a pairwise consensus not contained in any cube of the copy; if
    /// one exists it is added and the round restarts. The loop ends at the
    /// fixed point where every consensus is already contained.
    pub fn complete(&self) -> Self {
        let mut copy = self.clone();
        loop {
            copy.minimize();
            let consensus: Vec<Cube<N>> = copy
                .elements()
                .iter()
                .tuple_combinations()
                .filter_map(|(c1, c2)| c1.consensus(c2))
                .collect();
            let missing = consensus
                .into_iter()
                .find(|cons| !copy.elements().iter().any(|cube| cube.contains(cons)));
            match missing {
                Some(cons) => {
                    copy.elements_mut().insert(cons);
                }
                None => return copy,
            }
        }
    }

    /// Decides whether the represented function is true under every
    /// assignment.
    ///
    /// The consensus closure is computed first: a tautological SOP collapses
    /// to `{ONE}` there and the recursion exits at its first test. Otherwise
    /// the recursion branches on the best unate literal and requires both
    /// literal-cofactors to be tautologies.
    pub fn is_tautology(&self) -> bool {
        self.complete().tautology_rec(0)
    }

    fn tautology_rec(&self, depth: usize) -> bool {
        if self.is_zero() {
            return false;
        }
        if self.is_one() {
            return true;
        }
        if depth >= N {
            return false;
        }
        let chosen = self.best_unate_literal();
        let expansion = self.shannon_expansion(chosen.index);
        expansion.positive().tautology_rec(depth + 1)
            && expansion.negative().tautology_rec(depth + 1)
    }

    /// The complement of the represented function, by unate recursion.
    ///
    /// Branches on the best unate literal; a unate polarity lets one branch
    /// skip its half-space multiplication. Terminates because every level
    /// fixes one more literal position.
    pub fn complement(&self) -> Self {
        if self.is_zero() {
            return Self::one();
        }
        if self.is_one() {
            return Self::zero();
        }

        let chosen = self.best_unate_literal();
        let expansion = self.shannon_expansion(chosen.index);
        let positive = expansion.positive().complement();
        let negative = expansion.negative().complement();

        match chosen.polarity {
            Some(true) => &positive | &(&negative & expansion.neg_half_space()),
            Some(false) => &(&positive & expansion.pos_half_space()) | &negative,
            None => {
                &(&positive & expansion.pos_half_space())
                    | &(&negative & expansion.neg_half_space())
            }
        }
    }
}
