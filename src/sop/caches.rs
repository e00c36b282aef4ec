// Copyright (c) The sop-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::cube::Cube;
use once_cell::sync::OnceCell;
use std::collections::BTreeSet;

/// Lazily computed per-SOP data, invalidated whenever the cube set mutates.
#[derive(Clone, Debug, Default)]
pub(super) struct SopCache<const N: usize> {
    columns: OnceCell<ColumnCounts<N>>,
}

impl<const N: usize> SopCache<N> {
    pub(super) fn invalidate(&mut self) {
        self.columns = OnceCell::new();
    }

    pub(super) fn get_or_init_columns(
        &self,
        elements: &BTreeSet<Cube<N>>,
    ) -> &ColumnCounts<N> {
        self.columns.get_or_init(|| ColumnCounts::new(elements))
    }
}

/// Per-position counts of asserted and negated literals across a cube set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct ColumnCounts<const N: usize> {
    pub(super) ones: [usize; N],
    pub(super) zeroes: [usize; N],
}

impl<const N: usize> ColumnCounts<N> {
    fn new(elements: &BTreeSet<Cube<N>>) -> Self {
        let mut ones = [0; N];
        let mut zeroes = [0; N];
        for element in elements {
            if let Some(bits) = element.bits() {
                for (i, bit) in bits.iter().enumerate() {
                    match bit {
                        Some(true) => ones[i] += 1,
                        Some(false) => zeroes[i] += 1,
                        None => {}
                    }
                }
            }
        }
        Self { ones, zeroes }
    }

    /// Number of cubes that define position `index` either way.
    #[inline]
    pub(super) fn defined(&self, index: usize) -> usize {
        self.ones[index] + self.zeroes[index]
    }

    /// The first position defined in any cube, if one exists.
    pub(super) fn first_defined(&self) -> Option<usize> {
        (0..N).find(|&i| self.defined(i) > 0)
    }
}
