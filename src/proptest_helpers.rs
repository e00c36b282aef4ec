// Copyright (c) The sop-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{cube::Cube, sop::Sop};
use arrayvec::ArrayVec;
use proptest::prelude::*;
use std::fmt;

impl<const N: usize> Arbitrary for Cube<N> {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        // Weight towards proper terms; the sentinels are boring.
        let term = prop::collection::vec(any::<Option<bool>>(), N)
            .prop_map(|bits| Self::new(vec_to_array(bits)));
        prop_oneof![
            10 => term,
            1 => Just(Self::zero()),
            1 => Just(Self::one()),
        ]
        .boxed()
    }
}

impl<const N: usize> Arbitrary for Sop<N> {
    type Parameters = Option<(usize, usize)>;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        let (min_size, max_size) = params.unwrap_or((0, 2 * N));
        // Generate somewhere between min_size and max_size cubes; the
        // constructor drops ZERO cubes and contained cubes, so the result
        // may be smaller.
        prop::collection::btree_set(any::<Cube<N>>(), min_size..max_size)
            .prop_map(|cubes| Self::new(cubes))
            .boxed()
    }
}

#[inline]
fn vec_to_array<T: fmt::Debug, const N: usize>(vec: Vec<T>) -> [T; N] {
    let array_vec: ArrayVec<T, N> = vec.into_iter().collect();
    array_vec
        .into_inner()
        .expect("vec should be exactly N elements long")
}
