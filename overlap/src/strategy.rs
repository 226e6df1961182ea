/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Property-based generators for randomized reduction input, plus the
//! partition/fan-in helpers the confluence tests share.
//!
//! The generators build [`BitSet`]s over a small fixed universe with a
//! bounded population, which keeps generated batches dense enough that
//! transitive merges actually happen. `gen_batch_with_assignment`
//! pairs a batch with a random partition assignment so tests can fold
//! each partition independently and compare the combined result
//! against the sequential fold.
//!
//! This module is only included in test builds (`#[cfg(test)]`).

use bitset::BitSet;
use proptest::prelude::*;

use crate::reducer::Reducer;

/// Generate a `BitSet` over a universe of `num_bits` indices with at
/// most `max_ones` of them set.
pub fn gen_bitset(num_bits: usize, max_ones: usize) -> impl Strategy<Value = BitSet> {
    assert!(num_bits > 0, "the universe must be non-empty");
    let max_ones = max_ones.min(num_bits);
    prop::collection::hash_set(0..num_bits, 0..=max_ones).prop_map(move |ones| {
        BitSet::from_indices(num_bits, ones).expect("indices drawn from the universe")
    })
}

/// Generate a batch of up to `max_len` bit-vectors over a shared
/// universe.
pub fn gen_batch(
    num_bits: usize,
    max_ones: usize,
    max_len: usize,
) -> impl Strategy<Value = Vec<BitSet>> {
    prop::collection::vec(gen_bitset(num_bits, max_ones), 0..=max_len)
}

/// Generate a batch together with a shuffled copy of itself.
pub fn gen_batch_and_shuffle(
    num_bits: usize,
    max_ones: usize,
    max_len: usize,
) -> impl Strategy<Value = (Vec<BitSet>, Vec<BitSet>)> {
    gen_batch(num_bits, max_ones, max_len)
        .prop_flat_map(|batch| (Just(batch.clone()), Just(batch).prop_shuffle()))
}

/// Generate a batch together with a partition assignment: element `i`
/// of the batch belongs to partition `assignment[i] < parts`.
pub fn gen_batch_with_assignment(
    num_bits: usize,
    max_ones: usize,
    max_len: usize,
    parts: usize,
) -> impl Strategy<Value = (Vec<BitSet>, Vec<usize>)> {
    gen_batch(num_bits, max_ones, max_len).prop_flat_map(move |batch| {
        let len = batch.len();
        (Just(batch), prop::collection::vec(0..parts, len..=len))
    })
}

/// Split `batch` into `parts` chunks according to `assignment`.
pub fn split_by_assignment(
    batch: &[BitSet],
    assignment: &[usize],
    parts: usize,
) -> Vec<Vec<BitSet>> {
    let mut chunks = vec![Vec::new(); parts];
    for (v, &part) in batch.iter().zip(assignment) {
        chunks[part].push(v.clone());
    }
    chunks
}

/// Merge partition states pairwise in a balanced fan-in tree, the way
/// a parallel driver would. An empty list yields the empty state.
pub fn fan_in<T, R: Reducer<T>>(reducer: &R, mut states: Vec<R::State>) -> R::State {
    while states.len() > 1 {
        let mut next = Vec::with_capacity(states.len().div_ceil(2));
        let mut pairs = states.into_iter();
        while let Some(left) = pairs.next() {
            match pairs.next() {
                Some(right) => next.push(reducer.combine(left, right)),
                None => next.push(left),
            }
        }
        states = next;
    }
    match states.pop() {
        Some(state) => state,
        None => reducer.empty(),
    }
}

// Tests

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        // The generators honor their own bounds.
        #[test]
        fn generated_bitsets_respect_the_universe(v in gen_bitset(16, 6)) {
            prop_assert_eq!(v.num_bits(), 16);
            prop_assert!(v.count_ones() <= 6);
            prop_assert!(v.ones().all(|i| i < 16));
        }

        #[test]
        fn assignments_match_their_batch(
            (batch, assignment) in gen_batch_with_assignment(16, 6, 24, 4)
        ) {
            prop_assert_eq!(batch.len(), assignment.len());
            prop_assert!(assignment.iter().all(|&p| p < 4));
            let chunks = split_by_assignment(&batch, &assignment, 4);
            prop_assert_eq!(chunks.len(), 4);
            let total: usize = chunks.iter().map(Vec::len).sum();
            prop_assert_eq!(total, batch.len());
        }

        #[test]
        fn shuffles_preserve_the_multiset(
            (batch, shuffled) in gen_batch_and_shuffle(16, 6, 24)
        ) {
            let mut a: Vec<Vec<usize>> =
                batch.iter().map(|v| v.ones().collect()).collect();
            let mut b: Vec<Vec<usize>> =
                shuffled.iter().map(|v| v.ones().collect()).collect();
            a.sort();
            b.sort();
            prop_assert_eq!(a, b);
        }
    }
}
