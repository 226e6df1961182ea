/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Clone-at-boundary adaptor for reducers.

use crate::reducer::Reducer;

/// A reducer over borrowed items, created by
/// [`Reducer::cloned`](crate::Reducer::cloned).
///
/// `Cloned<R>` clones each incoming `&T` before delegating to the
/// wrapped `R: Reducer<T>`; supplier, combiner, finisher, and
/// characteristics are forwarded unchanged. The reduction therefore
/// never aliases caller-owned values: the caller keeps its vectors,
/// and the engine owns the copies its groups are built from.
///
/// Reducers that take items by value already own what they are given,
/// so the adaptor's cost, one clone per item, is paid only on the
/// borrowed-input path where it buys the isolation.
#[derive(Clone, Debug)]
pub struct Cloned<R> {
    inner: R,
}

impl<R> Cloned<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Unwrap the adaptor, returning the underlying reducer.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<'a, T, R> Reducer<&'a T> for Cloned<R>
where
    T: Clone + 'a,
    R: Reducer<T>,
{
    type State = R::State;
    type Output = R::Output;

    fn empty(&self) -> Self::State {
        self.inner.empty()
    }

    fn accumulate(&self, state: &mut Self::State, item: &'a T) {
        self.inner.accumulate(state, item.clone());
    }

    fn combine(&self, left: Self::State, right: Self::State) -> Self::State {
        self.inner.combine(left, right)
    }

    fn finish(&self, state: Self::State) -> Self::Output {
        self.inner.finish(state)
    }

    fn is_unordered(&self) -> bool {
        self.inner.is_unordered()
    }
}

// Tests

#[cfg(test)]
mod tests {
    use bitset::BitSet;

    use crate::GroupOverlapping;
    use crate::Reducer;

    fn bv(indices: &[usize]) -> BitSet {
        BitSet::from_indices(6, indices.iter().copied()).unwrap()
    }

    #[test]
    fn cloned_grouping_matches_by_value_grouping() {
        let caller_owned = vec![bv(&[0, 1]), bv(&[1, 2]), bv(&[4])];

        let borrowed = GroupOverlapping::new().cloned().reduce(caller_owned.iter());
        let by_value = GroupOverlapping::new().reduce(caller_owned.iter().cloned());
        assert_eq!(borrowed, by_value);

        // The caller still owns its vectors.
        assert_eq!(caller_owned.len(), 3);
        assert_eq!(caller_owned[0], bv(&[0, 1]));
    }

    #[test]
    fn cloned_forwards_characteristics() {
        assert!(GroupOverlapping::<BitSet>::new().cloned().is_unordered());
    }

    #[test]
    fn into_inner_returns_wrapped_reducer() {
        let wrapped = GroupOverlapping::<BitSet>::new().cloned();
        let unwrapped = wrapped.into_inner();
        assert!(unwrapped.is_unordered());
    }
}
