/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Read-only membership views for finished groupings.

use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::hash_set;
use std::hash::Hash;

use serde::Deserialize;
use serde::Serialize;

use crate::reducer::Reducer;

/// A read-only view of a membership set.
///
/// Exposes lookup and iteration but no mutation; the only way to grow
/// or shrink a `FrozenSet` is to not have frozen it. Produced by the
/// [`Frozen`] finisher.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Eq + Hash + Serialize",
    deserialize = "T: Eq + Hash + Deserialize<'de>"
))]
pub struct FrozenSet<T> {
    inner: HashSet<T>,
}

impl<T: Eq + Hash> FrozenSet<T> {
    fn new(inner: HashSet<T>) -> Self {
        Self { inner }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Is the set empty?
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Is this value an element?
    pub fn contains(&self, value: &T) -> bool {
        self.inner.contains(value)
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.inner.iter()
    }

    /// Borrow the underlying set.
    pub fn as_set(&self) -> &HashSet<T> {
        &self.inner
    }
}

impl<T: Eq + Hash> PartialEq for FrozenSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq + Hash> Eq for FrozenSet<T> {}

impl<T: Eq + Hash> PartialEq<HashSet<T>> for FrozenSet<T> {
    fn eq(&self, other: &HashSet<T>) -> bool {
        self.inner == *other
    }
}

impl<'a, T> IntoIterator for &'a FrozenSet<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

/// A finisher decorator: delegates the whole reduction to the wrapped
/// reducer and wraps every membership set of the finished map in a
/// [`FrozenSet`].
///
/// Created by [`GroupOverlapping::frozen`](crate::GroupOverlapping::frozen),
/// or directly with [`Frozen::new`] around any reducer producing a map
/// of member sets.
#[derive(Clone, Debug)]
pub struct Frozen<R> {
    inner: R,
}

impl<R> Frozen<R> {
    /// Wrap a reducer.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Unwrap the decorator, returning the underlying reducer.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<T, K, V, R> Reducer<T> for Frozen<R>
where
    K: Eq + Hash,
    V: Eq + Hash,
    R: Reducer<T, Output = HashMap<K, HashSet<V>>>,
{
    type State = R::State;
    type Output = HashMap<K, FrozenSet<V>>;

    fn empty(&self) -> Self::State {
        self.inner.empty()
    }

    fn accumulate(&self, state: &mut Self::State, item: T) {
        self.inner.accumulate(state, item);
    }

    fn combine(&self, left: Self::State, right: Self::State) -> Self::State {
        self.inner.combine(left, right)
    }

    fn finish(&self, state: Self::State) -> Self::Output {
        self.inner
            .finish(state)
            .into_iter()
            .map(|(key, members)| (key, FrozenSet::new(members)))
            .collect()
    }

    fn is_unordered(&self) -> bool {
        self.inner.is_unordered()
    }
}

// Tests
