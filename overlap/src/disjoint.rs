/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Reduction of a bit-vector stream to pairwise-disjoint unions.

use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;

use algebra::BoundedJoinSemilattice;
use algebra::JoinSemilattice;
use serde::Deserialize;
use serde::Serialize;

use crate::bits::Bits;
use crate::bits::union_all;
use crate::reducer::Reducer;

/// The accumulation state of [`DisjointUnion`]: a set of pairwise
/// non-intersecting union vectors covering every vector inserted so
/// far.
///
/// Inserting a vector merges it with every group it intersects;
/// merging two states replays one state's groups into the other.
/// Merge is associative, commutative, and idempotent with the empty
/// state as identity, so `DisjointGroups` is a bounded
/// join-semilattice and the final groups do not depend on insertion
/// order or on how the input was partitioned.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(
    serialize = "B: Eq + Hash + Serialize",
    deserialize = "B: Eq + Hash + Deserialize<'de>"
))]
pub struct DisjointGroups<B> {
    groups: HashSet<B>,
}

impl<B: Eq + Hash> PartialEq for DisjointGroups<B> {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}

impl<B: Eq + Hash> Eq for DisjointGroups<B> {}

impl<B: Bits> DisjointGroups<B> {
    /// Create an empty state.
    pub fn new() -> Self {
        Self {
            groups: HashSet::new(),
        }
    }

    /// Fold one vector into the state.
    ///
    /// Every group intersecting `v` is drained and replaced by the OR
    /// of those groups and `v`. The groups are pairwise disjoint going
    /// in, so a group intersects the replacement iff it intersects `v`
    /// itself: a single scan finds the complete hit set. An empty `v`
    /// intersects nothing and forms (or re-forms) its own group.
    pub fn insert(&mut self, v: B) {
        let (hit, keep): (HashSet<B>, HashSet<B>) =
            self.groups.drain().partition(|g| g.intersects(&v));
        let mut merged = union_all(&hit);
        merged.or_assign(&v);
        self.groups = keep;
        self.groups.insert(merged);
    }

    /// Merge another state into this one by replaying its groups.
    pub fn merge(&mut self, other: Self) {
        for g in other.groups {
            self.insert(g);
        }
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Is the state empty?
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Is this vector one of the current groups?
    pub fn contains(&self, group: &B) -> bool {
        self.groups.contains(group)
    }

    /// Iterate over the groups.
    pub fn iter(&self) -> impl Iterator<Item = &B> {
        self.groups.iter()
    }

    /// Consume the state and return the underlying set of groups.
    pub fn into_inner(self) -> HashSet<B> {
        self.groups
    }
}

impl<B: Bits> Default for DisjointGroups<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Bits> Extend<B> for DisjointGroups<B> {
    fn extend<I: IntoIterator<Item = B>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<B: Bits> FromIterator<B> for DisjointGroups<B> {
    fn from_iter<I: IntoIterator<Item = B>>(iter: I) -> Self {
        let mut state = Self::new();
        state.extend(iter);
        state
    }
}

impl<B: Bits> JoinSemilattice for DisjointGroups<B> {
    fn join(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.merge(other.clone());
        out
    }
}

impl<B: Bits> BoundedJoinSemilattice for DisjointGroups<B> {
    fn bottom() -> Self {
        Self::new()
    }
}

/// Reduces a stream of bit-vectors to the smallest set of pairwise
/// disjoint vectors covering them, merging overlapping inputs by OR.
///
/// Membership is discarded; see
/// [`GroupOverlapping`](crate::GroupOverlapping) to keep it.
#[derive(Clone, Debug)]
pub struct DisjointUnion<B>(PhantomData<B>);

impl<B> DisjointUnion<B> {
    /// Create the reducer.
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<B> Default for DisjointUnion<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Bits> Reducer<B> for DisjointUnion<B> {
    type State = DisjointGroups<B>;
    type Output = HashSet<B>;

    fn empty(&self) -> Self::State {
        DisjointGroups::new()
    }

    fn accumulate(&self, state: &mut Self::State, item: B) {
        state.insert(item);
    }

    fn combine(&self, mut left: Self::State, right: Self::State) -> Self::State {
        left.merge(right);
        left
    }

    fn finish(&self, state: Self::State) -> Self::Output {
        state.into_inner()
    }

    fn is_unordered(&self) -> bool {
        true
    }
}

// Tests
