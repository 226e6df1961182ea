/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Reduction of a bit-vector stream to overlap groups that keep their
//! members.

use std::collections::HashMap;
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

/// The accumulation state of [`GroupOverlapping`]: a map from each
/// group's key (the OR of its members) to the set of original vectors
/// merged into it.
///
/// Three invariants hold after every insert and every merge:
///
/// - **Disjointness**: no two keys intersect.
/// - **Closure**: each key equals the OR of its members.
/// - **Coverage**: every vector inserted so far is a member of exactly
///   one group.
///
/// Members are a value set: inserting two equal vectors yields a
/// single member.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(
    serialize = "B: Eq + Hash + Serialize",
    deserialize = "B: Eq + Hash + Deserialize<'de>"
))]
pub struct OverlapGroups<B> {
    groups: HashMap<B, HashSet<B>>,
}

impl<B: Eq + Hash> PartialEq for OverlapGroups<B> {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}

impl<B: Eq + Hash> Eq for OverlapGroups<B> {}

impl<B: Bits> OverlapGroups<B> {
    /// Create an empty state.
    pub fn new() -> Self {
        Self {
            groups: HashMap::new(),
        }
    }

    /// Fold one vector into the state.
    ///
    /// Every entry whose key intersects `v` is removed; one entry
    /// replaces them, keyed by the OR of the removed keys and `v`,
    /// holding the union of the removed member sets and `v`. Removal
    /// happens before the insertion, and the insertion overwrites, so
    /// the degenerate case where `v` is already covered (the new key
    /// equals a removed key) re-inserts that entry with `v` added to
    /// its members.
    pub fn insert(&mut self, v: B) {
        let hit_keys: Vec<B> = self
            .groups
            .keys()
            .filter(|k| k.intersects(&v))
            .cloned()
            .collect();

        let mut members = HashSet::new();
        for k in &hit_keys {
            let hit = self
                .groups
                .remove(k)
                .expect("hit key was just read from this map");
            members.extend(hit);
        }

        let mut key = union_all(&hit_keys);
        key.or_assign(&v);
        members.insert(v);
        self.groups.insert(key, members);
    }

    /// Merge another state into this one by replaying every member of
    /// every group, one vector at a time.
    ///
    /// Replay is what makes the merge confluent. A key-wise map union
    /// (the natural pointwise join of two maps) would be wrong here:
    /// two keys that are bit-for-bit different in the two states can
    /// still belong to one transitive cluster, and only re-deriving
    /// the closure member by member finds it.
    pub fn merge(&mut self, other: Self) {
        for (_key, members) in other.groups {
            for v in members {
                self.insert(v);
            }
        }
    }

    /// The membership set for this exact key, if present.
    pub fn get(&self, key: &B) -> Option<&HashSet<B>> {
        self.groups.get(key)
    }

    /// Iterate over the group keys.
    pub fn keys(&self) -> impl Iterator<Item = &B> {
        self.groups.keys()
    }

    /// Iterate over `(key, members)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&B, &HashSet<B>)> {
        self.groups.iter()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Is the state empty?
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Consume the state and return the underlying map.
    pub fn into_inner(self) -> HashMap<B, HashSet<B>> {
        self.groups
    }
}

impl<B: Bits> Default for OverlapGroups<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Bits> Extend<B> for OverlapGroups<B> {
    fn extend<I: IntoIterator<Item = B>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<B: Bits> FromIterator<B> for OverlapGroups<B> {
    fn from_iter<I: IntoIterator<Item = B>>(iter: I) -> Self {
        let mut state = Self::new();
        state.extend(iter);
        state
    }
}

impl<B: Bits> JoinSemilattice for OverlapGroups<B> {
    fn join(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.merge(other.clone());
        out
    }
}

impl<B: Bits> BoundedJoinSemilattice for OverlapGroups<B> {
    fn bottom() -> Self {
        Self::new()
    }
}

/// Reduces a stream of bit-vectors to a map from each disjoint union
/// key to the set of original vectors transitively merged into it.
///
/// The finished member sets are plain `HashSet`s, mutable by the
/// caller; wrap the reducer in [`Frozen`](crate::Frozen) to expose
/// them read-only.
#[derive(Clone, Debug)]
pub struct GroupOverlapping<B>(PhantomData<B>);

impl<B> GroupOverlapping<B> {
    /// Create the reducer.
    pub fn new() -> Self {
        Self(PhantomData)
    }

    /// Wrap this reducer so finished membership sets are read-only.
    pub fn frozen(self) -> crate::Frozen<Self> {
        crate::Frozen::new(self)
    }
}

impl<B> Default for GroupOverlapping<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Bits> Reducer<B> for GroupOverlapping<B> {
    type State = OverlapGroups<B>;
    type Output = HashMap<B, HashSet<B>>;

    fn empty(&self) -> Self::State {
        OverlapGroups::new()
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
