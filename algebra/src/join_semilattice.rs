/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Join-semilattice instances for standard collections.
//!
//! The one instance the reduction engine leans on is `HashSet<T>`
//! under union: membership sets grow monotonically as clusters merge,
//! and union is associative, commutative, and idempotent, so a set of
//! members accumulated across partitions converges regardless of merge
//! order.

use std::collections::HashSet;
use std::hash::Hash;

use super::BoundedJoinSemilattice;
use super::JoinSemilattice;

/// `HashSet<T>`: join = union
///
/// A `HashSet<T>` forms a join-semilattice under set union:
/// - join = union (∪)
/// - bottom = empty set (∅)
impl<T: Eq + Hash + Clone> JoinSemilattice for HashSet<T> {
    fn join(&self, other: &Self) -> Self {
        self.union(other).cloned().collect()
    }
}

impl<T: Eq + Hash + Clone> BoundedJoinSemilattice for HashSet<T> {
    fn bottom() -> Self {
        HashSet::new()
    }
}

// Tests
