/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Overlap clustering for fixed-universe bit-vector sets.
//!
//! This crate groups a stream of bit-vectors into clusters of
//! transitively-intersecting members. Two reducers are provided:
//!
//! - [`DisjointUnion`] reduces the stream to the canonical set of
//!   pairwise-disjoint union vectors, discarding membership.
//! - [`GroupOverlapping`] reduces the stream to a map from each
//!   disjoint union (the group's *key*) to the set of original
//!   vectors that were merged into it.
//!
//! Both implement the [`Reducer`] protocol (supplier, accumulate,
//! combine, finish), and both are *mergeable*: folding the input
//! sequentially, shuffling it, or splitting it into arbitrary
//! partitions and combining the partial states all produce the same
//! groups. The reduction states are bounded join-semilattices
//! (`algebra` crate), so this order independence is an algebraic law
//! of the state rather than a property of any particular driver.
//!
//! ```
//! use bitset::BitSet;
//! use overlap::GroupOverlapping;
//! use overlap::Reducer;
//!
//! let a = BitSet::from_indices(5, [0, 1]).unwrap();
//! let b = BitSet::from_indices(5, [2, 3]).unwrap();
//! let bridge = BitSet::from_indices(5, [1, 2]).unwrap();
//!
//! // `bridge` connects `a` and `b`, so all three land in one group.
//! let groups = GroupOverlapping::new().reduce([a, b, bridge]);
//! let key = BitSet::from_indices(5, [0, 1, 2, 3]).unwrap();
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[&key].len(), 3);
//! ```
//!
//! Reducers consume their items by value; a caller that wants to keep
//! ownership of its vectors feeds references through the
//! [`cloned`](Reducer::cloned) adaptor, which clones at the engine
//! boundary. [`Frozen`] wraps the grouping reducer so finished
//! membership sets are exposed read-only.
//!
//! Each accumulate scans the current groups linearly; with all inputs
//! in one cluster the whole reduction is quadratic. This is a
//! deliberate trade-off for group counts in the tens to low hundreds;
//! there is no spatial index.

mod bits;
pub use bits::Bits;
pub use bits::intersect_all;
pub use bits::union_all;

mod reducer;
pub use reducer::Reducer;

mod cloned;
pub use cloned::Cloned;

mod disjoint;
pub use disjoint::DisjointGroups;
pub use disjoint::DisjointUnion;

mod grouping;
pub use grouping::GroupOverlapping;
pub use grouping::OverlapGroups;

mod frozen;
pub use frozen::Frozen;
pub use frozen::FrozenSet;

/// Property-based generators for randomized test input.
#[cfg(test)]
pub mod strategy;
