/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

#![deny(missing_docs)]

//! Algebraic structures for order-insensitive reduction.
//!
//! This crate provides the trait vocabulary used to state, and test,
//! that a reduction may be split across independent partitions and
//! recombined without changing its result. A reduction state whose
//! merge operation is associative, commutative, and has an identity is
//! a commutative monoid; one whose merge is additionally idempotent is
//! a (bounded) join-semilattice. Either property is what licenses a
//! driver to fold partitions in any order, or in a fan-in tree, and
//! still converge on the sequential answer.
//!
//! # Quick Start
//!
//! ```rust
//! use std::collections::HashSet;
//!
//! use algebra::BoundedJoinSemilattice;
//! use algebra::JoinSemilattice;
//!
//! // HashSet joins by union.
//! let a: HashSet<u32> = [1, 2].into_iter().collect();
//! let b: HashSet<u32> = [2, 3].into_iter().collect();
//! let c = a.join(&b);
//! assert_eq!(c, [1, 2, 3].into_iter().collect());
//!
//! // The empty set is the identity for join.
//! assert_eq!(HashSet::<u32>::bottom().join(&c), c);
//! ```
//!
//! # Core Concepts
//!
//! - **Semigroup**: a type with an associative binary operation
//!   (`combine`).
//!
//! - **Monoid**: a semigroup with an identity element (`empty`).
//!
//! - **CommutativeMonoid**: a monoid where combine is commutative.
//!   This is the minimum structure a mergeable reduction state must
//!   have for partition-order independence.
//!
//! - **JoinSemilattice**: a commutative, associative, and
//!   **idempotent** merge operation (`join`). `join` computes a least
//!   upper bound under the order `a ≤ b` iff `a.join(&b) == b`.
//!   Idempotence (`a ⊔ a = a`) additionally makes re-merging the same
//!   partial state a no-op.
//!
//! - **BoundedJoinSemilattice**: a join-semilattice with an explicit
//!   bottom element (⊥) serving as the identity for join.
//!
//! Every join-semilattice is a semigroup, and every bounded
//! join-semilattice is a commutative monoid; blanket impls below make
//! those facts available without boilerplate.

mod join_semilattice;

// Semigroup

/// A **semigroup**: a type with an associative binary operation.
///
/// Laws (not enforced by type system):
///
/// - **Associative**:
///   `a.combine(b).combine(c) == a.combine(b.combine(c))`
///
/// # Example
///
/// ```rust
/// use algebra::Semigroup;
///
/// // A word-sized index set; combine is bitwise OR.
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// struct Cover(u64);
///
/// impl Semigroup for Cover {
///     fn combine(&self, other: &Self) -> Self {
///         Cover(self.0 | other.0)
///     }
/// }
///
/// let x = Cover(0b0011);
/// let y = Cover(0b0110);
/// let z = Cover(0b1000);
/// assert_eq!(x.combine(&y).combine(&z), x.combine(&y.combine(&z)));
/// ```
pub trait Semigroup: Sized {
    /// Combine two elements associatively.
    fn combine(&self, other: &Self) -> Self;

    /// In-place combine.
    fn combine_assign(&mut self, other: &Self) {
        *self = self.combine(other);
    }
}

// Monoid

/// A **monoid**: a semigroup with an identity element.
///
/// Laws (not enforced by type system):
///
/// - **Associative**:
///   `a.combine(b).combine(c) == a.combine(b.combine(c))`
/// - **Left identity**: `empty().combine(a) == a`
/// - **Right identity**: `a.combine(empty()) == a`
///
/// # Example
///
/// ```rust
/// use algebra::Monoid;
/// use algebra::Semigroup;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// struct Cover(u64);
///
/// impl Semigroup for Cover {
///     fn combine(&self, other: &Self) -> Self {
///         Cover(self.0 | other.0)
///     }
/// }
///
/// impl Monoid for Cover {
///     fn empty() -> Self {
///         Cover(0)
///     }
/// }
///
/// let words = vec![Cover(0b001), Cover(0b100)];
/// assert_eq!(Cover::concat(words), Cover(0b101));
/// assert_eq!(Cover::concat(vec![]), Cover::empty());
/// ```
pub trait Monoid: Semigroup {
    /// The identity element.
    fn empty() -> Self;

    /// Fold an iterator using combine, starting from empty.
    fn concat<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        iter.into_iter()
            .fold(Self::empty(), |acc, x| acc.combine(&x))
    }
}

// CommutativeMonoid

/// A **commutative monoid**: a monoid where combine is commutative.
///
/// Laws (not enforced by type system):
///
/// - **Associative**:
///   `a.combine(b).combine(c) == a.combine(b.combine(c))`
/// - **Commutative**: `a.combine(b) == b.combine(a)`
/// - **Identity**: `a.combine(empty()) == a == empty().combine(a)`
///
/// This is the structure a partitioned reduction relies on: partial
/// states may be merged in whatever order the partitions complete.
pub trait CommutativeMonoid: Monoid {}

// JoinSemilattice

/// A **join-semilattice**: a type with an associative, commutative,
/// and idempotent binary operation (the join).
///
/// Laws (not enforced by type system):
///
/// - **Associative**: `a.join(b).join(c) == a.join(b.join(c))`
/// - **Commutative**: `a.join(b) == b.join(a)`
/// - **Idempotent**: `a.join(a) == a`
///
/// The `join` operation computes the least upper bound (supremum) in
/// the induced partial order: `x ≤ y` iff `x.join(y) == y`.
///
/// # Example
///
/// ```rust
/// use std::collections::HashSet;
///
/// use algebra::JoinSemilattice;
///
/// let a: HashSet<u32> = [1, 2].into_iter().collect();
/// let b: HashSet<u32> = [2, 3].into_iter().collect();
///
/// // join = union
/// assert_eq!(a.join(&b).len(), 3);
///
/// // Idempotent
/// assert_eq!(a.join(&a), a);
/// ```
pub trait JoinSemilattice: Sized {
    /// The join (least upper bound).
    fn join(&self, other: &Self) -> Self;

    /// In-place variant.
    fn join_assign(&mut self, other: &Self) {
        *self = self.join(other);
    }

    /// Derived partial order: x ≤ y iff x ⊔ y = y.
    fn leq(&self, other: &Self) -> bool
    where
        Self: PartialEq,
    {
        self.join(other) == *other
    }

    /// Join a finite iterator of values. Returns `None` for empty
    /// iterators.
    fn join_all<I>(it: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        it.into_iter().reduce(|acc, x| acc.join(&x))
    }
}

// BoundedJoinSemilattice

/// A **bounded join-semilattice**: a join-semilattice with a bottom
/// element that serves as the identity for join.
///
/// Laws (not enforced by type system):
///
/// - **Associative**: `a.join(b).join(c) == a.join(b.join(c))`
/// - **Commutative**: `a.join(b) == b.join(a)`
/// - **Idempotent**: `a.join(a) == a`
/// - **Identity**: `bottom().join(a) == a == a.join(bottom())`
///
/// The bottom element (⊥) is the least element in the partial order.
/// For a reduction state, ⊥ is the fresh state its supplier produces.
pub trait BoundedJoinSemilattice: JoinSemilattice {
    /// The bottom element of the lattice (⊥).
    ///
    /// This is the least element w.r.t. the induced partial order: for
    /// all `x`, `bottom().join(x) == x`.
    fn bottom() -> Self;

    /// Join a finite iterator of values, starting from ⊥.
    ///
    /// Never returns `None`: an empty iterator produces `bottom()`.
    fn join_all_from_bottom<I>(it: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        it.into_iter().fold(Self::bottom(), |acc, x| acc.join(&x))
    }
}

// Blanket implementations: JoinSemilattice provides Semigroup/Monoid

impl<T: JoinSemilattice> Semigroup for T {
    fn combine(&self, other: &Self) -> Self {
        self.join(other)
    }

    fn combine_assign(&mut self, other: &Self) {
        self.join_assign(other);
    }
}

impl<T: BoundedJoinSemilattice> Monoid for T {
    fn empty() -> Self {
        Self::bottom()
    }

    fn concat<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::join_all_from_bottom(iter)
    }
}

impl<T: BoundedJoinSemilattice> CommutativeMonoid for T {}

// Tests
