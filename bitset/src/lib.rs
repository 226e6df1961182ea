/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! A fixed-universe bit-vector: a finite boolean set over the index
//! universe `0..num_bits`.
//!
//! [`BitSet`] packs its members into 64-bit blocks and keeps two
//! structural invariants: the block count always matches the universe
//! size, and bits at positions at or beyond `num_bits` are zero. The
//! invariants let equality and hashing be derived structurally, which
//! in turn lets a `BitSet` serve as a key in hashed collections.
//!
//! Set algebra (`or`, `and`, `intersects`) is total: operands may have
//! different universe sizes, and the result takes the larger universe.
//! Only operations naming an explicit index can fail.
//!
//! ```
//! use bitset::BitSet;
//!
//! let a = BitSet::from_indices(8, [0, 1]).unwrap();
//! let b = BitSet::from_indices(8, [1, 2]).unwrap();
//!
//! assert!(a.intersects(&b));
//! assert_eq!(a.or(&b), BitSet::from_indices(8, [0, 1, 2]).unwrap());
//! assert_eq!(a.and(&b), BitSet::from_indices(8, [1]).unwrap());
//! ```

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Bits per packed block.
const BLOCK_BITS: usize = 64;

/// The type of error for bit-set operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitSetError {
    /// An index at or beyond the universe size was named.
    #[error("index {index} out of range for universe of {num_bits} bits")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The universe size of the set.
        num_bits: usize,
    },
}

/// A finite boolean set over the fixed index universe `0..num_bits`.
///
/// Equality and hashing are structural over (universe size, members):
/// two sets with the same members over different universes are
/// distinct values. This is what makes a `BitSet` usable as a grouping
/// key.
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Hash)]
pub struct BitSet {
    num_bits: usize,
    blocks: Vec<u64>,
}

impl BitSet {
    /// Create an empty set over a universe of `num_bits` indices.
    pub fn new(num_bits: usize) -> Self {
        Self {
            num_bits,
            blocks: vec![0; num_bits.div_ceil(BLOCK_BITS)],
        }
    }

    /// The empty set over the empty universe. This is the identity for
    /// [`or`](Self::or): `empty.or(&x) == x` for every `x`.
    pub fn empty() -> Self {
        Self::new(0)
    }

    /// Build a set over `num_bits` indices from the given members.
    ///
    /// Fails with [`BitSetError::IndexOutOfRange`] if any index is at
    /// or beyond the universe size.
    pub fn from_indices<I>(num_bits: usize, indices: I) -> Result<Self, BitSetError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut out = Self::new(num_bits);
        for index in indices {
            out.set(index)?;
        }
        Ok(out)
    }

    /// The universe size.
    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    /// True iff no index is set.
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|b| *b == 0)
    }

    /// The number of set indices.
    pub fn count_ones(&self) -> usize {
        self.blocks.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Set the bit at `index`.
    pub fn set(&mut self, index: usize) -> Result<(), BitSetError> {
        if index >= self.num_bits {
            return Err(BitSetError::IndexOutOfRange {
                index,
                num_bits: self.num_bits,
            });
        }
        self.blocks[index / BLOCK_BITS] |= 1u64 << (index % BLOCK_BITS);
        Ok(())
    }

    /// Clear the bit at `index`.
    pub fn clear(&mut self, index: usize) -> Result<(), BitSetError> {
        if index >= self.num_bits {
            return Err(BitSetError::IndexOutOfRange {
                index,
                num_bits: self.num_bits,
            });
        }
        self.blocks[index / BLOCK_BITS] &= !(1u64 << (index % BLOCK_BITS));
        Ok(())
    }

    /// True iff the bit at `index` is set. Indices outside the
    /// universe are unset by definition.
    pub fn get(&self, index: usize) -> bool {
        if index >= self.num_bits {
            return false;
        }
        self.blocks[index / BLOCK_BITS] & (1u64 << (index % BLOCK_BITS)) != 0
    }

    /// The union of `self` and `other`. The result's universe is the
    /// larger of the two operands'.
    pub fn or(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.or_assign(other);
        out
    }

    /// In-place union, growing the universe to `other`'s if larger.
    pub fn or_assign(&mut self, other: &Self) {
        if other.num_bits > self.num_bits {
            self.num_bits = other.num_bits;
            self.blocks.resize(other.blocks.len(), 0);
        }
        for (dst, src) in self.blocks.iter_mut().zip(&other.blocks) {
            *dst |= *src;
        }
    }

    /// The intersection of `self` and `other`. The result's universe
    /// is the larger of the two operands'.
    pub fn and(&self, other: &Self) -> Self {
        let num_bits = self.num_bits.max(other.num_bits);
        let mut blocks = vec![0u64; num_bits.div_ceil(BLOCK_BITS)];
        for ((dst, a), b) in blocks.iter_mut().zip(&self.blocks).zip(&other.blocks) {
            *dst = a & b;
        }
        Self { num_bits, blocks }
    }

    /// True iff the intersection of `self` and `other` is non-empty.
    pub fn intersects(&self, other: &Self) -> bool {
        self.blocks
            .iter()
            .zip(&other.blocks)
            .any(|(a, b)| a & b != 0)
    }

    /// Iterate the set indices in ascending order.
    pub fn ones(&self) -> Ones<'_> {
        Ones {
            blocks: self.blocks.iter().enumerate(),
            word: 0,
            base: 0,
        }
    }
}

impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitSet<{}>", self.num_bits)?;
        f.debug_set().entries(self.ones()).finish()
    }
}

/// Iterator over the set indices of a [`BitSet`], ascending.
pub struct Ones<'a> {
    blocks: std::iter::Enumerate<std::slice::Iter<'a, u64>>,
    word: u64,
    base: usize,
}

impl<'a> Iterator for Ones<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if self.word != 0 {
                let bit = self.word.trailing_zeros() as usize;
                self.word &= self.word - 1;
                return Some(self.base + bit);
            }
            let (i, word) = self.blocks.next()?;
            self.base = i * BLOCK_BITS;
            self.word = *word;
        }
    }
}

// Tests
