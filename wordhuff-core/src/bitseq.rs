//! Growable, append-only bit sequences.
//!
//! A [`BitSequence`] holds a codeword or a tree-traversal path. Bits are
//! stored MSB-first in a byte vector, matching the order in which
//! [`BoundedBitPacker`](crate::bitstream::BoundedBitPacker) writes them out.
//!
//! # Example
//!
//! ```
//! use wordhuff_core::BitSequence;
//!
//! let mut path = BitSequence::new();
//! path.append(true);
//! path.append(false);
//!
//! let left = path.with_appended(false);
//! assert_eq!(left.to_string(), "100");
//! assert_eq!(path.len(), 2);
//! ```

use crate::error::{Result, WordHuffError};
use std::fmt;

/// An ordered, append-only sequence of bits.
///
/// Unused low-order bits of the last storage byte are always zero, so the
/// derived equality and hashing are structural.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitSequence {
    /// Packed bits (MSB-first).
    bytes: Vec<u8>,
    /// Number of valid bits.
    len: usize,
}

impl BitSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sequence with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Append one bit.
    #[inline]
    pub fn append(&mut self, bit: bool) {
        let bit_offset = self.len % 8;
        if bit_offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 0x80 >> bit_offset;
        }
        self.len += 1;
    }

    /// Return a copy of this sequence with `bit` appended.
    ///
    /// Used to fork a traversal path into its two children's paths.
    pub fn with_appended(&self, bit: bool) -> Self {
        let mut forked = self.clone();
        forked.append(bit);
        forked
    }

    /// Get the bit at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<bool> {
        if index >= self.len {
            return Err(WordHuffError::index_out_of_range(index, self.len));
        }
        Ok(self.bit(index))
    }

    /// Unchecked read; callers guarantee `index < len`.
    #[inline]
    fn bit(&self, index: usize) -> bool {
        self.bytes[index / 8] & (0x80 >> (index % 8)) != 0
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the sequence has no bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over the bits in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = bool> + '_ {
        (0..self.len).map(|i| self.bit(i))
    }

    /// Check if `self` is a prefix of `other` (an equal sequence counts).
    pub fn is_prefix_of(&self, other: &BitSequence) -> bool {
        self.len <= other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut seq = BitSequence::new();
        for bit in iter {
            seq.append(bit);
        }
        seq
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
