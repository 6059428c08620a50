//! Bounded-memory bit packing.
//!
//! [`BoundedBitPacker`] packs codewords MSB-first into a buffer of fixed
//! capacity. Output size is unbounded (it grows with the input file), so the
//! packer never grows its buffer: when a codeword does not fit, the bits that
//! spill past the end go into a secondary overflow buffer sized exactly to
//! them, and the caller drains the full primary buffer before appending more.
//!
//! # Bit Ordering
//!
//! Bits are packed starting from the most significant bit of each byte. A
//! trailing partial byte is zero-padded in its unused low-order bits.
//!
//! # Example
//!
//! ```
//! use wordhuff_core::{BitSequence, BoundedBitPacker};
//!
//! let mut packer = BoundedBitPacker::new(1).unwrap();
//! let code: BitSequence = [true, false, true].into_iter().collect();
//!
//! packer.append(&code).unwrap(); // 101
//! packer.append(&code).unwrap(); // 101101
//! packer.append(&code).unwrap(); // 8 bits fit, 1 spills over
//! assert!(packer.has_overflow());
//!
//! assert_eq!(packer.drain_full().unwrap(), vec![0b1011_0110]);
//! assert_eq!(packer.drain_partial().unwrap(), vec![0b1000_0000]);
//! assert!(packer.is_empty());
//! ```

use crate::bitseq::BitSequence;
use crate::error::{Result, WordHuffError};

/// Packs bit sequences into a fixed-capacity buffer, spilling into an
/// overflow buffer when the primary buffer fills up.
#[derive(Debug)]
pub struct BoundedBitPacker {
    /// Primary buffer; its length is the capacity and never changes.
    primary: Vec<u8>,
    /// Bits that did not fit, addressed as a continuation of `primary`.
    overflow: Option<Vec<u8>>,
    /// Write cursor in bits, counted from the start of `primary`.
    bit_pos: usize,
}

impl BoundedBitPacker {
    /// Create a packer with a primary buffer of `capacity` bytes.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(WordHuffError::packer_state("capacity must be non-zero"));
        }
        Ok(Self {
            primary: vec![0u8; capacity],
            overflow: None,
            bit_pos: 0,
        })
    }

    /// Capacity of the primary buffer in bytes.
    pub fn capacity(&self) -> usize {
        self.primary.len()
    }

    /// Current write cursor as `(byte index, bit index)`.
    ///
    /// Byte indices at or past [`capacity`](Self::capacity) point into the
    /// overflow buffer.
    pub fn cursor(&self) -> (usize, u8) {
        (self.bit_pos / 8, (self.bit_pos % 8) as u8)
    }

    /// Number of bits held (primary and overflow).
    pub fn bits_written(&self) -> usize {
        self.bit_pos
    }

    /// Check if bits spilled past the primary buffer.
    pub fn has_overflow(&self) -> bool {
        self.overflow.is_some()
    }

    /// Check if no bits were written since the last drain.
    pub fn is_empty(&self) -> bool {
        self.bit_pos == 0
    }

    /// Pack `bits` MSB-first at the cursor.
    ///
    /// Fails with [`WordHuffError::PackerState`] while an overflow is pending.
    pub fn append(&mut self, bits: &BitSequence) -> Result<()> {
        if self.overflow.is_some() {
            return Err(WordHuffError::packer_state(
                "overflow must be drained before appending",
            ));
        }

        let capacity_bits = self.primary.len() * 8;
        for (i, bit) in bits.iter().enumerate() {
            if self.bit_pos < capacity_bits {
                if bit {
                    self.primary[self.bit_pos / 8] |= 0x80 >> (self.bit_pos % 8);
                }
            } else {
                let remaining = bits.len() - i;
                let overflow = self
                    .overflow
                    .get_or_insert_with(|| vec![0u8; remaining.div_ceil(8)]);
                let offset = self.bit_pos - capacity_bits;
                if bit {
                    overflow[offset / 8] |= 0x80 >> (offset % 8);
                }
            }
            self.bit_pos += 1;
        }

        Ok(())
    }

    /// Take the full primary buffer and move overflow bits to its start.
    ///
    /// If the overflow held more than one capacity's worth of bits, the
    /// surplus stays in overflow and [`has_overflow`](Self::has_overflow)
    /// remains true; call again until it is false.
    pub fn drain_full(&mut self) -> Result<Vec<u8>> {
        let Some(overflow) = self.overflow.take() else {
            return Err(WordHuffError::packer_state(
                "drain_full requires a pending overflow",
            ));
        };

        let capacity = self.primary.len();
        let full = std::mem::replace(&mut self.primary, vec![0u8; capacity]);

        // Primary ends on a byte boundary, so overflow bytes shift over intact.
        if overflow.len() > capacity {
            self.primary.copy_from_slice(&overflow[..capacity]);
            self.overflow = Some(overflow[capacity..].to_vec());
        } else {
            self.primary[..overflow.len()].copy_from_slice(&overflow);
        }
        self.bit_pos -= capacity * 8;

        log::trace!(
            "packer drained {} bytes, {} bits carried over",
            capacity,
            self.bit_pos
        );
        Ok(full)
    }

    /// Take the bytes written so far, including a zero-padded partial byte,
    /// and reset the cursor.
    pub fn drain_partial(&mut self) -> Result<Vec<u8>> {
        if self.overflow.is_some() {
            return Err(WordHuffError::packer_state(
                "drain_full must be called while an overflow is pending",
            ));
        }

        let used = self.bit_pos.div_ceil(8);
        let out = self.primary[..used].to_vec();
        self.primary[..used].fill(0);
        self.bit_pos = 0;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> BitSequence {
        s.chars().map(|c| c == '1').collect()
    }

    /// Append every sequence, draining whenever the packer overflows.
    fn pack_all(capacity: usize, codes: &[BitSequence]) -> Vec<u8> {
        let mut packer = BoundedBitPacker::new(capacity).unwrap();
        let mut out = Vec::new();
        for code in codes {
            packer.append(code).unwrap();
            while packer.has_overflow() {
                out.extend(packer.drain_full().unwrap());
            }
        }
        out.extend(packer.drain_partial().unwrap());
        out
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(
            BoundedBitPacker::new(0),
            Err(WordHuffError::PackerState { .. })
        ));
    }

    #[test]
    fn test_msb_first_with_padding() {
        let mut packer = BoundedBitPacker::new(4).unwrap();
        packer.append(&parse("0")).unwrap();
        packer.append(&parse("10")).unwrap();
        packer.append(&parse("0")).unwrap();
        packer.append(&parse("11")).unwrap();

        assert_eq!(packer.cursor(), (0, 6));
        assert!(!packer.has_overflow());
        // 010011 + 00 padding
        assert_eq!(packer.drain_partial().unwrap(), vec![0b0100_1100]);
        assert!(packer.is_empty());
    }

    #[test]
    fn test_exact_fill_does_not_overflow() {
        let mut packer = BoundedBitPacker::new(1).unwrap();
        packer.append(&parse("11110000")).unwrap();
        assert!(!packer.has_overflow());
        assert_eq!(packer.cursor(), (1, 0));

        // The next bit is the first to spill
        packer.append(&parse("1")).unwrap();
        assert!(packer.has_overflow());
        assert_eq!(packer.drain_full().unwrap(), vec![0xF0]);
        assert_eq!(packer.cursor(), (0, 1));
        assert_eq!(packer.drain_partial().unwrap(), vec![0x80]);
    }

    #[test]
    fn test_overflow_continues_cursor() {
        let mut packer = BoundedBitPacker::new(2).unwrap();
        packer.append(&parse("1010101010101")).unwrap(); // 13 bits
        packer.append(&parse("111111")).unwrap(); // 3 fit, 3 spill

        assert!(packer.has_overflow());
        assert_eq!(packer.bits_written(), 19);
        assert_eq!(packer.cursor(), (2, 3));

        let full = packer.drain_full().unwrap();
        assert_eq!(full, vec![0b1010_1010, 0b1010_1111]);
        assert!(!packer.has_overflow());
        assert_eq!(packer.cursor(), (0, 3));
        assert_eq!(packer.drain_partial().unwrap(), vec![0b1110_0000]);
    }

    #[test]
    fn test_append_with_pending_overflow_fails() {
        let mut packer = BoundedBitPacker::new(1).unwrap();
        packer.append(&parse("111111111")).unwrap();
        assert!(packer.has_overflow());
        assert!(matches!(
            packer.append(&parse("0")),
            Err(WordHuffError::PackerState { .. })
        ));
        assert!(packer.drain_partial().is_err());
    }

    #[test]
    fn test_drain_full_without_overflow_fails() {
        let mut packer = BoundedBitPacker::new(1).unwrap();
        packer.append(&parse("1")).unwrap();
        assert!(packer.drain_full().is_err());
    }

    #[test]
    fn test_sequence_longer_than_capacity() {
        // 20 bits into a 1-byte packer spill across two extra drains
        let code = parse("11001100101010100001");
        let mut packer = BoundedBitPacker::new(1).unwrap();
        packer.append(&code).unwrap();

        let mut out = Vec::new();
        let mut drains = 0;
        while packer.has_overflow() {
            out.extend(packer.drain_full().unwrap());
            drains += 1;
        }
        out.extend(packer.drain_partial().unwrap());

        assert_eq!(drains, 2);
        assert_eq!(out, vec![0b1100_1100, 0b1010_1010, 0b0001_0000]);
    }

    #[test]
    fn test_small_capacity_matches_unbounded() {
        let codes: Vec<BitSequence> = (0..500)
            .map(|i| {
                let len = 1 + (i * 7) % 13;
                (0..len).map(|j| (i + j) % 3 == 0).collect()
            })
            .collect();

        let unbounded = pack_all(1 << 16, &codes);
        for capacity in [1, 2, 3, 7, 64] {
            assert_eq!(pack_all(capacity, &codes), unbounded, "capacity {capacity}");
        }
    }

    #[test]
    fn test_empty_drain() {
        let mut packer = BoundedBitPacker::new(8).unwrap();
        assert!(packer.is_empty());
        assert!(packer.drain_partial().unwrap().is_empty());
        packer.append(&BitSequence::new()).unwrap();
        assert!(packer.is_empty());
    }
}
