//! # WordHuff Core
//!
//! Core components for the WordHuff compressor.
//!
//! This crate provides the bit-level building blocks shared by the encoder
//! and decoder:
//!
//! - [`bitseq`]: Append-only bit sequences for codewords and tree paths
//! - [`bitstream`]: Bounded-memory MSB-first bit packing with overflow
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Frontend                                            │
//! │     wordhuff CLI, file-level compress/decompress        │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     Frequency analysis, Huffman tree, dictionary,       │
//! │     encoder, decoder                                    │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Bits (this crate)                                   │
//! │     BitSequence, BoundedBitPacker, errors               │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use wordhuff_core::{BitSequence, BoundedBitPacker};
//!
//! let code: BitSequence = [false, true, true].into_iter().collect();
//! let mut packer = BoundedBitPacker::new(16).unwrap();
//! packer.append(&code).unwrap();
//! assert_eq!(packer.drain_partial().unwrap(), vec![0b0110_0000]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bitseq;
pub mod bitstream;
pub mod error;

// Re-exports for convenience
pub use bitseq::BitSequence;
pub use bitstream::BoundedBitPacker;
pub use error::{MAX_CODE_LENGTH, Result, WordHuffError};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitseq::BitSequence;
    pub use crate::bitstream::BoundedBitPacker;
    pub use crate::error::{Result, WordHuffError};
}
