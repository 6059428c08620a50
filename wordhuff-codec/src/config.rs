//! Codec configuration: word size and buffer budget.

use wordhuff_core::{Result, WordHuffError};

/// Size in bytes of the words the input is partitioned into.
///
/// Stored in the one-byte header field, so valid sizes are `1..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordSize(u8);

impl WordSize {
    /// Validate a word size.
    pub fn new(size: usize) -> Result<Self> {
        match u8::try_from(size) {
            Ok(size) if size > 0 => Ok(Self(size)),
            _ => Err(WordHuffError::invalid_word_size(size)),
        }
    }

    /// Word size in bytes.
    pub fn get(self) -> usize {
        self.0 as usize
    }

    /// Word size as stored in the header.
    pub fn as_u8(self) -> u8 {
        self.0
    }
}

/// Memory budget for a compression or decompression run.
///
/// Every working buffer (read chunks, the bit packer, the dictionary write
/// buffer, the decoder output buffer) is capped by `max_buffer_size`, so
/// memory use does not depend on the size of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Maximum size of any single working buffer in bytes.
    pub max_buffer_size: usize,
}

impl CodecConfig {
    /// Default configuration: 8 MiB buffers.
    pub const DEFAULT: Self = Self {
        max_buffer_size: 8 * 1024 * 1024,
    };

    /// Small buffers (4 KiB), useful for exercising chunk boundaries.
    pub const SMALL: Self = Self {
        max_buffer_size: 4 * 1024,
    };

    /// Create a configuration with the given buffer budget.
    pub fn new(max_buffer_size: usize) -> Self {
        Self { max_buffer_size }
    }

    /// Size of one streaming read: the largest multiple of the word size
    /// that fits the budget, and never less than one word.
    pub fn chunk_size(&self, word_size: WordSize) -> usize {
        let n = word_size.get();
        (self.max_buffer_size / n).max(1) * n
    }

    /// Capacity of the encoder's bit packer in bytes.
    pub fn packer_capacity(&self) -> usize {
        self.max_buffer_size.max(1)
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
