//! Compressed file header.
//!
//! ```text
//! offset 0 : 1 byte  word size n
//! offset 1 : 8 bytes original length L (u64, big-endian)
//! ```

use crate::config::WordSize;
use std::io::{Read, Write};
use wordhuff_core::{Result, WordHuffError};

/// Size of the header in bytes.
pub const HEADER_LEN: usize = 9;

/// Parameters needed to decode the rest of the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Word size the input was partitioned with.
    pub word_size: WordSize,
    /// Length of the original input in bytes.
    pub original_len: u64,
}

impl Header {
    /// Serialize to wire form.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0u8; HEADER_LEN];
        bytes[0] = self.word_size.as_u8();
        bytes[1..].copy_from_slice(&self.original_len.to_be_bytes());
        bytes
    }

    /// Parse from wire form.
    pub fn from_bytes(bytes: &[u8; HEADER_LEN]) -> Result<Self> {
        let word_size = WordSize::new(bytes[0] as usize)?;
        let mut len = [0u8; 8];
        len.copy_from_slice(&bytes[1..]);
        Ok(Self {
            word_size,
            original_len: u64::from_be_bytes(len),
        })
    }

    /// Write the header.
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.to_bytes())?;
        Ok(())
    }

    /// Read the header.
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let mut bytes = [0u8; HEADER_LEN];
        reader
            .read_exact(&mut bytes)
            .map_err(|e| WordHuffError::from_read(e, HEADER_LEN))?;
        Self::from_bytes(&bytes)
    }
}
