//! Words and word-aligned chunked reading.

use crate::config::{CodecConfig, WordSize};
use std::borrow::Borrow;
use std::io::Read;
use wordhuff_core::Result;

/// One symbol of the input alphabet: `n` bytes, or fewer for the final word
/// of a file whose length is not a multiple of `n`.
///
/// Ordering is lexicographic over the bytes; the tree builder relies on it
/// for tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(Box<[u8]>);

impl Word {
    /// Create a word from its bytes.
    pub fn new(bytes: impl Into<Box<[u8]>>) -> Self {
        Self(bytes.into())
    }

    /// The word's bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the word has no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[u8]> for Word {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.into())
    }
}

impl Borrow<[u8]> for Word {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

/// Reads an input in word-aligned chunks.
///
/// Each chunk is filled completely unless the input ends, so every chunk
/// but the last is a whole number of words and only the file's final word
/// can come out short.
#[derive(Debug)]
pub struct WordChunks<R: Read> {
    reader: R,
    buf: Vec<u8>,
    chunk_size: usize,
    word_size: WordSize,
    bytes_read: u64,
    chunks_read: u64,
}

impl<R: Read> WordChunks<R> {
    /// Wrap `reader`, reading chunks sized by `config`.
    pub fn new(reader: R, word_size: WordSize, config: &CodecConfig) -> Self {
        let chunk_size = config.chunk_size(word_size);
        Self {
            reader,
            buf: Vec::with_capacity(chunk_size.min(64 * 1024)),
            chunk_size,
            word_size,
            bytes_read: 0,
            chunks_read: 0,
        }
    }

    /// Read the next chunk, or `None` at end of input.
    pub fn next_chunk(&mut self) -> Result<Option<&[u8]>> {
        self.buf.clear();
        let read = (&mut self.reader)
            .take(self.chunk_size as u64)
            .read_to_end(&mut self.buf)?;
        if read == 0 {
            return Ok(None);
        }
        self.bytes_read += read as u64;
        self.chunks_read += 1;
        Ok(Some(&self.buf))
    }

    /// Word size used to partition chunks.
    pub fn word_size(&self) -> WordSize {
        self.word_size
    }

    /// Total bytes read so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Number of chunks read so far.
    pub fn chunks_read(&self) -> u64 {
        self.chunks_read
    }
}
