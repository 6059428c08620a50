//! Error types for WordHuff operations.
//!
//! Every failure of the codec pipeline is surfaced as a distinct variant of
//! [`WordHuffError`]: I/O failures on either file, structural problems in a
//! compressed stream, and contract violations of the bit-level containers.

use std::io;
use thiserror::Error;

/// Longest code length that fits in a dictionary entry's length byte.
pub const MAX_CODE_LENGTH: usize = u8::MAX as usize;

/// The main error type for WordHuff operations.
#[derive(Debug, Error)]
pub enum WordHuffError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Word size is outside `1..=255`.
    #[error("Invalid word size: {size} (must be 1-255)")]
    InvalidWordSize {
        /// The rejected word size.
        size: usize,
    },

    /// Frequency table has no entries, so no tree can be built.
    #[error("Empty input: frequency table has no entries")]
    EmptyInput,

    /// A derived code does not fit in the one-byte length field.
    #[error("Code too long: {length} bits exceeds maximum of {MAX_CODE_LENGTH}")]
    CodeTooLong {
        /// Length of the offending code in bits.
        length: usize,
    },

    /// Compressed stream is structurally invalid.
    #[error("Corrupt stream at offset {offset}: {message}")]
    CorruptStream {
        /// Byte offset in the compressed stream where the problem was found.
        offset: u64,
        /// Description of the problem.
        message: String,
    },

    /// Compressed stream ended early.
    #[error("Unexpected end of file: expected {expected} more bytes")]
    UnexpectedEof {
        /// Number of bytes that were expected but not available.
        expected: usize,
    },

    /// Bit index past the end of a bit sequence.
    #[error("Bit index {index} out of range for sequence of length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Length of the sequence.
        len: usize,
    },

    /// Bit packer operation called in the wrong state.
    #[error("Bit packer misuse: {message}")]
    PackerState {
        /// Description of the violated precondition.
        message: &'static str,
    },
}

/// Result type alias for WordHuff operations.
pub type Result<T> = std::result::Result<T, WordHuffError>;

impl WordHuffError {
    /// Create an invalid word size error.
    pub fn invalid_word_size(size: usize) -> Self {
        Self::InvalidWordSize { size }
    }

    /// Create a code too long error.
    pub fn code_too_long(length: usize) -> Self {
        Self::CodeTooLong { length }
    }

    /// Create a corrupt stream error.
    pub fn corrupt(offset: u64, message: impl Into<String>) -> Self {
        Self::CorruptStream {
            offset,
            message: message.into(),
        }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: usize) -> Self {
        Self::UnexpectedEof { expected }
    }

    /// Create an index out of range error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a packer state error.
    pub fn packer_state(message: &'static str) -> Self {
        Self::PackerState { message }
    }

    /// Map an `UnexpectedEof` I/O error to [`WordHuffError::UnexpectedEof`].
    ///
    /// `read_exact` reports truncation as an I/O error; the decoder wants it
    /// as a format error so callers can tell a short file from a failing disk.
    pub fn from_read(err: io::Error, expected: usize) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Self::unexpected_eof(expected)
        } else {
            Self::Io(err)
        }
    }
}
