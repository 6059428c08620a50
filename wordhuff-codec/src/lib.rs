//! # WordHuff Codec
//!
//! Huffman compression over fixed-size words.
//!
//! The input is cut into `n`-byte words (1 ≤ n ≤ 255; the final word may be
//! shorter), an optimal prefix code is built over the distinct words, and
//! the coded bitstream is written after a small header and a dictionary
//! that lets the decoder rebuild the tree.
//!
//! ## File Format
//!
//! ```text
//! +------+----------------+------------------------------+-----------+
//! | n    | L (u64, BE)    | dictionary: (word[n], len)*  | bitstream |
//! +------+----------------+------------------------------+-----------+
//!   1 B      8 B             (n + 1) B per leaf, DFS order   MSB-first
//! ```
//!
//! The dictionary and bitstream are absent when `L` is zero. A file with a
//! single distinct word stores that word twice with one-bit codes, so every
//! word costs at least one bit.
//!
//! ## Example
//!
//! ```rust
//! use wordhuff_codec::{compress_bytes, decompress_bytes};
//!
//! let data = b"the cat sat on the mat";
//! let packed = compress_bytes(data, 2).expect("compression failed");
//! let unpacked = decompress_bytes(&packed).expect("decompression failed");
//! assert_eq!(unpacked, data);
//! ```
//!
//! ## Files
//!
//! ```rust,no_run
//! use wordhuff_codec::{compress_file, decompress_file};
//!
//! let packed = compress_file("notes.txt", 4)?;          // notes.txt.4.hc
//! let restored = decompress_file(&packed)?;              // extracted.notes.txt.4
//! # Ok::<(), wordhuff_core::WordHuffError>(())
//! ```
//!
//! All working buffers are capped by [`CodecConfig`], so memory use does
//! not grow with the input.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod decode;
pub mod dictionary;
pub mod encode;
pub mod file;
pub mod frequency;
pub mod header;
pub mod huffman;
pub mod word;

// Re-exports
pub use config::{CodecConfig, WordSize};
pub use decode::{DecompressStats, WordHuffDecoder};
pub use dictionary::{
    CodeTable, DictionaryEntry, LeafPaths, derive_codes, leaf_paths, read_dictionary,
    write_dictionary,
};
pub use encode::{CompressStats, WordHuffEncoder};
pub use file::{
    compress_file, compress_file_with, compressed_path, decompress_file, decompress_file_with,
    extracted_path,
};
pub use frequency::{FrequencyAnalysis, FrequencyTable, analyze};
pub use header::{HEADER_LEN, Header};
pub use huffman::{HuffmanTree, Node, NodeId};
pub use word::{Word, WordChunks};

use std::io::{Cursor, Read, Seek, Write};
use wordhuff_core::Result;

/// Compress `input` into `output` with default buffer limits.
pub fn compress<R: Read + Seek, W: Write>(
    input: R,
    output: W,
    word_size: usize,
) -> Result<CompressStats> {
    let word_size = WordSize::new(word_size)?;
    WordHuffEncoder::default().compress(input, output, word_size)
}

/// Decompress `input` into `output` with default buffer limits.
pub fn decompress<R: Read, W: Write>(input: R, output: W) -> Result<DecompressStats> {
    WordHuffDecoder::default().decompress(input, output)
}

/// Compress a byte slice.
pub fn compress_bytes(data: &[u8], word_size: usize) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    compress(Cursor::new(data), &mut out, word_size)?;
    Ok(out)
}

/// Decompress a byte slice.
pub fn decompress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    decompress(data, &mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordhuff_core::WordHuffError;

    #[test]
    fn test_roundtrip_simple() {
        let data = b"Hello, World! Hello, World!";
        for n in [1, 2, 3, 5, 8] {
            let packed = compress_bytes(data, n).unwrap();
            assert_eq!(decompress_bytes(&packed).unwrap(), data, "word size {n}");
        }
    }

    #[test]
    fn test_invalid_word_size() {
        assert!(matches!(
            compress_bytes(b"abc", 0),
            Err(WordHuffError::InvalidWordSize { size: 0 })
        ));
        assert!(matches!(
            compress_bytes(b"abc", 256),
            Err(WordHuffError::InvalidWordSize { size: 256 })
        ));
    }

    #[test]
    fn test_repetitive_data_shrinks() {
        let data = b"abcd".repeat(1000);
        let packed = compress_bytes(&data, 4).unwrap();
        // One distinct word: one bit per word plus header and dictionary
        assert_eq!(packed.len(), HEADER_LEN + 2 * 5 + 1000 / 8);
        assert_eq!(decompress_bytes(&packed).unwrap(), data);
    }
}
