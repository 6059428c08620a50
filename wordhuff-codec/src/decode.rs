//! Decompression.
//!
//! The header and dictionary are read first, then the bitstream is walked
//! bit by bit from the root, emitting a word at every leaf until the
//! original length has been reproduced. Padding bits after the last word
//! are never interpreted.

use crate::config::CodecConfig;
use crate::dictionary::{DictionaryEntry, read_dictionary};
use crate::header::{HEADER_LEN, Header};
use crate::huffman::Node;
use std::io::{BufRead, BufReader, Read, Write};
use wordhuff_core::{Result, WordHuffError};

/// Summary of one decompression run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecompressStats {
    /// Bytes consumed from the compressed input.
    pub compressed_len: u64,
    /// Bytes written to the output.
    pub original_len: u64,
}

/// Word-based Huffman decompressor.
#[derive(Debug, Clone, Default)]
pub struct WordHuffDecoder {
    config: CodecConfig,
}

impl WordHuffDecoder {
    /// Create a decoder with the given buffer limits.
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// The decoder's configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Decompress `input` into `output`.
    ///
    /// Bytes after the final padded byte of the bitstream are not read.
    pub fn decompress<R: Read, W: Write>(&self, input: R, mut output: W) -> Result<DecompressStats> {
        let mut reader = BufReader::with_capacity(self.config.packer_capacity(), input);

        let header = Header::read(&mut reader)?;
        if header.original_len == 0 {
            output.flush()?;
            log::debug!("header declares empty payload");
            return Ok(DecompressStats {
                compressed_len: HEADER_LEN as u64,
                original_len: 0,
            });
        }

        let tree = read_dictionary(&mut reader, header.word_size)
            .map_err(|e| rebase(e, HEADER_LEN as u64))?;
        let dictionary_len =
            (tree.leaf_count() * DictionaryEntry::encoded_len(header.word_size)) as u64;
        let stream_start = HEADER_LEN as u64 + dictionary_len;

        let out_capacity = self.config.max_buffer_size.max(header.word_size.get());
        let mut out = Vec::with_capacity(out_capacity.min(64 * 1024));
        let mut remaining = header.original_len;
        let mut consumed = 0u64;
        let mut node = tree.root();

        while remaining > 0 {
            let bytes = reader.fill_buf()?;
            if bytes.is_empty() {
                return Err(WordHuffError::corrupt(
                    stream_start + consumed,
                    format!("bitstream ended with {remaining} bytes still to decode"),
                ));
            }

            let mut used = 0;
            for &byte in bytes {
                used += 1;
                for shift in (0..8).rev() {
                    let bit = (byte >> shift) & 1 == 1;
                    node = tree.child(node, bit).ok_or_else(|| {
                        WordHuffError::corrupt(stream_start + consumed, "walked past a leaf")
                    })?;

                    if let Node::Leaf { word, .. } = tree.node(node) {
                        let take = (word.len() as u64).min(remaining) as usize;
                        if out.len() + take > out_capacity {
                            output.write_all(&out)?;
                            out.clear();
                        }
                        out.extend_from_slice(&word.as_bytes()[..take]);
                        remaining -= take as u64;
                        node = tree.root();
                        if remaining == 0 {
                            break;
                        }
                    }
                }
                if remaining == 0 {
                    break;
                }
            }
            reader.consume(used);
            consumed += used as u64;
        }

        output.write_all(&out)?;
        output.flush()?;

        let stats = DecompressStats {
            compressed_len: stream_start + consumed,
            original_len: header.original_len,
        };
        log::debug!(
            "decompressed {} bytes from {} ({} dictionary entries)",
            stats.original_len,
            stats.compressed_len,
            tree.leaf_count()
        );
        Ok(stats)
    }
}

/// Shift a section-relative corruption offset to a file offset.
fn rebase(err: WordHuffError, base: u64) -> WordHuffError {
    match err {
        WordHuffError::CorruptStream { offset, message } => WordHuffError::CorruptStream {
            offset: offset + base,
            message,
        },
        other => other,
    }
}
