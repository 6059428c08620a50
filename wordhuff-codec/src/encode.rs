//! Two-pass compression.
//!
//! The first pass counts words, the second replaces each word with its code.
//! Both passes stream the input in chunks bounded by [`CodecConfig`], so
//! memory use does not grow with the input size.

use crate::config::{CodecConfig, WordSize};
use crate::dictionary::{CodeTable, derive_codes, write_dictionary};
use crate::frequency::analyze;
use crate::header::{HEADER_LEN, Header};
use crate::huffman::HuffmanTree;
use crate::word::WordChunks;
use std::io::{Read, Seek, SeekFrom, Write};
use wordhuff_core::{BoundedBitPacker, Result, WordHuffError};

/// Summary of one compression run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressStats {
    /// Input length in bytes.
    pub original_len: u64,
    /// Output length in bytes (header, dictionary and bitstream).
    pub compressed_len: u64,
    /// Number of distinct words in the input.
    pub distinct_words: usize,
    /// Size of the dictionary section in bytes.
    pub dictionary_len: u64,
}

impl CompressStats {
    /// Output size as a fraction of the input size.
    ///
    /// Returns 0.0 for an empty input.
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 {
            0.0
        } else {
            self.compressed_len as f64 / self.original_len as f64
        }
    }
}

/// Word-based Huffman compressor.
#[derive(Debug, Clone, Default)]
pub struct WordHuffEncoder {
    config: CodecConfig,
}

impl WordHuffEncoder {
    /// Create an encoder with the given buffer limits.
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// The encoder's configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Compress `input` into `output`.
    ///
    /// `input` is read twice; it is rewound to the position it had on entry
    /// before the second pass.
    pub fn compress<R: Read + Seek, W: Write>(
        &self,
        mut input: R,
        mut output: W,
        word_size: WordSize,
    ) -> Result<CompressStats> {
        let start = input.stream_position()?;
        let analysis = analyze(&mut input, word_size, &self.config)?;

        let header = Header {
            word_size,
            original_len: analysis.total_bytes,
        };

        if analysis.total_bytes == 0 {
            header.write(&mut output)?;
            output.flush()?;
            log::debug!("empty input, wrote header only");
            return Ok(CompressStats {
                original_len: 0,
                compressed_len: HEADER_LEN as u64,
                distinct_words: 0,
                dictionary_len: 0,
            });
        }

        let tree = HuffmanTree::build(&analysis.table)?;
        let codes = derive_codes(&tree)?;

        header.write(&mut output)?;
        let dictionary_len = write_dictionary(&tree, word_size, &mut output, &self.config)?;

        input.seek(SeekFrom::Start(start))?;
        let totals = self.encode_words(&mut input, &mut output, word_size, &codes)?;
        output.flush()?;

        let read_back = totals.bytes_read;
        if read_back != analysis.total_bytes {
            return Err(WordHuffError::corrupt(
                read_back,
                format!(
                    "input changed between passes: {} bytes counted, {} encoded",
                    analysis.total_bytes, read_back
                ),
            ));
        }

        let stats = CompressStats {
            original_len: analysis.total_bytes,
            compressed_len: HEADER_LEN as u64 + dictionary_len + totals.bytes_written,
            distinct_words: analysis.table.len(),
            dictionary_len,
        };
        log::debug!(
            "compressed {} bytes to {} ({} distinct words, ratio {:.3})",
            stats.original_len,
            stats.compressed_len,
            stats.distinct_words,
            stats.ratio()
        );
        Ok(stats)
    }

    /// Second pass: pack the code of every word and write full buffers out.
    fn encode_words<R: Read, W: Write>(
        &self,
        input: R,
        output: &mut W,
        word_size: WordSize,
        codes: &CodeTable,
    ) -> Result<PassTotals> {
        let n = word_size.get();
        let mut packer = BoundedBitPacker::new(self.config.packer_capacity())?;
        let mut chunks = WordChunks::new(input, word_size, &self.config);
        let mut bytes_written = 0u64;
        let mut offset = 0u64;

        while let Some(chunk) = chunks.next_chunk()? {
            for word in chunk.chunks(n) {
                let Some(code) = codes.get(word) else {
                    return Err(WordHuffError::corrupt(offset, "word missing from code table"));
                };
                offset += word.len() as u64;
                packer.append(code)?;
                while packer.has_overflow() {
                    let full = packer.drain_full()?;
                    output.write_all(&full)?;
                    bytes_written += full.len() as u64;
                }
            }
        }

        if !packer.is_empty() {
            let tail = packer.drain_partial()?;
            output.write_all(&tail)?;
            bytes_written += tail.len() as u64;
        }

        Ok(PassTotals {
            bytes_read: chunks.bytes_read(),
            bytes_written,
        })
    }
}

/// Byte counts of the second pass.
struct PassTotals {
    bytes_read: u64,
    bytes_written: u64,
}
