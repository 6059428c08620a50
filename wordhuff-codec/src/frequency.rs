//! Word frequency analysis (first compression pass).

use crate::config::{CodecConfig, WordSize};
use crate::word::{Word, WordChunks};
use std::collections::HashMap;
use std::collections::hash_map;
use std::io::Read;
use wordhuff_core::Result;

/// Occurrence count per distinct word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<Word, u64>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `word`.
    ///
    /// Only allocates the first time a word is seen.
    #[inline]
    pub fn record(&mut self, word: &[u8]) {
        if let Some(count) = self.counts.get_mut(word) {
            *count += 1;
        } else {
            self.counts.insert(Word::from(word), 1);
        }
    }

    /// Count for `word` (zero if never seen).
    pub fn get(&self, word: &[u8]) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no words were recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate over `(word, count)` pairs in unspecified order.
    pub fn iter(&self) -> hash_map::Iter<'_, Word, u64> {
        self.counts.iter()
    }
}

impl FromIterator<(Word, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (Word, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

/// Result of the frequency pass.
#[derive(Debug, Clone)]
pub struct FrequencyAnalysis {
    /// Counts per distinct word.
    pub table: FrequencyTable,
    /// Number of input bytes consumed.
    pub total_bytes: u64,
}

/// Stream `input` in word-aligned chunks and count every word.
///
/// The final word of the input is shorter than `word_size` when the input
/// length is not a multiple of it.
pub fn analyze<R: Read>(
    input: R,
    word_size: WordSize,
    config: &CodecConfig,
) -> Result<FrequencyAnalysis> {
    let n = word_size.get();
    let mut table = FrequencyTable::new();
    let mut chunks = WordChunks::new(input, word_size, config);

    while let Some(chunk) = chunks.next_chunk()? {
        for word in chunk.chunks(n) {
            table.record(word);
        }
    }

    log::debug!(
        "frequency pass: {} bytes in {} chunks, {} distinct words of size {}",
        chunks.bytes_read(),
        chunks.chunks_read(),
        table.len(),
        n
    );

    Ok(FrequencyAnalysis {
        table,
        total_bytes: chunks.bytes_read(),
    })
}
