//! Codeword derivation and the dictionary section.
//!
//! The dictionary is the list of leaves in depth-first, left-before-right
//! order, each stored as a fixed `n + 1` byte entry: the word (zero-padded
//! to `n` bytes when it is the file's short final word) followed by its
//! code length. There is no entry count; the reader rebuilds the tree shape
//! from the order of the entries and their code lengths alone.
//!
//! A tree that is a lone leaf gets the one-bit code `0` and is written as
//! two entries of length 1, so the reader always rebuilds an internal root.
//! The second entry is a placeholder that the encoder never emits.

use crate::config::{CodecConfig, WordSize};
use crate::huffman::{HuffmanTree, Node, NodeId};
use crate::word::Word;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::io::{Read, Write};
use wordhuff_core::{BitSequence, MAX_CODE_LENGTH, Result, WordHuffError};

/// Codeword for every distinct word.
pub type CodeTable = HashMap<Word, BitSequence>;

/// One serialized leaf record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// Word bytes as stored (always `n` bytes after reading).
    pub word: Word,
    /// Length of the word's code in bits.
    pub code_len: u8,
}

impl DictionaryEntry {
    /// Serialized size of an entry for the given word size.
    pub fn encoded_len(word_size: WordSize) -> usize {
        word_size.get() + 1
    }

    /// Append this entry's wire form to `buf`.
    fn encode_into(&self, word_size: WordSize, buf: &mut Vec<u8>) -> Result<()> {
        let n = word_size.get();
        let bytes = self.word.as_bytes();
        if bytes.len() > n {
            return Err(WordHuffError::corrupt(
                0,
                format!("word of {} bytes exceeds word size {}", bytes.len(), n),
            ));
        }
        buf.extend_from_slice(bytes);
        buf.resize(buf.len() + n - bytes.len(), 0);
        buf.push(self.code_len);
        Ok(())
    }

    /// Read one entry.
    pub fn read<R: Read>(reader: &mut R, word_size: WordSize) -> Result<Self> {
        let n = word_size.get();
        let mut buf = vec![0u8; n + 1];
        reader
            .read_exact(&mut buf)
            .map_err(|e| WordHuffError::from_read(e, n + 1))?;
        let code_len = buf[n];
        buf.truncate(n);
        Ok(Self {
            word: Word::new(buf),
            code_len,
        })
    }
}

/// Depth-first, left-before-right walk yielding each leaf with its path.
pub struct LeafPaths<'a> {
    tree: &'a HuffmanTree,
    stack: Vec<(NodeId, BitSequence)>,
}

impl<'a> Iterator for LeafPaths<'a> {
    type Item = (&'a Word, BitSequence);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, path)) = self.stack.pop() {
            match self.tree.node(id) {
                Node::Leaf { word, .. } => return Some((word, path)),
                Node::Internal { left, right, .. } => {
                    self.stack.push((*right, path.with_appended(true)));
                    self.stack.push((*left, path.with_appended(false)));
                }
            }
        }
        None
    }
}

/// Walk the leaves of `tree` in dictionary order.
pub fn leaf_paths(tree: &HuffmanTree) -> LeafPaths<'_> {
    LeafPaths {
        tree,
        stack: vec![(tree.root(), BitSequence::new())],
    }
}

/// Fail with `CodeTooLong` if any leaf lies deeper than a length byte allows.
fn check_depth(tree: &HuffmanTree) -> Result<()> {
    let depth = tree.depth();
    if depth > MAX_CODE_LENGTH {
        return Err(WordHuffError::code_too_long(depth));
    }
    Ok(())
}

/// Derive the codeword of every word in `tree`.
///
/// A lone leaf gets the code `0`. When a word appears at several leaves
/// (the placeholder sibling of a rebuilt single-word tree), the first one in
/// dictionary order wins.
pub fn derive_codes(tree: &HuffmanTree) -> Result<CodeTable> {
    check_depth(tree)?;

    let mut codes = CodeTable::with_capacity(tree.leaf_count());
    for (word, path) in leaf_paths(tree) {
        let code = if path.is_empty() {
            BitSequence::from_iter([false])
        } else {
            path
        };
        if let Entry::Vacant(slot) = codes.entry(word.clone()) {
            slot.insert(code);
        }
    }
    Ok(codes)
}

/// Serialize the dictionary section of `tree` to `writer`.
///
/// Entries are staged in a buffer bounded by `config` and flushed whenever
/// it fills. Returns the number of bytes written.
pub fn write_dictionary<W: Write>(
    tree: &HuffmanTree,
    word_size: WordSize,
    writer: &mut W,
    config: &CodecConfig,
) -> Result<u64> {
    check_depth(tree)?;

    let entry_len = DictionaryEntry::encoded_len(word_size);
    let capacity = (config.max_buffer_size / entry_len).max(1) * entry_len;
    let mut buf = Vec::with_capacity(capacity.min(tree.leaf_count() * entry_len + entry_len));
    let mut written = 0u64;

    let mut stage = |entry: DictionaryEntry, buf: &mut Vec<u8>| -> Result<()> {
        if buf.len() + entry_len > capacity {
            writer.write_all(buf)?;
            written += buf.len() as u64;
            buf.clear();
        }
        entry.encode_into(word_size, buf)
    };

    if let Node::Leaf { word, .. } = tree.node(tree.root()) {
        for _ in 0..2 {
            let entry = DictionaryEntry {
                word: word.clone(),
                code_len: 1,
            };
            stage(entry, &mut buf)?;
        }
    } else {
        for (word, path) in leaf_paths(tree) {
            let entry = DictionaryEntry {
                word: word.clone(),
                code_len: path.len() as u8,
            };
            stage(entry, &mut buf)?;
        }
    }

    if !buf.is_empty() {
        writer.write_all(&buf)?;
        written += buf.len() as u64;
    }

    log::debug!(
        "wrote dictionary: {} entries, {} bytes",
        written / entry_len as u64,
        written
    );
    Ok(written)
}

/// Rebuild the tree from a dictionary section.
///
/// Reads exactly as many entries as the tree shape requires, leaving
/// `reader` positioned at the start of the bitstream. Offsets in
/// `CorruptStream` errors are relative to the start of the section.
pub fn read_dictionary<R: Read>(reader: &mut R, word_size: WordSize) -> Result<HuffmanTree> {
    let entry_len = DictionaryEntry::encoded_len(word_size) as u64;
    let mut builder = TreeBuilder::default();
    let mut entries_read = 0u64;

    let first = DictionaryEntry::read(reader, word_size)?;
    entries_read += 1;
    let root = builder.descend(first, 0, 0)?;

    // Each pending node's left subtree is complete once everything pushed
    // after it has been resolved, so the next entry starts its right child.
    while let Some((parent, depth)) = builder.pending.pop() {
        let offset = entries_read * entry_len;
        let entry = DictionaryEntry::read(reader, word_size)?;
        entries_read += 1;
        let child = builder.descend(entry, depth, offset)?;
        builder.set_right(parent, child);
    }

    log::debug!(
        "read dictionary: {} entries, {} nodes",
        entries_read,
        builder.nodes.len()
    );
    Ok(HuffmanTree::from_nodes(builder.nodes, root))
}

/// Arena under construction while reading the dictionary.
#[derive(Default)]
struct TreeBuilder {
    nodes: Vec<Node>,
    /// Internal nodes still waiting for a right child, with that child's depth.
    pending: Vec<(NodeId, usize)>,
}

impl TreeBuilder {
    /// Place `entry` at `depth`: a chain of internal nodes down to its leaf,
    /// each taking the next node as its left child. Returns the chain's top.
    fn descend(&mut self, entry: DictionaryEntry, mut depth: usize, offset: u64) -> Result<NodeId> {
        let code_len = entry.code_len as usize;
        if code_len == 0 {
            return Err(WordHuffError::corrupt(offset, "zero-length code in dictionary"));
        }
        if code_len < depth {
            return Err(WordHuffError::corrupt(
                offset,
                format!("code length {code_len} shorter than tree depth {depth}"),
            ));
        }

        let top = self.nodes.len();
        while depth < code_len {
            let id = self.nodes.len();
            self.nodes.push(Node::Internal {
                freq: 0,
                left: id + 1,
                right: NodeId::MAX,
            });
            self.pending.push((id, depth + 1));
            depth += 1;
        }
        self.nodes.push(Node::Leaf {
            word: entry.word,
            freq: 0,
        });
        Ok(top)
    }

    fn set_right(&mut self, parent: NodeId, child: NodeId) {
        if let Node::Internal { right, .. } = &mut self.nodes[parent] {
            *right = child;
        }
    }
}
