//! File-level compression and decompression.
//!
//! Output paths are derived from the input path:
//!
//! | operation  | input            | output                  |
//! |------------|------------------|-------------------------|
//! | compress   | `dir/name`       | `dir/name.<n>.hc`       |
//! | decompress | `dir/name.<n>.hc`| `dir/extracted.name.<n>`|
//!
//! A failed run leaves whatever output had already been written.

use crate::config::{CodecConfig, WordSize};
use crate::decode::{DecompressStats, WordHuffDecoder};
use crate::encode::{CompressStats, WordHuffEncoder};
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use wordhuff_core::{Result, WordHuffError};

/// Extension appended to compressed files.
pub const COMPRESSED_EXTENSION: &str = "hc";

/// Prefix given to decompressed files.
pub const EXTRACTED_PREFIX: &str = "extracted.";

/// Path `compress_file` writes to for `input` and `word_size`.
pub fn compressed_path(input: &Path, word_size: WordSize) -> PathBuf {
    let mut name = input.file_name().map(OsString::from).unwrap_or_default();
    name.push(format!(".{}.{}", word_size.get(), COMPRESSED_EXTENSION));
    input.with_file_name(name)
}

/// Path `decompress_file` writes to for `input`.
///
/// A trailing `.hc` is dropped; any other name is kept whole.
pub fn extracted_path(input: &Path) -> PathBuf {
    let stem = match input.extension() {
        Some(ext) if ext == COMPRESSED_EXTENSION => input.file_stem(),
        _ => input.file_name(),
    };
    let mut name = OsString::from(EXTRACTED_PREFIX);
    if let Some(stem) = stem {
        name.push(stem);
    }
    input.with_file_name(name)
}

/// Compress the file at `path` with words of `word_size` bytes.
///
/// Returns the path of the compressed file.
pub fn compress_file(path: impl AsRef<Path>, word_size: usize) -> Result<PathBuf> {
    compress_file_with(path, word_size, &CodecConfig::DEFAULT).map(|(out, _)| out)
}

/// [`compress_file`] with explicit buffer limits, also returning statistics.
pub fn compress_file_with(
    path: impl AsRef<Path>,
    word_size: usize,
    config: &CodecConfig,
) -> Result<(PathBuf, CompressStats)> {
    let path = path.as_ref();
    let word_size = WordSize::new(word_size)?;
    require_file_name(path)?;
    let out_path = compressed_path(path, word_size);

    let input = BufReader::new(File::open(path)?);
    let output = BufWriter::new(File::create(&out_path)?);

    log::debug!("compressing {} -> {}", path.display(), out_path.display());
    let stats = WordHuffEncoder::new(*config).compress(input, output, word_size)?;
    Ok((out_path, stats))
}

/// Decompress the file at `path`.
///
/// Returns the path of the extracted file.
pub fn decompress_file(path: impl AsRef<Path>) -> Result<PathBuf> {
    decompress_file_with(path, &CodecConfig::DEFAULT).map(|(out, _)| out)
}

/// [`decompress_file`] with explicit buffer limits, also returning statistics.
pub fn decompress_file_with(
    path: impl AsRef<Path>,
    config: &CodecConfig,
) -> Result<(PathBuf, DecompressStats)> {
    let path = path.as_ref();
    require_file_name(path)?;
    let out_path = extracted_path(path);

    let input = File::open(path)?;
    let output = BufWriter::new(File::create(&out_path)?);

    log::debug!("decompressing {} -> {}", path.display(), out_path.display());
    let stats = WordHuffDecoder::new(*config).decompress(input, output)?;
    Ok((out_path, stats))
}

fn require_file_name(path: &Path) -> Result<()> {
    if path.file_name().is_none() {
        return Err(WordHuffError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} does not name a file", path.display()),
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compressed_path() {
        let ws = WordSize::new(3).unwrap();
        assert_eq!(
            compressed_path(Path::new("/data/notes.txt"), ws),
            PathBuf::from("/data/notes.txt.3.hc")
        );
        assert_eq!(
            compressed_path(Path::new("plain"), ws),
            PathBuf::from("plain.3.hc")
        );
    }

    #[test]
    fn test_extracted_path() {
        assert_eq!(
            extracted_path(Path::new("/data/notes.txt.3.hc")),
            PathBuf::from("/data/extracted.notes.txt.3")
        );
        assert_eq!(
            extracted_path(Path::new("/data/blob.bin")),
            PathBuf::from("/data/extracted.blob.bin")
        );
    }
}
