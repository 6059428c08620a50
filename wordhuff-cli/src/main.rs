//! WordHuff CLI - word-based Huffman compression
//!
//! Compresses a single file into `<file>.<n>.hc` and restores it into
//! `extracted.<file>.<n>`.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use wordhuff_codec::{CodecConfig, compress_file_with, decompress_file_with};

#[derive(Parser)]
#[command(name = "wordhuff")]
#[command(
    author,
    version,
    about = "Huffman compression over fixed-size words"
)]
#[command(long_about = "
WordHuff splits a file into words of N bytes, builds an optimal prefix code
over the distinct words and writes the coded file next to the input.

Examples:
  wordhuff compress notes.txt 2         -> notes.txt.2.hc
  wordhuff decompress notes.txt.2.hc    -> extracted.notes.txt.2
  wordhuff c data.bin 4
  wordhuff d data.bin.4.hc
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Word size in bytes (1-255)
        word_size: usize,
    },

    /// Decompress a .hc file
    #[command(alias = "d")]
    Decompress {
        /// Compressed file
        input: PathBuf,
    },
}

fn main() {
    log_init::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress { input, word_size } => cmd_compress(&input, word_size),
        Commands::Decompress { input } => cmd_decompress(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_compress(input: &Path, word_size: usize) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let (output, stats) = compress_file_with(input, word_size, &CodecConfig::DEFAULT)?;
    let elapsed = start.elapsed();

    log::info!(
        "{} distinct words, dictionary {} bytes",
        stats.distinct_words,
        stats.dictionary_len
    );
    println!("Compressed: {}", output.display());
    println!("Time: {}", format_duration(elapsed));
    println!(
        "Ratio: {} -> {} bytes ({})",
        stats.original_len,
        stats.compressed_len,
        format_ratio(stats.original_len, stats.compressed_len)
    );
    Ok(())
}

fn cmd_decompress(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let (output, stats) = decompress_file_with(input, &CodecConfig::DEFAULT)?;
    let elapsed = start.elapsed();

    println!("Decompressed: {}", output.display());
    println!("Time: {}", format_duration(elapsed));
    log::info!(
        "{} bytes restored from {} bytes",
        stats.original_len,
        stats.compressed_len
    );
    Ok(())
}

/// Render as milliseconds below one second, seconds above.
fn format_duration(elapsed: Duration) -> String {
    if elapsed < Duration::from_secs(1) {
        format!("{} ms", elapsed.as_millis())
    } else {
        format!("{:.2} s", elapsed.as_secs_f64())
    }
}

/// Compressed size as a percentage of the original.
fn format_ratio(original: u64, compressed: u64) -> String {
    if original == 0 {
        "n/a".to_string()
    } else {
        format!("{:.1}%", compressed as f64 / original as f64 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use wordhuff_core::WordHuffError;

    #[test]
    fn test_parse_aliases() {
        let cli = Cli::try_parse_from(["wordhuff", "c", "in.txt", "3"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Compress { ref input, word_size: 3 } if input == Path::new("in.txt")
        ));

        let cli = Cli::try_parse_from(["wordhuff", "decompress", "in.txt.3.hc"]).unwrap();
        assert!(matches!(cli.command, Commands::Decompress { .. }));
    }

    #[test]
    fn test_parse_rejects_bad_word_size() {
        assert!(Cli::try_parse_from(["wordhuff", "compress", "in.txt", "two"]).is_err());
        assert!(Cli::try_parse_from(["wordhuff", "compress", "in.txt"]).is_err());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(42)), "42 ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50 s");
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(200, 50), "25.0%");
        assert_eq!(format_ratio(0, 9), "n/a");
    }

    #[test]
    fn test_commands_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("sample.txt");
        fs::write(&input, b"abcabcabcabd").unwrap();

        cmd_compress(&input, 3).unwrap();
        let packed = dir.path().join("sample.txt.3.hc");
        assert!(packed.exists());

        cmd_decompress(&packed).unwrap();
        let restored = dir.path().join("extracted.sample.txt.3");
        assert_eq!(fs::read(restored).unwrap(), b"abcabcabcabd");
    }

    #[test]
    fn test_compress_error_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("sample.txt");
        fs::write(&input, b"abc").unwrap();
        let err = cmd_compress(&input, 0).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WordHuffError>(),
            Some(WordHuffError::InvalidWordSize { size: 0 })
        ));
    }
}
