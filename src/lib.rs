//! Text compression with a frequency-ordered binary code.
//!
//! The distinct characters of a text are counted and sorted by frequency,
//! arranged in a binary tree by a fixed pairing scheme, and each character
//! is given the path to its leaf as its code (`0` for left, `1` for right).
//! The text is then packed into bytes, most significant bit first.
//!
//! Compression writes two files: the packed payload and a plain text code
//! table (see [`table`]). Decompression reads the table back and matches
//! payload bits against it; the tree itself is never stored.
//!
//! ```no_run
//! # fn main() -> text_huffman::Result<()> {
//! text_huffman::write_and_compress("out/data.bin", "out/HuffmanTree.tree", "ab\nba")?;
//! assert_eq!(text_huffman::decompress("out/data.bin")?, "ab\nba");
//! # Ok(())
//! # }
//! ```

pub mod coding;
pub mod config;
pub mod error;
pub mod frequency;
pub mod packing;
pub mod pipeline;
pub mod table;
pub mod tree;

pub use {
    config::Options,
    error::{Error, ErrorKind, Result},
    pipeline::{encode, CompressionReport, Compressor, Encoded},
};

use std::path::Path;

/// [`Compressor::compress`] with default options.
pub fn compress(
    source: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    table_path: impl AsRef<Path>,
) -> Result<()> {
    Compressor::default().compress(source, dest, table_path)
}

/// [`Compressor::write_and_compress`] with default options.
pub fn write_and_compress(
    dest: impl AsRef<Path>,
    table_path: impl AsRef<Path>,
    text: &str,
) -> Result<()> {
    Compressor::default().write_and_compress(dest, table_path, text)
}

/// [`Compressor::decompress`] with default options.
pub fn decompress(source: impl AsRef<Path>) -> Result<String> {
    Compressor::default().decompress(source)
}

/// [`Compressor::compression_report`] with default options.
pub fn compression_report(
    original: impl AsRef<Path>,
    compressed: impl AsRef<Path>,
) -> Result<CompressionReport> {
    Compressor::default().compression_report(original, compressed)
}
