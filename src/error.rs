//! Error types for the compression pipeline.

use {
    std::{io, path::PathBuf},
    thiserror::Error,
};

/// Every failure surfaced by the library.
#[derive(Debug, Error)]
pub enum Error {
    /// The directory an output file should be written into does not exist.
    #[error("directory not found: {}", .path.display())]
    MissingDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A source or code table file does not exist.
    #[error("file not found: {}", .path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other file system failure.
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed code table: {0}")]
    Table(#[from] TableError),

    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}

/// Coarse classification of an [`Error`], for callers that only need to
/// tell missing paths apart from everything else.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    MissingDirectory,
    MissingFile,
    Generic,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingDirectory { .. } => ErrorKind::MissingDirectory,
            Error::MissingFile { .. } => ErrorKind::MissingFile,
            Error::Io { .. } | Error::Table(_) | Error::Codec(_) => ErrorKind::Generic,
        }
    }
}

/// Code table parse failures. Line numbers are 1-based.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("line {line}: code {code:?} is not a sequence of '0' and '1'")]
    InvalidCode { line: usize, code: String },

    #[error("line {line}: symbol {symbol:?} has an empty code")]
    EmptyCode { line: usize, symbol: char },

    #[error("line {line}: duplicate entry for symbol {symbol:?}")]
    DuplicateSymbol { line: usize, symbol: char },

    #[error("line {line}: empty line is not followed by a newline code")]
    DanglingNewline { line: usize },

    #[error("line {line}: invalid bit length {value:?}")]
    InvalidBitLength { line: usize, value: String },

    #[error("line {line}: bit length trailer without any entries")]
    TrailerWithoutEntries { line: usize },

    #[error("line {line}: bit length trailer must be the last record")]
    TrailerNotLast { line: usize },
}

/// Packing and unpacking failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("symbol {0:?} has no entry in the code table")]
    UnmappedSymbol(char),

    #[error("code table entry for {0:?} has an empty code")]
    EmptyCode(char),

    #[error("payload is {actual} bytes but {bits} recorded bits need {expected}")]
    PayloadLength {
        bits: usize,
        expected: usize,
        actual: usize,
    },

    #[error("payload of {0} bytes cannot be decoded with an empty code table")]
    EmptyTable(usize),

    #[error("text is not valid UTF-8")]
    InvalidText(#[source] std::string::FromUtf8Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
