/// File name of the code table written next to a payload.
pub const DEFAULT_TABLE_FILE_NAME: &str = "HuffmanTree.tree";

/// Knobs for [`Compressor`](crate::Compressor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// File name of the code table, resolved in the payload's directory
    /// when no table path is given explicitly.
    pub table_file_name: String,

    /// Drop `'\r'` from text read from a source file, so CRLF files are
    /// coded with plain line feeds.
    pub strip_carriage_returns: bool,

    /// Append the payload's bit length to the code table file. Without it
    /// the zero padding of the final byte may decode as extra symbols.
    pub record_bit_length: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            table_file_name: DEFAULT_TABLE_FILE_NAME.to_string(),
            strip_carriage_returns: true,
            record_bit_length: true,
        }
    }
}
