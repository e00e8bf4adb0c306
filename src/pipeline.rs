use {
    crate::{
        coding::CodeTable,
        config::Options,
        error::{CodecError, Error, Result},
        frequency::FrequencyList,
        packing::{self, PackedStream},
        table,
        tree::CodingTree,
    },
    std::{
        fmt, fs,
        io::{self, Write},
        path::{Path, PathBuf},
    },
    tempfile::NamedTempFile,
};

/// A code table together with the text packed against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub table: CodeTable,
    pub packed: PackedStream,
}

/// Builds the code table for `text` and packs `text` with it.
///
/// An empty text gives an empty table and an empty payload. A text with a
/// single distinct character codes that character as `0`.
pub fn encode(text: &str) -> Result<Encoded, CodecError> {
    let frequencies = FrequencyList::of(text);
    log::trace!("frequency list: {:?}", frequencies);

    let table = match CodingTree::of(&frequencies) {
        Some(tree) => {
            log::trace!("coding tree: {:?}", tree);
            let mut table = CodeTable::of(&tree);
            table.widen_empty_root();
            table
        }
        None => CodeTable::default(),
    };
    log::trace!("code table: {:?}", table);

    let packed = packing::pack(&table, text)?;
    Ok(Encoded { table, packed })
}

/// Sizes of an original file and its compressed counterpart.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionReport {
    pub original_name: String,
    pub compressed_name: String,
    pub original_size: u64,
    pub compressed_size: u64,
    /// Share of the original size saved, in percent, to two decimals.
    /// Negative when the compressed file is the larger one.
    pub percent_saved: f64,
}

impl fmt::Display for CompressionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Uncompressed filename:      {}", self.original_name)?;
        writeln!(f, "Uncompressed file size:     {} bytes", self.original_size)?;
        writeln!(f, "Compressed filename:        {}", self.compressed_name)?;
        writeln!(f, "Compressed file size:       {} bytes", self.compressed_size)?;
        write!(f, "Percentage:                 {}%", self.percent_saved)
    }
}

/// Runs the file level operations with a fixed set of [`Options`].
#[derive(Debug, Clone, Default)]
pub struct Compressor {
    options: Options,
}

impl Compressor {
    pub fn new(options: Options) -> Self {
        Compressor { options }
    }

    /// Compresses the text file at `source` into `dest`, writing the code
    /// table to `table_path`.
    pub fn compress(
        &self,
        source: impl AsRef<Path>,
        dest: impl AsRef<Path>,
        table_path: impl AsRef<Path>,
    ) -> Result<()> {
        let source = source.as_ref();
        let text = self.read_text(source)?;
        log::debug!("compressing {} ({} bytes)", source.display(), text.len());
        self.write_and_compress(dest, table_path, &text)
    }

    /// Compresses `text` into `dest`, writing the code table to `table_path`.
    ///
    /// Both files are staged next to their targets and only renamed into
    /// place once both are fully written, so a failure leaves any existing
    /// payload and table untouched.
    pub fn write_and_compress(
        &self,
        dest: impl AsRef<Path>,
        table_path: impl AsRef<Path>,
        text: &str,
    ) -> Result<()> {
        let (dest, table_path) = (dest.as_ref(), table_path.as_ref());
        let Encoded { table, packed } = encode(text)?;

        let bit_len = if self.options.record_bit_length {
            Some(packed.bit_len)
        } else {
            None
        };
        let staged_payload = stage(dest, &packed.bytes)?;
        let staged_table = stage(table_path, table::write(&table, bit_len).as_bytes())?;
        commit(staged_payload, dest)?;
        commit(staged_table, table_path)?;

        log::debug!(
            "wrote {} symbols to {} and {} bytes to {}",
            table.len(),
            table_path.display(),
            packed.bytes.len(),
            dest.display(),
        );
        Ok(())
    }

    /// Decompresses `source` with the code table found next to it.
    pub fn decompress(&self, source: impl AsRef<Path>) -> Result<String> {
        let source = source.as_ref();
        self.decompress_with_table(source, self.table_path_for(source))
    }

    pub fn decompress_with_table(
        &self,
        source: impl AsRef<Path>,
        table_path: impl AsRef<Path>,
    ) -> Result<String> {
        let (source, table_path) = (source.as_ref(), table_path.as_ref());
        let table_text =
            String::from_utf8(read_file(table_path)?).map_err(CodecError::InvalidText)?;
        let table::TableFile { table, bit_len } = table::read(&table_text)?;

        let bytes = read_file(source)?;
        log::debug!(
            "decompressing {} ({} bytes) with {} ({} symbols, bit length {:?})",
            source.display(),
            bytes.len(),
            table_path.display(),
            table.len(),
            bit_len,
        );
        Ok(packing::unpack(&table, &bytes, bit_len)?)
    }

    /// Compares the sizes of two existing files.
    pub fn compression_report(
        &self,
        original: impl AsRef<Path>,
        compressed: impl AsRef<Path>,
    ) -> Result<CompressionReport> {
        let (original, compressed) = (original.as_ref(), compressed.as_ref());
        let original_size = file_size(original)?;
        let compressed_size = file_size(compressed)?;

        let percent_saved = if original_size == 0 {
            0.0
        } else {
            let saved = original_size as f64 - compressed_size as f64;
            round_half_even(saved * 100.0 / original_size as f64, 2)
        };

        Ok(CompressionReport {
            original_name: file_name(original),
            compressed_name: file_name(compressed),
            original_size,
            compressed_size,
            percent_saved,
        })
    }

    /// Where the code table for the payload at `path` lives: the configured
    /// table file name, in the same directory.
    pub fn table_path_for(&self, path: impl AsRef<Path>) -> PathBuf {
        match path.as_ref().parent() {
            Some(dir) => dir.join(&self.options.table_file_name),
            None => PathBuf::from(&self.options.table_file_name),
        }
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        let mut text = String::from_utf8(read_file(path)?).map_err(CodecError::InvalidText)?;
        if self.options.strip_carriage_returns {
            text.retain(|c| c != '\r');
        }
        Ok(text)
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => Error::MissingFile {
            path: path.to_path_buf(),
            source,
        },
        _ => Error::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

fn write_error(path: &Path, source: io::Error) -> Error {
    match source.kind() {
        io::ErrorKind::NotFound => Error::MissingDirectory {
            path: path.parent().unwrap_or(path).to_path_buf(),
            source,
        },
        _ => Error::Io {
            path: path.to_path_buf(),
            source,
        },
    }
}

/// Writes `contents` to a temporary file in the directory of `path`.
fn stage(path: &Path, contents: &[u8]) -> Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(|source| write_error(path, source))?;
    file.write_all(contents)
        .and_then(|()| file.flush())
        .map_err(|source| write_error(path, source))?;
    Ok(file)
}

fn commit(file: NamedTempFile, path: &Path) -> Result<()> {
    file.persist(path)
        .map(drop)
        .map_err(|err| write_error(path, err.error))
}

/// Rounds to `decimals` places, ties to the even neighbour.
fn round_half_even(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let scaled = value * scale;
    let mut rounded = scaled.round();
    if (scaled - scaled.trunc()).abs() == 0.5 && rounded % 2.0 != 0.0 {
        rounded -= scaled.signum();
    }
    rounded / scale
}

fn file_size(path: &Path) -> Result<u64> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(metadata.len()),
        Err(source) if source.kind() == io::ErrorKind::NotFound => Err(Error::MissingFile {
            path: path.to_path_buf(),
            source,
        }),
        Err(source) => Err(Error::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_two_symbols() {
        let encoded = encode("aaab").unwrap();
        assert_eq!(table::write(&encoded.table, None), "b0\na1\n");
        assert_eq!(encoded.packed.bytes, vec![0b1110_0000]);
    }

    #[test]
    fn encode_single_symbol() {
        let encoded = encode("zzzzzzzzzz").unwrap();
        assert_eq!(table::write(&encoded.table, None), "z0\n");
        assert_eq!(encoded.packed.bit_len, 10);
        assert_eq!(encoded.packed.bytes, vec![0, 0]);
    }

    #[test]
    fn encode_empty() {
        let encoded = encode("").unwrap();
        assert!(encoded.table.is_empty());
        assert!(encoded.packed.bytes.is_empty());
    }

    #[test]
    fn table_path_convention() {
        let compressor = Compressor::default();
        assert_eq!(
            compressor.table_path_for("/data/out.bin"),
            PathBuf::from("/data/HuffmanTree.tree")
        );
        assert_eq!(
            compressor.table_path_for("out.bin"),
            PathBuf::from("HuffmanTree.tree")
        );

        let custom = Compressor::new(Options {
            table_file_name: "codes.txt".to_string(),
            ..Options::default()
        });
        assert_eq!(
            custom.table_path_for("a/b/out.bin"),
            Path::new("a/b").join("codes.txt")
        );
    }

    #[test]
    fn ties_round_to_even() {
        assert_eq!(round_half_even(2.5, 0), 2.0);
        assert_eq!(round_half_even(3.5, 0), 4.0);
        assert_eq!(round_half_even(0.125, 2), 0.12);
        assert_eq!(round_half_even(-0.125, 2), -0.12);
        assert_eq!(round_half_even(57.142857, 2), 57.14);
        assert_eq!(round_half_even(60.0, 2), 60.0);
    }

    #[test]
    fn report_display() {
        let report = CompressionReport {
            original_name: "in.txt".to_string(),
            compressed_name: "out.bin".to_string(),
            original_size: 100,
            compressed_size: 40,
            percent_saved: 60.0,
        };
        let shown = report.to_string();
        assert!(shown.contains("in.txt"));
        assert!(shown.contains("40 bytes"));
        assert!(shown.ends_with("60%"));
    }
}
