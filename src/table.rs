//! Text format of the code table side-channel file.
//!
//! Each entry is one line: the symbol followed directly by its code. The
//! newline character cannot share a line with its code, so its entry is an
//! empty line followed by a line holding only the code:
//!
//! ```text
//! a010
//! b011
//!
//! 00
//! ```
//!
//! The payload does not record how many bits of its final byte are in use.
//! A table may therefore end with a bit length trailer, an empty line
//! followed by `=` and the total number of code bits in decimal. A newline
//! entry's code never starts with `=`, so the two cannot be confused.

use crate::{
    coding::{Code, CodeTable},
    error::TableError,
};

const TRAILER_MARKER: char = '=';

/// A parsed table file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFile {
    pub table: CodeTable,
    /// Total meaningful payload bits, when the file carries a trailer.
    pub bit_len: Option<usize>,
}

/// Renders a table, appending the bit length trailer when one is given.
///
/// An empty table renders to the empty string, trailer or not.
pub fn write(table: &CodeTable, bit_len: Option<usize>) -> String {
    let mut out = String::new();
    for (symbol, code) in table {
        if symbol == '\n' {
            out.push('\n');
        } else {
            out.push(symbol);
        }
        out.push_str(&code.to_string());
        out.push('\n');
    }
    if let Some(bit_len) = bit_len.filter(|_| !table.is_empty()) {
        out.push('\n');
        out.push(TRAILER_MARKER);
        out.push_str(&bit_len.to_string());
        out.push('\n');
    }
    out
}

pub fn read(text: &str) -> Result<TableFile, TableError> {
    let mut table = CodeTable::default();
    let mut bit_len = None;

    let mut lines = text
        .split_terminator('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .enumerate()
        .map(|(idx, line)| (idx + 1, line));

    while let Some((line_no, line)) = lines.next() {
        if bit_len.is_some() {
            return Err(TableError::TrailerNotLast { line: line_no });
        }

        let mut chars = line.chars();
        let (symbol, value, value_line) = match chars.next() {
            None => match lines.next() {
                Some((next_no, next)) if next.starts_with(TRAILER_MARKER) => {
                    if table.is_empty() {
                        return Err(TableError::TrailerWithoutEntries { line: next_no });
                    }
                    let value = &next[TRAILER_MARKER.len_utf8()..];
                    let parsed =
                        value
                            .parse::<usize>()
                            .map_err(|_| TableError::InvalidBitLength {
                                line: next_no,
                                value: value.to_string(),
                            })?;
                    bit_len = Some(parsed);
                    continue;
                }
                Some((next_no, next)) => ('\n', next, next_no),
                None => return Err(TableError::DanglingNewline { line: line_no }),
            },
            Some(symbol) => (symbol, chars.as_str(), line_no),
        };

        let code = Code::parse(value).ok_or_else(|| TableError::InvalidCode {
            line: value_line,
            code: value.to_string(),
        })?;
        if code.is_empty() {
            return Err(TableError::EmptyCode {
                line: value_line,
                symbol,
            });
        }
        if !table.insert(symbol, code) {
            return Err(TableError::DuplicateSymbol {
                line: line_no,
                symbol,
            });
        }
    }

    log::trace!("read code table: {:?}", table);
    Ok(TableFile { table, bit_len })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(char, &str)]) -> CodeTable {
        let mut table = CodeTable::default();
        for &(symbol, code) in entries {
            assert!(table.insert(symbol, Code::parse(code).unwrap()));
        }
        table
    }

    #[test]
    fn plain_records() {
        let t = table(&[('b', "0"), ('a', "1")]);
        assert_eq!(write(&t, None), "b0\na1\n");
        assert_eq!(
            read("b0\na1\n").unwrap(),
            TableFile {
                table: t,
                bit_len: None
            }
        );
    }

    #[test]
    fn newline_entry() {
        let t = table(&[('a', "00"), ('\n', "01"), ('b', "1")]);
        let text = write(&t, None);
        assert_eq!(text, "a00\n\n01\nb1\n");
        assert_eq!(read(&text).unwrap().table, t);
    }

    #[test]
    fn trailer() {
        let t = table(&[('\n', "0"), ('x', "1")]);
        let text = write(&t, Some(13));
        assert_eq!(text, "\n0\nx1\n\n=13\n");
        let file = read(&text).unwrap();
        assert_eq!(file.table, t);
        assert_eq!(file.bit_len, Some(13));
    }

    #[test]
    fn empty_table_has_no_trailer() {
        assert_eq!(write(&CodeTable::default(), Some(0)), "");
        let file = read("").unwrap();
        assert!(file.table.is_empty());
        assert_eq!(file.bit_len, None);
    }

    #[test]
    fn awkward_symbols() {
        let t = table(&[('=', "000"), ('0', "001"), ('1', "01"), (' ', "10"), ('é', "11")]);
        let text = write(&t, Some(7));
        assert_eq!(read(&text).unwrap().table, t);
    }

    #[test]
    fn tolerates_crlf() {
        let file = read("a0\r\n\r\n1\r\n").unwrap();
        assert_eq!(file.table, table(&[('a', "0"), ('\n', "1")]));
    }

    #[test]
    fn rejects_malformed() {
        assert_eq!(
            read("a0\nb2\n"),
            Err(TableError::InvalidCode {
                line: 2,
                code: "2".to_string()
            })
        );
        assert_eq!(read("a\n"), Err(TableError::EmptyCode { line: 1, symbol: 'a' }));
        assert_eq!(
            read("a0\na1\n"),
            Err(TableError::DuplicateSymbol { line: 2, symbol: 'a' })
        );
        assert_eq!(read("a0\n\n"), Err(TableError::DanglingNewline { line: 2 }));
        assert_eq!(
            read("a0\n\n=x\n"),
            Err(TableError::InvalidBitLength {
                line: 3,
                value: "x".to_string()
            })
        );
        assert_eq!(read("a0\n\n=1\nb1\n"), Err(TableError::TrailerNotLast { line: 4 }));
        assert_eq!(read("\n=5\n"), Err(TableError::TrailerWithoutEntries { line: 2 }));
        assert_eq!(
            read(&format!("a0\n\n={}\n", usize::MAX)).unwrap().bit_len,
            Some(usize::MAX)
        );
    }
}
