use {
    crate::{
        coding::CodeTable,
        error::{CodecError, Result},
    },
    bitvec::prelude::*,
};

/// Packed code bits, most significant bit first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedStream {
    /// The payload. Unused low-order bits of the last byte are zero.
    pub bytes: Vec<u8>,
    /// Number of meaningful bits in `bytes`.
    pub bit_len: usize,
}

/// Concatenates the code of every character of `text`, in order.
pub fn pack(table: &CodeTable, text: &str) -> Result<PackedStream, CodecError> {
    let mut bits: BitVec<Msb0, u8> = BitVec::new();
    for c in text.chars() {
        let code = table.get(c).ok_or(CodecError::UnmappedSymbol(c))?;
        if code.is_empty() {
            return Err(CodecError::EmptyCode(c));
        }
        bits.extend_from_slice(code.as_bits());
    }

    let bit_len = bits.len();
    let mut bytes = bits.into_vec();
    // A short final group keeps its bits in the high-order end.
    let used = bit_len % 8;
    if used != 0 {
        if let Some(last) = bytes.last_mut() {
            *last &= !(u8::MAX >> used);
        }
    }
    log::debug!("packed {} bits into {} bytes", bit_len, bytes.len());

    Ok(PackedStream { bytes, bit_len })
}

/// Decodes `bytes` by matching accumulated bits against the table.
///
/// With `bit_len` set only that many bits are read, and the payload must be
/// exactly as long as those bits need. Without it every bit of the payload
/// is read, so zero padding in the final byte can decode to spurious
/// symbols when the table has a short all-zero code.
pub fn unpack(
    table: &CodeTable,
    bytes: &[u8],
    bit_len: Option<usize>,
) -> Result<String, CodecError> {
    if table.is_empty() {
        return if bytes.is_empty() {
            Ok(String::new())
        } else {
            Err(CodecError::EmptyTable(bytes.len()))
        };
    }
    if let Some((symbol, _)) = table.iter().find(|(_, code)| code.is_empty()) {
        return Err(CodecError::EmptyCode(symbol));
    }

    let all = BitSlice::<Msb0, u8>::from_slice(bytes);
    let bits = match bit_len {
        Some(bit_len) => {
            let expected = bit_len / 8 + usize::from(bit_len % 8 != 0);
            if expected != bytes.len() {
                return Err(CodecError::PayloadLength {
                    bits: bit_len,
                    expected,
                    actual: bytes.len(),
                });
            }
            &all[..bit_len]
        }
        None => all,
    };

    let codes = table.decode_map();
    let mut out = String::new();
    let mut candidate = String::new();
    for bit in bits.iter() {
        candidate.push(match bit {
            true => '1',
            false => '0',
        });
        if let Some(&symbol) = codes.get(candidate.as_str()) {
            out.push(symbol);
            candidate.clear();
        }
    }

    if !candidate.is_empty() {
        if bit_len.is_some() {
            log::warn!("dropping {} trailing bits that match no code", candidate.len());
        } else {
            log::trace!("dropping {} padding bits", candidate.len());
        }
    }

    Ok(out)
}
