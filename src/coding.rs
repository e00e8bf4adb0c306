use {
    crate::tree::CodingTree,
    bitvec::prelude::*,
    std::{collections::HashMap, fmt, slice},
};

/// The bits assigned to one symbol, first bit first.
#[derive(Clone)]
pub struct Code {
    bits: BitVec<Msb0, u8>,
}

impl Code {
    /// Parses a string of `'0'` and `'1'` characters.
    pub fn parse(text: &str) -> Option<Self> {
        let mut bits = BitVec::new();
        for c in text.chars() {
            match c {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => return None,
            }
        }
        Some(Code { bits })
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub(crate) fn as_bits(&self) -> &BitSlice<Msb0, u8> {
        &self.bits
    }
}

impl Default for Code {
    fn default() -> Self {
        Code {
            bits: BitVec::new(),
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits.iter() {
            f.write_str(match bit {
                true => "1",
                false => "0",
            })?;
        }
        Ok(())
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code({})", self)
    }
}

impl PartialEq for Code {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.bits.iter().eq(other.bits.iter())
    }
}

impl Eq for Code {}

/// Symbol to code mapping.
///
/// Entries keep the order they were added in, which for generated tables is
/// the depth-first order of the tree. That order is also the order the
/// table is written to disk in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    entries: Vec<(char, Code)>,
    index: HashMap<char, usize>,
}

impl CodeTable {
    /// Collects the path to every leaf, `0` for left and `1` for right.
    ///
    /// A tree that is a single leaf gives that symbol the empty code.
    pub fn of(tree: &CodingTree) -> Self {
        let mut this = CodeTable::default();
        let mut path = BitVec::new();
        this.apply(tree, &mut path);
        this
    }

    fn apply(&mut self, tree: &CodingTree, path: &mut BitVec<Msb0, u8>) {
        match tree {
            &CodingTree::Leaf { symbol, .. } => {
                let fresh = self.insert(symbol, Code { bits: path.clone() });
                debug_assert!(fresh, "symbol {:?} appears twice in the tree", symbol);
            }
            CodingTree::Node { left, right, .. } => {
                path.push(false);
                self.apply(left, path);
                path.pop();
                path.push(true);
                self.apply(right, path);
                path.pop();
            }
        }
    }

    /// Adds an entry, returning `false` (and leaving the table unchanged)
    /// when the symbol already has one.
    pub fn insert(&mut self, symbol: char, code: Code) -> bool {
        if self.index.contains_key(&symbol) {
            return false;
        }
        self.index.insert(symbol, self.entries.len());
        self.entries.push((symbol, code));
        true
    }

    pub fn get(&self, symbol: char) -> Option<&Code> {
        self.index.get(&symbol).map(|&idx| &self.entries[idx].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Gives a lone empty code the single bit `0`.
    ///
    /// A text with one distinct character produces a root leaf and hence an
    /// empty code, which would pack the whole text into zero bits.
    pub(crate) fn widen_empty_root(&mut self) {
        if let [(symbol, code)] = &mut self.entries[..] {
            if code.is_empty() {
                log::debug!("widening empty code of lone symbol {:?} to 0", symbol);
                code.bits.push(false);
            }
        }
    }

    /// Reverse lookup used by the unpacker.
    pub(crate) fn decode_map(&self) -> HashMap<String, char> {
        self.entries
            .iter()
            .map(|(symbol, code)| (code.to_string(), *symbol))
            .collect()
    }
}

impl<'a> IntoIterator for &'a CodeTable {
    type Item = (char, &'a Code);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Iterator over the entries of a [`CodeTable`], in table order.
pub struct Iter<'a> {
    inner: slice::Iter<'a, (char, Code)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (char, &'a Code);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(symbol, code)| (*symbol, code))
    }
}
