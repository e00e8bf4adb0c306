use std::{collections::HashMap, slice};

/// A distinct character of the input together with its occurrence count.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub character: char,
    pub frequency: usize,
}

/// Distinct characters of a text, ascending by frequency.
///
/// Characters with equal frequency keep the order in which they were first
/// encountered. The order determines the shape of the coding tree, so it is
/// part of the format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyList {
    symbols: Vec<Symbol>,
}

impl FrequencyList {
    pub fn of(text: &str) -> Self {
        let mut symbols: Vec<Symbol> = Vec::new();
        let mut seen: HashMap<char, usize> = HashMap::new();
        for character in text.chars() {
            match seen.get(&character) {
                Some(&idx) => symbols[idx].frequency += 1,
                None => {
                    seen.insert(character, symbols.len());
                    symbols.push(Symbol {
                        character,
                        frequency: 1,
                    });
                }
            }
        }
        // NB: sort_by_key is stable, which preserves first-encounter order on ties.
        symbols.sort_by_key(|symbol| symbol.frequency);
        FrequencyList { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }
}

impl<'a> IntoIterator for &'a FrequencyList {
    type Item = &'a Symbol;
    type IntoIter = slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(list: &FrequencyList) -> Vec<(char, usize)> {
        list.iter().map(|s| (s.character, s.frequency)).collect()
    }

    #[test]
    fn ascending_by_count() {
        let list = FrequencyList::of("aaab");
        assert_eq!(pairs(&list), vec![('b', 1), ('a', 3)]);
    }

    #[test]
    fn ties_keep_encounter_order() {
        let list = FrequencyList::of("cabbac");
        assert_eq!(pairs(&list), vec![('c', 2), ('a', 2), ('b', 2)]);

        let list = FrequencyList::of("zzy x");
        assert_eq!(pairs(&list), vec![('y', 1), (' ', 1), ('x', 1), ('z', 2)]);
    }

    #[test]
    fn counts_whitespace_and_newlines() {
        let list = FrequencyList::of("a\n\n b");
        assert_eq!(pairs(&list), vec![('a', 1), (' ', 1), ('b', 1), ('\n', 2)]);
    }

    #[test]
    fn counts_multibyte_characters_once() {
        let list = FrequencyList::of("ééa");
        assert_eq!(pairs(&list), vec![('a', 1), ('é', 2)]);
    }

    #[test]
    fn empty_text() {
        let list = FrequencyList::of("");
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }
}
