use {
    crate::frequency::{FrequencyList, Symbol},
    std::collections::VecDeque,
};

/// Binary tree whose leaves are the symbols of a text.
///
/// A `Node` always owns exactly two children; there is no half-empty node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodingTree {
    Leaf {
        symbol: char,
        frequency: usize,
    },
    Node {
        left: Box<CodingTree>,
        right: Box<CodingTree>,
        frequency: usize,
    },
}

impl CodingTree {
    /// Builds the tree for an ascending frequency list.
    ///
    /// This is not a minimum-frequency merge. Symbols at even positions of
    /// the list form the left branch and symbols at odd positions form the
    /// right branch; each branch is then folded pairwise in list order.
    /// Existing code tables depend on this exact shape.
    ///
    /// Returns `None` for an empty list. A list with a single symbol yields
    /// that symbol's leaf as the root.
    pub fn of(frequencies: &FrequencyList) -> Option<Self> {
        let (mut left, mut right) = (VecDeque::new(), VecDeque::new());
        for (idx, symbol) in frequencies.iter().enumerate() {
            if idx % 2 == 0 {
                left.push_back(Self::leaf(symbol));
            } else {
                right.push_back(Self::leaf(symbol));
            }
        }

        // The right group is never larger than the left one.
        match (Self::branch(left), Self::branch(right)) {
            (Some(left), Some(right)) => Some(Self::join(left, right)),
            (Some(only), None) => Some(only),
            (None, _) => None,
        }
    }

    pub fn frequency(&self) -> usize {
        match *self {
            CodingTree::Leaf { frequency, .. } | CodingTree::Node { frequency, .. } => frequency,
        }
    }

    fn leaf(symbol: &Symbol) -> Self {
        CodingTree::Leaf {
            symbol: symbol.character,
            frequency: symbol.frequency,
        }
    }

    fn join(left: Self, right: Self) -> Self {
        CodingTree::Node {
            frequency: left.frequency() + right.frequency(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Folds one group of leaves into a single subtree.
    ///
    /// The first two leaves become the initial accumulator. Every following
    /// pair is joined and hung to the right of the accumulator, and an odd
    /// leaf left over at the end is hung to the right on its own.
    fn branch(mut worklist: VecDeque<Self>) -> Option<Self> {
        let first = worklist.pop_front()?;
        let second = match worklist.pop_front() {
            Some(second) => second,
            None => return Some(first),
        };

        let mut acc = Self::join(first, second);
        loop {
            match (worklist.pop_front(), worklist.pop_front()) {
                (Some(left), Some(right)) => acc = Self::join(acc, Self::join(left, right)),
                (Some(last), None) => return Some(Self::join(acc, last)),
                (None, _) => return Some(acc),
            }
        }
    }
}
