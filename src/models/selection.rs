use std::collections::BTreeSet;

/// Option indices already tried and found wrong for the current question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    wrong: BTreeSet<usize>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the index was already tracked.
    pub fn insert(&mut self, index: usize) -> bool {
        self.wrong.insert(index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.wrong.contains(&index)
    }

    pub fn clear(&mut self) {
        self.wrong.clear();
    }

    pub fn len(&self) -> usize {
        self.wrong.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wrong.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.wrong.iter().copied()
    }
}
