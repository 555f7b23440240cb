use std::collections::BTreeSet;

/// Selected rows, tracked by index into the owning list.
///
/// Indices rather than record copies give selection reference semantics: two equal records in
/// different rows are selected independently. The owner keeps every index in range, calling
/// [`SelectionSet::shift_after_removal`] whenever it removes a row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    indices: BTreeSet<usize>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `index` was not selected before.
    pub fn select(&mut self, index: usize) -> bool {
        self.indices.insert(index)
    }

    /// Returns `true` if `index` was selected before. Deselecting an unselected row is a no-op.
    pub fn deselect(&mut self, index: usize) -> bool {
        self.indices.remove(&index)
    }

    /// Flips membership of `index` and returns whether it is selected afterwards.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.indices.remove(&index) {
            false
        } else {
            self.indices.insert(index);
            true
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Selected indices in ascending (display) order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Forgets `removed` and renumbers every later index down by one.
    pub fn shift_after_removal(&mut self, removed: usize) {
        self.indices = std::mem::take(&mut self.indices)
            .into_iter()
            .filter(|&i| i != removed)
            .map(|i| if i > removed { i - 1 } else { i })
            .collect();
    }

    /// Swaps the selection state of rows `a` and `b`, following a swap of the rows themselves.
    pub fn swap(&mut self, a: usize, b: usize) {
        let (had_a, had_b) = (self.contains(a), self.contains(b));
        self.set(a, had_b);
        self.set(b, had_a);
    }

    /// Renumbers the selection after the rows were permuted. `order[i]` is the old index of the
    /// row now at `i`.
    pub fn reorder(&mut self, order: &[usize]) {
        self.indices = order
            .iter()
            .enumerate()
            .filter(|&(_, old)| self.indices.contains(old))
            .map(|(new, _)| new)
            .collect();
    }

    fn set(&mut self, index: usize, selected: bool) {
        if selected {
            self.indices.insert(index);
        } else {
            self.indices.remove(&index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn double_toggle_is_identity() {
        let mut s = SelectionSet::new();
        s.select(4);
        let before = s.clone();
        assert!(s.toggle(1));
        assert!(!s.toggle(1));
        assert_eq!(s, before);
    }

    #[test]
    fn reselecting_does_not_duplicate() {
        let mut s = SelectionSet::new();
        assert!(s.select(2));
        assert!(!s.select(2));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn deselecting_absent_is_noop() {
        let mut s = SelectionSet::new();
        s.select(0);
        assert!(!s.deselect(5));
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn removal_renumbers_later_rows() {
        let mut s = SelectionSet::new();
        for i in [0, 2, 3, 7] {
            s.select(i);
        }
        s.shift_after_removal(2);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![0, 2, 6]);
        s.shift_after_removal(4);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![0, 2, 5]);
    }

    #[test]
    fn swap_exchanges_membership() {
        let mut s = SelectionSet::new();
        s.select(1);
        s.swap(1, 4);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![4]);
        s.swap(4, 4);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn reorder_follows_rows() {
        let mut s = SelectionSet::new();
        s.select(0);
        s.select(3);
        // rows 0..4 become [3, 0, 2, 1]
        s.reorder(&[3, 0, 2, 1]);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![0, 1]);
    }

    proptest! {
        #[test]
        fn size_after_k_toggles_is_parity(k in 0usize..50, index in 0usize..10) {
            let mut s = SelectionSet::new();
            for _ in 0..k {
                s.toggle(index);
            }
            prop_assert_eq!(s.len(), k % 2);
        }
    }
}
