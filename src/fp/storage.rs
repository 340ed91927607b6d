use super::Item;
use std::cmp::Ordering;

/// Flat storage of equally sized itemsets with their supports.
#[derive(Debug, Clone)]
pub struct ItemsetStorage<T> {
    items: Vec<T>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<usize>,
}

/// All frequent itemsets of one size.
#[derive(Debug, Clone)]
pub struct FrequentLevel<T> {
    storage: ItemsetStorage<T>,
    pub itemset_size: usize,
}

impl<T: Item> ItemsetStorage<T> {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            offsets: Vec::new(),
            supports: Vec::new(),
        }
    }

    fn add_itemset(&mut self, mut items: Vec<T>, support: usize) {
        items.sort_unstable();
        items.dedup();
        let start = self.items.len();
        self.offsets.push((start, items.len()));
        self.items.extend(items);
        self.supports.push(support);
    }

    fn get_itemset(&self, idx: usize) -> &[T] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    fn len(&self) -> usize {
        self.offsets.len()
    }

    fn append(&mut self, other: ItemsetStorage<T>) {
        let shift = self.items.len();
        self.items.extend(other.items);
        self.offsets
            .extend(other.offsets.into_iter().map(|(start, len)| (start + shift, len)));
        self.supports.extend(other.supports);
    }

    /// Reorders itemsets lexicographically.
    fn sort(&mut self) {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by(|&a, &b| self.get_itemset(a).cmp(self.get_itemset(b)));

        let mut sorted = Self::new();
        for idx in order {
            let (start, len) = self.offsets[idx];
            sorted.offsets.push((sorted.items.len(), len));
            sorted.items.extend_from_slice(&self.items[start..start + len]);
            sorted.supports.push(self.supports[idx]);
        }
        *self = sorted;
    }
}

impl<T: Item> FrequentLevel<T> {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            storage: ItemsetStorage::new(),
            itemset_size,
        }
    }

    pub fn add_itemset(&mut self, items: Vec<T>, support: usize) -> usize {
        debug_assert_eq!(items.len(), self.itemset_size);
        self.storage.add_itemset(items, support);
        self.storage.len() - 1
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.len() == 0
    }

    pub fn get_itemset(&self, idx: usize) -> &[T] {
        self.storage.get_itemset(idx)
    }

    pub fn get_support(&self, idx: usize) -> usize {
        self.storage.supports[idx]
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[T]> {
        (0..self.storage.len()).map(move |idx| self.get_itemset(idx))
    }

    /// Itemsets paired with their supports.
    pub fn iter(&self) -> impl Iterator<Item = (&[T], usize)> {
        (0..self.storage.len()).map(move |idx| (self.get_itemset(idx), self.get_support(idx)))
    }

    /// Binary search over a sorted level. `sorted_items` must be sorted.
    fn find(&self, sorted_items: &[T]) -> Option<usize> {
        let (mut lo, mut hi) = (0, self.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match self.get_itemset(mid).cmp(sorted_items) {
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => hi = mid,
                Ordering::Equal => return Some(self.get_support(mid)),
            }
        }
        None
    }
}

/// Mining result: frequent itemsets grouped by size, each level sorted.
#[derive(Debug, Clone)]
pub struct FrequentItemsets<T> {
    levels: Vec<FrequentLevel<T>>,
    num_transactions: usize,
    min_count: usize,
}

impl<T: Item> FrequentItemsets<T> {
    pub(crate) fn new(num_transactions: usize, min_count: usize) -> Self {
        Self {
            levels: Vec::new(),
            num_transactions,
            min_count,
        }
    }

    pub(crate) fn add(&mut self, itemset: Vec<T>, support: usize) {
        let size = itemset.len();
        if size == 0 {
            return;
        }
        while self.levels.len() < size {
            self.levels.push(FrequentLevel::new(self.levels.len() + 1));
        }
        self.levels[size - 1].add_itemset(itemset, support);
    }

    /// Union with another partial result.
    pub(crate) fn merge(&mut self, other: FrequentItemsets<T>) {
        for level in other.levels {
            let size = level.itemset_size;
            while self.levels.len() < size {
                self.levels.push(FrequentLevel::new(self.levels.len() + 1));
            }
            self.levels[size - 1].storage.append(level.storage);
        }
    }

    pub(crate) fn finish(mut self) -> Self {
        for level in &mut self.levels {
            level.storage.sort();
        }
        self
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    /// Absolute support threshold the result was mined with.
    pub fn min_count(&self) -> usize {
        self.min_count
    }

    pub fn levels(&self) -> &[FrequentLevel<T>] {
        &self.levels
    }

    pub fn level(&self, itemset_size: usize) -> Option<&FrequentLevel<T>> {
        itemset_size
            .checked_sub(1)
            .and_then(|idx| self.levels.get(idx))
    }

    pub fn len(&self) -> usize {
        self.levels.iter().map(FrequentLevel::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[T], usize)> {
        self.levels.iter().flat_map(|level| level.iter())
    }

    /// Support of an itemset regardless of item order, if it is frequent.
    pub fn support(&self, itemset: &[T]) -> Option<usize> {
        let mut sorted = itemset.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        self.level(sorted.len())?.find(&sorted)
    }

    pub fn relative_support(&self, itemset: &[T]) -> Option<f64> {
        let support = self.support(itemset)?;
        Some(support as f64 / self.num_transactions as f64)
    }

    pub fn into_pairs(self) -> Vec<(Vec<T>, usize)> {
        self.iter()
            .map(|(itemset, support)| (itemset.to_vec(), support))
            .collect()
    }
}
