use crate::fp::Item;
use std::collections::{HashMap, HashSet};

/// Global item counts, filtered by a minimum support and sorted into the
/// canonical order: count descending, then label ascending.
#[derive(Debug, Clone)]
pub struct ItemFrequencyIndex<T> {
    entries: Vec<(T, usize)>,
    ranks: HashMap<T, usize>,
}

impl<T: Item> ItemFrequencyIndex<T> {
    /// Counts, per item, the number of transactions containing it.
    pub fn compute<S: AsRef<[T]>>(transactions: &[S], min_count: usize) -> Self {
        let mut item_counts: HashMap<T, usize> = HashMap::new();
        let mut seen: HashSet<&T> = HashSet::new();

        for transaction in transactions {
            seen.clear();
            for item in transaction.as_ref() {
                if seen.insert(item) {
                    *item_counts.entry(item.clone()).or_insert(0) += 1;
                }
            }
        }

        Self::from_counts(item_counts, min_count)
    }

    /// Same as [`compute`](Self::compute), but each path counts `weight` times.
    /// Paths are expected to be duplicate-free, as prefix paths are.
    pub fn from_weighted(paths: &[(Vec<T>, usize)], min_count: usize) -> Self {
        let mut item_counts: HashMap<T, usize> = HashMap::new();

        for (path, count) in paths {
            for item in path {
                *item_counts.entry(item.clone()).or_insert(0) += count;
            }
        }

        Self::from_counts(item_counts, min_count)
    }

    fn from_counts(item_counts: HashMap<T, usize>, min_count: usize) -> Self {
        let mut entries: Vec<(T, usize)> = item_counts
            .into_iter()
            .filter(|&(_, count)| count >= min_count)
            .collect();

        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let ranks = entries
            .iter()
            .enumerate()
            .map(|(rank, (item, _))| (item.clone(), rank))
            .collect();

        Self { entries, ranks }
    }

    pub fn entries(&self) -> &[(T, usize)] {
        &self.entries
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &(T, usize)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rank(&self, item: &T) -> Option<usize> {
        self.ranks.get(item).copied()
    }

    pub fn count(&self, item: &T) -> Option<usize> {
        self.rank(item).map(|rank| self.entries[rank].1)
    }

    /// Filters a raw transaction down to indexed items and sorts it into
    /// canonical order. Duplicates collapse into one occurrence.
    pub fn order(&self, transaction: &[T]) -> Vec<T> {
        let mut ranked: Vec<usize> = transaction
            .iter()
            .filter_map(|item| self.rank(item))
            .collect();

        ranked.sort_unstable();
        ranked.dedup();
        ranked
            .into_iter()
            .map(|rank| self.entries[rank].0.clone())
            .collect()
    }
}
