use super::index::ItemFrequencyIndex;
use super::tree::{FpTree, HeaderTable};
use crate::fp::Item;

/// Counts items, orders every transaction canonically and compresses the
/// result into an FP-tree. Transactions left empty after filtering are skipped.
pub fn build_fp_tree<T: Item, S: AsRef<[T]>>(transactions: &[S], min_count: usize) -> FpTree<T> {
    let index = ItemFrequencyIndex::compute(transactions, min_count);
    let mut fp_tree = FpTree::new(HeaderTable::from_index(&index));

    for transaction in transactions {
        let tx_items = index.order(transaction.as_ref());
        if !tx_items.is_empty() {
            fp_tree.insert(&tx_items, 1);
        }
    }

    if cfg!(debug_assertions) {
        fp_tree.assert_invariants();
    }
    fp_tree
}

/// Builds the conditional tree of a pattern base, keeping only items that
/// stay frequent within it. Returns `None` when no such item remains.
pub fn build_conditional_fp_tree<T: Item>(
    prefix_paths: &[(Vec<T>, usize)],
    min_count: usize,
) -> Option<FpTree<T>> {
    let index = ItemFrequencyIndex::from_weighted(prefix_paths, min_count);
    if index.is_empty() {
        return None;
    }

    let mut conditional_tree = FpTree::new(HeaderTable::from_index(&index));

    for (path, count) in prefix_paths {
        let filtered_path = index.order(path);
        if !filtered_path.is_empty() {
            conditional_tree.insert(&filtered_path, *count);
        }
    }

    if cfg!(debug_assertions) {
        conditional_tree.assert_invariants();
    }
    Some(conditional_tree)
}
