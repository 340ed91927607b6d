use super::builder::{build_conditional_fp_tree, build_fp_tree};
use super::tree::FpTree;
use crate::fp::Item;
use crate::fp::combinations::generate_combinations_from_path;
use crate::fp::config::MiningConfig;
use crate::fp::error::MiningError;
use crate::fp::storage::FrequentItemsets;
use log::{debug, trace};
use rayon::prelude::*;

/// Mines every itemset whose support reaches the configured threshold.
pub fn fp_growth_algorithm<T: Item, S: AsRef<[T]>>(
    transactions: &[S],
    config: &MiningConfig,
) -> Result<FrequentItemsets<T>, MiningError> {
    let num_transactions = transactions.len();
    let min_count = config.validate(num_transactions)?;

    let fp_tree = build_fp_tree(transactions, min_count);
    debug!(
        "fp-growth: {} transactions, min_count {}, {} frequent items, {} tree nodes",
        num_transactions,
        min_count,
        fp_tree.header().len(),
        fp_tree.len()
    );

    let result = mine(&fp_tree, min_count, config, num_transactions)?;
    debug!("fp-growth: {} frequent itemsets", result.len());
    Ok(result)
}

/// Mines an already built tree. `num_transactions` is only recorded in the
/// result for relative supports.
pub fn mine<T: Item>(
    fp_tree: &FpTree<T>,
    min_count: usize,
    config: &MiningConfig,
    num_transactions: usize,
) -> Result<FrequentItemsets<T>, MiningError> {
    if min_count == 0 {
        return Err(MiningError::InvalidMinSupport { value: "0".to_string() });
    }
    if config.max_len == Some(0) {
        return Err(MiningError::InvalidMaxLen);
    }

    let miner = Miner {
        min_count,
        max_len: config.max_len,
    };
    let mut result = FrequentItemsets::new(num_transactions, min_count);

    if config.parallel && !fp_tree.has_single_path() {
        let pivots: Vec<_> = miner.pivots(fp_tree).collect();
        let partials: Vec<FrequentItemsets<T>> = pivots
            .par_iter()
            .map(|&(item, count)| {
                let mut partial = FrequentItemsets::new(num_transactions, min_count);
                let mut stack = Vec::new();
                stack.extend(miner.pivot(fp_tree, item, count, &[], &mut partial));
                miner.drain(stack, &mut partial);
                partial
            })
            .collect();

        for partial in partials {
            result.merge(partial);
        }
    } else {
        let mut stack = Vec::new();
        miner.expand(fp_tree, &[], &mut result, &mut stack);
        miner.drain(stack, &mut result);
    }

    Ok(result.finish())
}

/// A conditional tree waiting to be mined, with the items it is conditioned on.
struct Task<T> {
    tree: FpTree<T>,
    prefix: Vec<T>,
}

struct Miner {
    min_count: usize,
    max_len: Option<usize>,
}

impl Miner {
    /// Header items eligible as pivots, least frequent first.
    fn pivots<'a, T: Item>(&self, tree: &'a FpTree<T>) -> impl Iterator<Item = (&'a T, usize)> {
        let min_count = self.min_count;
        tree.header()
            .iter()
            .rev()
            .filter(move |entry| entry.count >= min_count)
            .map(|entry| (&entry.item, entry.count))
    }

    /// Processes pending conditional trees until none remain. The explicit
    /// stack keeps recursion depth off the call stack.
    fn drain<T: Item>(&self, mut stack: Vec<Task<T>>, result: &mut FrequentItemsets<T>) {
        while let Some(task) = stack.pop() {
            self.expand(&task.tree, &task.prefix, result, &mut stack);
        }
    }

    fn expand<T: Item>(
        &self,
        tree: &FpTree<T>,
        prefix: &[T],
        result: &mut FrequentItemsets<T>,
        stack: &mut Vec<Task<T>>,
    ) {
        if tree.has_single_path() {
            let path = tree.single_path();
            let longest = match self.max_len {
                Some(max_len) => max_len.saturating_sub(prefix.len()).min(path.len()),
                None => path.len(),
            };
            for k in 1..=longest {
                generate_combinations_from_path(&path, k, prefix, result);
            }
            return;
        }

        for (item, count) in self.pivots(tree) {
            stack.extend(self.pivot(tree, item, count, prefix, result));
        }
    }

    /// Emits `prefix + item` and returns its conditional tree, if any item
    /// remains frequent alongside it.
    fn pivot<T: Item>(
        &self,
        tree: &FpTree<T>,
        item: &T,
        count: usize,
        prefix: &[T],
        result: &mut FrequentItemsets<T>,
    ) -> Option<Task<T>> {
        let mut pattern = prefix.to_vec();
        pattern.push(item.clone());
        result.add(pattern.clone(), count);

        if self.max_len.is_some_and(|max_len| pattern.len() >= max_len) {
            return None;
        }

        let prefix_paths = tree.prefix_paths(item);
        let conditional_tree = build_conditional_fp_tree(&prefix_paths, self.min_count)?;
        trace!(
            "conditional tree for {:?}: {} items, {} nodes",
            pattern,
            conditional_tree.header().len(),
            conditional_tree.len()
        );

        Some(Task {
            tree: conditional_tree,
            prefix: pattern,
        })
    }
}
