use super::Item;
use super::storage::FrequentItemsets;

/// Emits every `k`-subset of a single-path tree, extended by `prefix`.
///
/// Counts never increase towards the leaf, so a subset's support is the count
/// of its deepest node.
pub fn generate_combinations_from_path<T: Item>(
    path: &[(T, usize)],
    k: usize,
    prefix: &[T],
    result: &mut FrequentItemsets<T>,
) {
    if k == 0 || k > path.len() {
        return;
    }

    let indices: Vec<usize> = (0..path.len()).collect();
    let mut callback = |combination: &[usize]| {
        let mut pattern = prefix.to_vec();
        pattern.extend(combination.iter().map(|&idx| path[idx].0.clone()));
        let support = combination
            .last()
            .map_or(0, |&deepest| path[deepest].1);
        result.add(pattern, support);
    };
    generate_combinations_recursive(&indices, k, 0, &mut Vec::with_capacity(k), &mut callback);
}

pub fn generate_combinations_recursive<F>(
    items: &[usize],
    k: usize,
    start: usize,
    current: &mut Vec<usize>,
    callback: &mut F,
) where
    F: FnMut(&[usize]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    // Stop early once too few items remain to fill the combination.
    let needed = k - current.len();
    for i in start..=items.len().saturating_sub(needed) {
        current.push(items[i]);
        generate_combinations_recursive(items, k, i + 1, current, callback);
        current.pop();
    }
}
