//! Frequent itemset mining with FP-Growth.
//!
//! Transactions are compressed into a prefix-sharing FP-tree and mined by
//! recursive decomposition into conditional trees, without generating
//! candidate itemsets.
//!
//! ```
//! use fpminer::{MiningConfig, fp_growth};
//!
//! let transactions = vec![
//!     vec!["bread", "milk"],
//!     vec!["bread", "butter", "milk"],
//!     vec!["butter", "milk"],
//! ];
//! let itemsets = fp_growth(&transactions, &MiningConfig::with_min_count(2)).unwrap();
//! assert_eq!(itemsets.support(&["milk"]), Some(3));
//! assert_eq!(itemsets.support(&["milk", "bread"]), Some(2));
//! ```

pub mod encoder;
pub mod fp;

pub use encoder::TransactionEncoder;
pub use fp::{
    EncodeError, FrequentItemsets, FrequentLevel, Item, MinSupport, MiningConfig, MiningError,
};

/// Mines all frequent itemsets of `transactions` under `config`.
pub fn fp_growth<T: Item, S: AsRef<[T]>>(
    transactions: &[S],
    config: &MiningConfig,
) -> Result<FrequentItemsets<T>, MiningError> {
    fp::fp_growth_algorithm(transactions, config)
}
