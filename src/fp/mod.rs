use std::fmt::Debug;
use std::hash::Hash;

pub mod combinations;
pub mod config;
pub mod error;
pub mod growth;
pub mod storage;


pub use config::{MinSupport, MiningConfig};
pub use error::{EncodeError, MiningError};
pub use growth::{FpNode, FpTree, HeaderTable, ItemFrequencyIndex, fp_growth_algorithm, mine};
pub use storage::{FrequentItemsets, FrequentLevel};

/// Anything usable as an item label: comparable, hashable, totally ordered,
/// and shareable across the mining threads.
pub trait Item: Clone + Eq + Hash + Ord + Debug + Send + Sync {}

impl<T: Clone + Eq + Hash + Ord + Debug + Send + Sync> Item for T {}
