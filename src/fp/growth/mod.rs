pub mod builder;
pub mod index;
pub mod mining;
pub mod tree;

pub use builder::{build_conditional_fp_tree, build_fp_tree};
pub use index::ItemFrequencyIndex;
pub use mining::{fp_growth_algorithm, mine};
pub use tree::{FpNode, FpTree, HeaderEntry, HeaderTable, NodeId};
