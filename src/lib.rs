#[cfg(test)]
mod fixtures;

// Modules
pub mod dataset;
pub mod errors;
pub mod metric;
pub mod node;
pub mod record;
pub mod selection;
pub mod tree;
pub mod utils;

// Individual classes, and functions
pub use dataset::Dataset;
pub use errors::SaplingError;
pub use node::{AttributeNode, DecisionLeaf, TreeNode, ValueEdge};
pub use record::Record;
pub use selection::AttributeSelection;
pub use tree::TreeGenerator;
