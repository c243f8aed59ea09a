//! Errors
//!
//! Custom error types used throughout the `sapling` crate.
use thiserror::Error;

/// Errors that can occur while inducing or querying a decision tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SaplingError {
    /// A default value was requested from a dataset without records.
    #[error("Dataset is empty, unable to compute a default value.")]
    EmptyDataset,
    /// The most frequent value of an empty list was requested.
    #[error("List is empty, unable to compute the most frequent value.")]
    EmptyList,
    /// A record was queried for an attribute it does not hold.
    #[error("Attribute {attribute} not found in record {record}.")]
    AttributeNotFound { attribute: String, record: String },
    /// A decision was requested before a tree was generated.
    #[error("No tree has been generated yet, call generate_tree first.")]
    UninitializedTree,
    /// A split attribute was requested from an empty candidate set.
    #[error("No candidate attributes left to split on.")]
    NoCandidateAttributes,
    /// Two outgoing edges of one attribute node carry the same value.
    #[error("Duplicate edge value {0} on a single attribute node.")]
    DuplicateEdge(String),
    /// Invalid value parsing.
    #[error("Invalid value {0} passed for {1}, expected one of {2}.")]
    ParseString(String, String, String),
    /// Two sequences that should line up have different lengths.
    #[error("Length mismatch, {0} predictions but {1} labels.")]
    LengthMismatch(usize, usize),
}
