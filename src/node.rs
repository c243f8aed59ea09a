use crate::errors::SaplingError;
use crate::record::Record;
use hashbrown::HashSet;
use log::trace;
use std::fmt::{self, Display};

/// Terminal node holding a decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionLeaf {
    pub value: String,
}

impl DecisionLeaf {
    pub fn new(value: impl Into<String>) -> Self {
        DecisionLeaf { value: value.into() }
    }
}

/// Outgoing edge of an attribute node, owning its child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueEdge {
    pub value: String,
    pub child: TreeNode,
}

impl ValueEdge {
    pub fn new(value: impl Into<String>, child: TreeNode) -> Self {
        ValueEdge {
            value: value.into(),
            child,
        }
    }
}

/// Inner node splitting on a single attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeNode {
    attribute: String,
    default: String,
    edges: Vec<ValueEdge>,
}

impl AttributeNode {
    /// Create a new attribute node.
    ///
    /// * `attribute` - The attribute this node splits on.
    /// * `default` - Decision returned for values not seen in training.
    /// * `edges` - One edge per distinct value, in the order they should be matched.
    pub fn new(
        attribute: impl Into<String>,
        default: impl Into<String>,
        edges: Vec<ValueEdge>,
    ) -> Result<Self, SaplingError> {
        {
            let mut seen = HashSet::with_capacity(edges.len());
            for e in &edges {
                if !seen.insert(e.value.as_str()) {
                    return Err(SaplingError::DuplicateEdge(e.value.clone()));
                }
            }
        }
        Ok(AttributeNode {
            attribute: attribute.into(),
            default: default.into(),
            edges,
        })
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn default_value(&self) -> &str {
        &self.default
    }

    pub fn edges(&self) -> &[ValueEdge] {
        &self.edges
    }

    /// Follow the edge matching the record's value, or fall back to the
    /// default when the value was never seen in training. A record that does
    /// not hold the attribute at all is an error, not a fallback.
    pub fn decision<'a>(&'a self, record: &Record) -> Result<&'a str, SaplingError> {
        let value = record.value(&self.attribute)?;
        match self.edges.iter().find(|e| e.value == value) {
            Some(edge) => edge.child.decision(record),
            None => {
                trace!(
                    "Value {} of {} unseen for record {}, using default {}.",
                    value,
                    self.attribute,
                    record.id(),
                    self.default
                );
                Ok(self.default.as_str())
            }
        }
    }
}

/// A node of an induced decision tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Leaf(DecisionLeaf),
    Attribute(AttributeNode),
}

impl TreeNode {
    /// Resolve the decision for a record.
    pub fn decision(&self, record: &Record) -> Result<&str, SaplingError> {
        match self {
            TreeNode::Leaf(leaf) => Ok(leaf.value.as_str()),
            TreeNode::Attribute(node) => node.decision(record),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf(_))
    }

    /// Number of attribute nodes on the longest path from here to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf(_) => 0,
            TreeNode::Attribute(node) => 1 + node.edges.iter().map(|e| e.child.depth()).max().unwrap_or(0),
        }
    }

    pub fn n_leaves(&self) -> usize {
        match self {
            TreeNode::Leaf(_) => 1,
            TreeNode::Attribute(node) => node.edges.iter().map(|e| e.child.n_leaves()).sum(),
        }
    }

    pub fn n_nodes(&self) -> usize {
        match self {
            TreeNode::Leaf(_) => 1,
            TreeNode::Attribute(node) => 1 + node.edges.iter().map(|e| e.child.n_nodes()).sum::<usize>(),
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter, depth: usize) -> fmt::Result {
        let pad = "      ".repeat(depth);
        match self {
            TreeNode::Leaf(leaf) => writeln!(f, "{}leaf={}", pad, leaf.value),
            TreeNode::Attribute(node) => {
                writeln!(f, "{}[{}] default={}", pad, node.attribute, node.default)?;
                for e in &node.edges {
                    writeln!(f, "{}  {}={}:", pad, node.attribute, e.value)?;
                    e.child.write_indented(f, depth + 1)?;
                }
                Ok(())
            }
        }
    }
}

impl From<DecisionLeaf> for TreeNode {
    fn from(leaf: DecisionLeaf) -> Self {
        TreeNode::Leaf(leaf)
    }
}

impl From<AttributeNode> for TreeNode {
    fn from(node: AttributeNode) -> Self {
        TreeNode::Attribute(node)
    }
}

impl Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
