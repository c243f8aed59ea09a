use crate::dataset::Dataset;
use crate::errors::SaplingError;
use crate::metric::accuracy;
use crate::node::{AttributeNode, DecisionLeaf, TreeNode, ValueEdge};
use crate::record::Record;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::{self, Display};

/// Induces a decision tree from a dataset and answers decisions with it.
///
/// The root is absent until `generate_tree` succeeds.
#[derive(Debug, Clone, Default)]
pub struct TreeGenerator {
    /// Integer value used to seed the random attribute selection.
    pub seed: u64,
    root: Option<TreeNode>,
}

impl TreeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the seed on the generator.
    /// * `seed` - Seed for the random number generator used by `AttributeSelection::Random`.
    pub fn set_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generate a tree from training data.
    ///
    /// The target attribute is removed from a derived copy of the candidate
    /// set, the caller's dataset is left as is. Randomness is drawn from a
    /// `StdRng` seeded with `seed`, so repeated calls build the same tree.
    ///
    /// * `training_data` - The dataset to train on.
    /// * `target_attribute` - The attribute to predict.
    pub fn generate_tree(&mut self, training_data: &Dataset, target_attribute: &str) -> Result<(), SaplingError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.generate_tree_with_rng(training_data, target_attribute, &mut rng)
    }

    /// Generate a tree, drawing any randomness from `rng`.
    pub fn generate_tree_with_rng<R: Rng + ?Sized>(
        &mut self,
        training_data: &Dataset,
        target_attribute: &str,
        rng: &mut R,
    ) -> Result<(), SaplingError> {
        let data = training_data.remove_attribute(target_attribute);
        if data.is_attribute_set_empty() {
            warn!(
                "No candidate attributes besides {}, the tree will be a single leaf.",
                target_attribute
            );
        }
        let root = grow(&data, target_attribute, rng)?;
        info!(
            "Generated tree on {} records, depth {}, {} leaves.",
            data.len(),
            root.depth(),
            root.n_leaves()
        );
        if self.root.replace(root).is_some() {
            debug!("Replaced a previously generated tree.");
        }
        Ok(())
    }

    /// Look up the decision for a record.
    pub fn decision(&self, record: &Record) -> Result<&str, SaplingError> {
        self.root()?.decision(record)
    }

    /// Decisions for several records, failing on the first error.
    pub fn predict(&self, records: &[Record]) -> Result<Vec<&str>, SaplingError> {
        let root = self.root()?;
        records.iter().map(|r| root.decision(r)).collect()
    }

    /// Fraction of records whose decision equals their target value.
    pub fn accuracy(&self, records: &[Record], target_attribute: &str) -> Result<f64, SaplingError> {
        let predicted = self.predict(records)?;
        let actual = records
            .iter()
            .map(|r| r.value(target_attribute))
            .collect::<Result<Vec<_>, _>>()?;
        accuracy(&predicted, &actual)
    }

    pub fn root(&self) -> Result<&TreeNode, SaplingError> {
        self.root.as_ref().ok_or(SaplingError::UninitializedTree)
    }

    pub fn is_fitted(&self) -> bool {
        self.root.is_some()
    }

    pub fn depth(&self) -> Result<usize, SaplingError> {
        Ok(self.root()?.depth())
    }

    pub fn n_leaves(&self) -> Result<usize, SaplingError> {
        Ok(self.root()?.n_leaves())
    }
}

/// Recursively build the subtree for `subset`.
///
/// Stops on a pure subset or an exhausted candidate set, otherwise splits on
/// the selected attribute and builds one child per partition. Partitions are
/// never empty, so the default value is always defined below the root.
fn grow<R: Rng + ?Sized>(subset: &Dataset, target_attribute: &str, rng: &mut R) -> Result<TreeNode, SaplingError> {
    let default_value = subset.default_value(target_attribute)?;
    if subset.all_same_outcome(target_attribute)? || subset.is_attribute_set_empty() {
        return Ok(DecisionLeaf::new(default_value).into());
    }

    let attribute = subset.select_split_attribute(rng)?;
    let partitions = subset.partition(attribute)?;
    debug!(
        "Splitting {} records on {} into {} branches.",
        subset.len(),
        attribute,
        partitions.len()
    );

    let mut edges = Vec::with_capacity(partitions.len());
    for p in &partitions {
        let value = p
            .records()
            .first()
            .ok_or(SaplingError::EmptyDataset)?
            .value(attribute)?;
        edges.push(ValueEdge::new(value, grow(p, target_attribute, rng)?));
    }
    Ok(AttributeNode::new(attribute, default_value, edges)?.into())
}

impl Display for TreeGenerator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.root {
            Some(root) => write!(f, "{}", root),
            None => write!(f, "<empty tree>"),
        }
    }
}
