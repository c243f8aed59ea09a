//! Dataset
//!
//! An immutable view over shared records and a shrinking set of candidate
//! attributes. Every derivation returns a new `Dataset`; the records
//! themselves are never copied, only their `Arc` handles.
use crate::errors::SaplingError;
use crate::record::Record;
use crate::selection::AttributeSelection;
use crate::utils::most_frequent;
use hashbrown::{HashMap, HashSet};
use rand::Rng;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Dataset {
    /// Policy used to pick the split attribute.
    selection: AttributeSelection,
    /// Candidate split attributes, without duplicates.
    attributes: Vec<String>,
    /// Records in this view.
    records: Vec<Arc<Record>>,
}

impl Dataset {
    /// Create a new dataset, taking ownership of the records.
    ///
    /// * `attributes` - Candidate attributes. Duplicates are dropped, the first occurrence is kept.
    /// * `records` - The records to hold.
    /// * `selection` - Attribute selection policy.
    pub fn new(attributes: Vec<String>, records: Vec<Record>, selection: AttributeSelection) -> Self {
        Self::from_shared(attributes, records.into_iter().map(Arc::new).collect(), selection)
    }

    /// Create a new dataset over records that are already shared.
    pub fn from_shared(attributes: Vec<String>, records: Vec<Arc<Record>>, selection: AttributeSelection) -> Self {
        let mut seen = HashSet::with_capacity(attributes.len());
        let attributes = attributes.into_iter().filter(|a| seen.insert(a.clone())).collect();
        Dataset {
            selection,
            attributes,
            records,
        }
    }

    pub fn attribute_list(&self) -> &[String] {
        &self.attributes
    }

    pub fn records(&self) -> &[Arc<Record>] {
        &self.records
    }

    pub fn selection(&self) -> AttributeSelection {
        self.selection
    }

    /// Number of records in the dataset.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_attribute_set_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Choose the attribute to split on, according to the selection policy.
    ///
    /// The random generator is only consumed by `AttributeSelection::Random`.
    ///
    /// * `rng` - Source of randomness.
    pub fn select_split_attribute<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str, SaplingError> {
        let mut sorted: Vec<&str> = self.attributes.iter().map(String::as_str).collect();
        if sorted.is_empty() {
            return Err(SaplingError::NoCandidateAttributes);
        }
        sorted.sort_unstable();
        let idx = match self.selection {
            AttributeSelection::Ascending => 0,
            AttributeSelection::Descending => sorted.len() - 1,
            AttributeSelection::Random => rng.gen_range(0..sorted.len()),
        };
        Ok(sorted[idx])
    }

    /// Project every record's value for an attribute.
    ///
    /// * `attribute` - The attribute to project.
    /// * `distinct` - Keep each value once, in the order first encountered.
    pub fn distinct_values(&self, attribute: &str, distinct: bool) -> Result<Vec<&str>, SaplingError> {
        let mut values = Vec::with_capacity(self.records.len());
        let mut seen = HashSet::new();
        for record in &self.records {
            let v = record.value(attribute)?;
            if !distinct || seen.insert(v) {
                values.push(v);
            }
        }
        Ok(values)
    }

    /// A new dataset with `attribute` removed from the candidate set.
    /// Removing an attribute that is not a candidate gives an equivalent dataset.
    pub fn remove_attribute(&self, attribute: &str) -> Dataset {
        Dataset {
            selection: self.selection,
            attributes: self.attributes.iter().filter(|a| *a != attribute).cloned().collect(),
            records: self.records.clone(),
        }
    }

    /// Split the dataset into one dataset per distinct value of `attribute`.
    ///
    /// Partitions follow the order in which values are first encountered, and
    /// none of them has `attribute` as a candidate. Every record lands in
    /// exactly one partition, and no partition is empty.
    pub fn partition(&self, attribute: &str) -> Result<Vec<Dataset>, SaplingError> {
        let mut groups: Vec<Vec<Arc<Record>>> = Vec::new();
        let mut position: HashMap<&str, usize> = HashMap::new();
        for record in &self.records {
            let v = record.value(attribute)?;
            let idx = *position.entry(v).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[idx].push(Arc::clone(record));
        }

        let remaining: Vec<String> = self.attributes.iter().filter(|a| *a != attribute).cloned().collect();
        Ok(groups
            .into_iter()
            .map(|records| Dataset {
                selection: self.selection,
                attributes: remaining.clone(),
                records,
            })
            .collect())
    }

    /// Most frequent value of the target attribute, ties going to the
    /// lexicographically smallest value.
    pub fn default_value(&self, target_attribute: &str) -> Result<&str, SaplingError> {
        if self.records.is_empty() {
            return Err(SaplingError::EmptyDataset);
        }
        let values = self.distinct_values(target_attribute, false)?;
        most_frequent(&values)
    }

    /// Whether every record shares one value for the target attribute.
    ///
    /// An empty dataset has zero distinct values and so returns `false`.
    pub fn all_same_outcome(&self, target_attribute: &str) -> Result<bool, SaplingError> {
        Ok(self.distinct_values(target_attribute, true)?.len() == 1)
    }

    /// See [`most_frequent`].
    pub fn most_frequent<'a>(values: &[&'a str]) -> Result<&'a str, SaplingError> {
        most_frequent(values)
    }
}
