//! Record
//!
//! A single labeled observation, mapping attribute names to categorical values.
use crate::errors::SaplingError;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// A single row of categorical data.
///
/// Records are built once by whatever parses the input and are read-only
/// afterwards. Datasets and tree nodes share them behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier used in diagnostics.
    id: String,
    /// Attribute name to attribute value.
    values: HashMap<String, String>,
}

impl Record {
    /// Create a record holding no attributes.
    pub fn new(id: impl Into<String>) -> Self {
        Record {
            id: id.into(),
            values: HashMap::new(),
        }
    }

    /// Create a record from `(attribute, value)` pairs.
    pub fn from_pairs<I, K, V>(id: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Record {
            id: id.into(),
            values: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Set the value of an attribute on the record.
    /// * `attribute` - Name of the attribute.
    /// * `value` - Value the record holds for it.
    pub fn set_value(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(attribute.into(), value.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Look up the value of an attribute.
    ///
    /// * `attribute` - Name of the attribute to look up.
    pub fn value(&self, attribute: &str) -> Result<&str, SaplingError> {
        self.values
            .get(attribute)
            .map(String::as_str)
            .ok_or_else(|| SaplingError::AttributeNotFound {
                attribute: attribute.to_string(),
                record: self.id.clone(),
            })
    }

    pub fn contains(&self, attribute: &str) -> bool {
        self.values.contains_key(attribute)
    }

    /// Names of the attributes this record holds, sorted.
    pub fn attributes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.values.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
