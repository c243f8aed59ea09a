//! Selection
//!
//! Policies for choosing the attribute to split on at each step of induction.
use crate::errors::SaplingError;
use crate::utils::items_to_strings;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Attribute selection policy of a dataset.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttributeSelection {
    /// Split on the lexicographically smallest candidate.
    #[default]
    Ascending,
    /// Split on the lexicographically largest candidate.
    Descending,
    /// Split on a uniformly sampled candidate. Candidates are sorted
    /// before sampling so a fixed seed gives a fixed choice.
    Random,
}

impl FromStr for AttributeSelection {
    type Err = SaplingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ascending" | "ASCENDING_ALPHABETICAL" => Ok(AttributeSelection::Ascending),
            "Descending" | "DESCENDING_ALPHABETICAL" => Ok(AttributeSelection::Descending),
            "Random" | "RANDOM" => Ok(AttributeSelection::Random),

            _ => Err(SaplingError::ParseString(
                s.to_string(),
                "AttributeSelection".to_string(),
                items_to_strings(vec!["Ascending", "Descending", "Random"]),
            )),
        }
    }
}

impl Display for AttributeSelection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            AttributeSelection::Ascending => "Ascending",
            AttributeSelection::Descending => "Descending",
            AttributeSelection::Random => "Random",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_from_str() {
        assert_eq!("Ascending".parse::<AttributeSelection>().unwrap(), AttributeSelection::Ascending);
        assert_eq!(
            "DESCENDING_ALPHABETICAL".parse::<AttributeSelection>().unwrap(),
            AttributeSelection::Descending
        );
        assert_eq!("RANDOM".parse::<AttributeSelection>().unwrap(), AttributeSelection::Random);
        assert!(matches!(
            "Gain".parse::<AttributeSelection>(),
            Err(SaplingError::ParseString(..))
        ));
    }

    #[test]
    fn test_selection_display_round_trip() {
        for s in [
            AttributeSelection::Ascending,
            AttributeSelection::Descending,
            AttributeSelection::Random,
        ] {
            assert_eq!(s.to_string().parse::<AttributeSelection>().unwrap(), s);
        }
    }
}
