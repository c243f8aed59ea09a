use crate::errors::SaplingError;

/// Create a string of all available items.
pub fn items_to_strings(items: Vec<&str>) -> String {
    let mut s = String::new();
    for i in items {
        s.push_str(i);
        s.push_str(&String::from(", "));
    }
    s
}

/// Find the most frequent value in a list.
///
/// The values are sorted lexicographically and the longest run of equal
/// values wins. When several runs share the maximum length, the first one
/// in sorted order is returned, so ties go to the smallest value.
///
/// * `values` - The values to count.
pub fn most_frequent<'a>(values: &[&'a str]) -> Result<&'a str, SaplingError> {
    let mut sorted: Vec<&'a str> = values.to_vec();
    sorted.sort_unstable();

    let (first, rest) = sorted.split_first().ok_or(SaplingError::EmptyList)?;
    let mut best = *first;
    let mut best_run = 1;
    let mut current = *first;
    let mut current_run = 1;
    for &v in rest {
        if v == current {
            current_run += 1;
        } else {
            current = v;
            current_run = 1;
        }
        // Strictly greater, so an earlier run keeps a tie.
        if current_run > best_run {
            best = current;
            best_run = current_run;
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_frequent_majority() {
        assert_eq!(most_frequent(&["a", "a", "b", "b", "b"]).unwrap(), "b");
        assert_eq!(most_frequent(&["dad", "mom", "mom", "mom", "mom", "dad"]).unwrap(), "mom");
    }

    #[test]
    fn test_most_frequent_ties() {
        assert_eq!(most_frequent(&["a", "b"]).unwrap(), "a");
        assert_eq!(most_frequent(&["b", "a"]).unwrap(), "a");
        assert_eq!(most_frequent(&["orange", "green", "green", "orange", "yellow"]).unwrap(), "green");
        // The last run is only taken when it is strictly longer.
        assert_eq!(most_frequent(&["z", "z", "a"]).unwrap(), "z");
    }

    #[test]
    fn test_most_frequent_empty() {
        let empty: Vec<&str> = Vec::new();
        assert_eq!(most_frequent(&empty), Err(SaplingError::EmptyList));
    }

    #[test]
    fn test_items_to_strings() {
        assert_eq!(items_to_strings(vec!["a", "b"]), "a, b, ");
    }
}
