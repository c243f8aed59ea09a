use crate::errors::SaplingError;

/// Fraction of predictions equal to their label.
///
/// An empty input gives `0.0`.
pub fn accuracy<P: AsRef<str>, A: AsRef<str>>(predicted: &[P], actual: &[A]) -> Result<f64, SaplingError> {
    if predicted.len() != actual.len() {
        return Err(SaplingError::LengthMismatch(predicted.len(), actual.len()));
    }
    if predicted.is_empty() {
        return Ok(0.0);
    }
    let correct = predicted
        .iter()
        .zip(actual)
        .filter(|(p, a)| AsRef::<str>::as_ref(*p) == AsRef::<str>::as_ref(*a))
        .count();
    Ok(correct as f64 / predicted.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy() {
        let predicted = vec!["fruit", "fruit", "vegetable", "fruit"];
        let actual = vec!["fruit".to_string(), "vegetable".to_string(), "vegetable".to_string(), "fruit".to_string()];
        assert_eq!(accuracy(&predicted, &actual).unwrap(), 0.75);
        let empty: Vec<&str> = Vec::new();
        assert_eq!(accuracy(&empty, &empty).unwrap(), 0.0);
    }

    #[test]
    fn test_accuracy_length_mismatch() {
        assert_eq!(
            accuracy(&["fruit"], &["fruit", "vegetable"]),
            Err(SaplingError::LengthMismatch(1, 2))
        );
    }
}
