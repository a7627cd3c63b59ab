//! Summary statistics over track-level feature sequences.

/// Arithmetic mean of a feature sequence.
///
/// Returns `None` for an empty slice; callers own the missing-data policy
/// (the chart builder turns it into a typed error).
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().copied().sum::<f64>() / values.len() as f64)
    }
}
