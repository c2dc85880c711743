//! Reported scores for completed and pruned trials.
//!
//! A pruned trial still needs a number that ranks sensibly against fully
//! cross-validated candidates. The estimate scales the best trial's true
//! k-fold mean by how the pruned run compared to it on the folds both saw.

/// Arithmetic mean of `values`, or `0.0` for an empty slice.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Score for a trial stopped early.
///
/// Returns `(current_mean / best_prefix_mean) * best_score`. When the best
/// prefix mean is zero the ratio is undefined and `current_mean` is returned.
///
/// ```
/// use prunedcv::score::extrapolated_score;
///
/// // Twice as bad as a best run whose full score is 1.0.
/// assert!((extrapolated_score(2.0, 1.0, 1.0) - 2.0).abs() < f64::EPSILON);
/// ```
#[allow(clippy::float_cmp)]
#[must_use]
pub fn extrapolated_score(current_mean: f64, best_prefix_mean: f64, best_score: f64) -> f64 {
    if best_prefix_mean == 0.0 {
        return current_mean;
    }
    (current_mean / best_prefix_mean) * best_score
}

/// Score for a trial that ran every fold: the ordinary k-fold mean.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn completed_score(values: &[f64], folds: usize) -> f64 {
    debug_assert_eq!(values.len(), folds);
    values.iter().sum::<f64>() / folds as f64
}
