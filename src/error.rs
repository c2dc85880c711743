#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the number of folds is smaller than two.
    #[error("invalid fold count: {0} (cross-validation needs at least 2 folds)")]
    InvalidFolds(usize),

    /// Returned when the tolerance is negative or not finite.
    #[error("invalid tolerance: {0} must be a finite value >= 0.0")]
    InvalidTolerance(f64),

    /// Returned when a fold error is NaN or infinite.
    #[error("fold {fold}: error value {value} is not a finite number")]
    NonFiniteFoldError {
        /// The 1-based index of the offending fold.
        fold: usize,
        /// The rejected value.
        value: f64,
    },

    /// Returned when a metric name is not recognized.
    #[error("unsupported metric '{0}' (expected \"mse\" or \"mae\")")]
    UnsupportedMetric(String),

    /// Returned when features or targets do not form a usable table.
    #[error("invalid data shape: {0}")]
    InvalidShape(String),

    /// Returned when a dataset has fewer samples than folds.
    #[error("cannot split {n_samples} samples into {n_splits} folds")]
    NotEnoughSamples {
        /// The number of samples available.
        n_samples: usize,
        /// The number of folds requested.
        n_splits: usize,
    },

    /// Returned when two sequences that must align have different lengths.
    #[error("length mismatch: expected {expected} values, got {got}")]
    LengthMismatch {
        /// The expected number of values.
        expected: usize,
        /// The actual number of values.
        got: usize,
    },

    /// Returned when a grid parameter has no candidate values.
    #[error("parameter '{0}' has no candidate values")]
    EmptyChoices(String),

    /// Returned by estimators that reject a parameter name or value.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// The name of the parameter.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Returned when an estimator fails to fit or predict.
    #[error("estimator error: {0}")]
    Estimator(String),

    /// Returned when asking for a search result before any candidate was scored.
    #[error("no candidates have been evaluated")]
    NoCompletedTrials,

    /// Returned when an internal invariant is violated.
    #[error("internal error: {0}")]
    Internal(&'static str),
}

pub type Result<T> = core::result::Result<T, Error>;
