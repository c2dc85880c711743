//! Tabular training data.

use crate::error::{Error, Result};

/// A validated feature matrix with one target per row.
///
/// # Examples
///
/// ```
/// use prunedcv::Dataset;
///
/// let data = Dataset::new(vec![vec![0.0, 1.0], vec![1.0, 0.0]], vec![1.0, 2.0])?;
/// assert_eq!(data.len(), 2);
/// assert_eq!(data.n_features(), 2);
/// # Ok::<(), prunedcv::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    features: Vec<Vec<f64>>,
    targets: Vec<f64>,
}

impl Dataset {
    /// Creates a dataset after checking its shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] if there are no rows, rows have
    /// differing or zero widths, the number of targets does not match the
    /// number of rows, or any value is not finite.
    pub fn new(features: Vec<Vec<f64>>, targets: Vec<f64>) -> Result<Self> {
        let Some(first) = features.first() else {
            return Err(Error::InvalidShape("feature matrix has no rows".into()));
        };
        let width = first.len();
        if width == 0 {
            return Err(Error::InvalidShape("feature rows have no columns".into()));
        }
        if let Some((i, row)) = features.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(Error::InvalidShape(format!(
                "row {i} has {} columns, expected {width}",
                row.len()
            )));
        }
        if targets.len() != features.len() {
            return Err(Error::InvalidShape(format!(
                "{} targets for {} rows",
                targets.len(),
                features.len()
            )));
        }
        if features.iter().flatten().chain(&targets).any(|v| !v.is_finite()) {
            return Err(Error::InvalidShape("data contains NaN or infinite values".into()));
        }
        Ok(Self { features, targets })
    }

    /// Creates a single-feature dataset from `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// See [`Dataset::new`].
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self> {
        let (features, targets) = pairs.iter().map(|&(x, y)| (vec![x], y)).unzip();
        Self::new(features, targets)
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Always `false` for a validated dataset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Number of columns.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.features.first().map_or(0, Vec::len)
    }

    /// The feature rows.
    #[must_use]
    pub fn features(&self) -> &[Vec<f64>] {
        &self.features
    }

    /// The targets, aligned with [`features`](Self::features).
    #[must_use]
    pub fn targets(&self) -> &[f64] {
        &self.targets
    }

    /// Copies the rows at `indices`, in that order.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds.
    #[must_use]
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            features: indices.iter().map(|&i| self.features[i].clone()).collect(),
            targets: indices.iter().map(|&i| self.targets[i]).collect(),
        }
    }
}
