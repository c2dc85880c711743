//! Per-fold error metrics.

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};

/// A scalar error metric computed on one fold's test rows.
///
/// Parse from a name with [`str::parse`]:
///
/// ```
/// use prunedcv::Metric;
///
/// let m: Metric = "mae".parse()?;
/// assert_eq!(m, Metric::MeanAbsoluteError);
/// assert!("r2".parse::<Metric>().is_err());
/// # Ok::<(), prunedcv::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Metric {
    /// Mean of squared residuals (`"mse"`).
    #[default]
    MeanSquaredError,
    /// Mean of absolute residuals (`"mae"`).
    MeanAbsoluteError,
}

impl Metric {
    /// The short name accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Metric::MeanSquaredError => "mse",
            Metric::MeanAbsoluteError => "mae",
        }
    }

    /// Computes the metric over aligned `truth` and `predicted` values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the slices differ in length and
    /// [`Error::InvalidShape`] if they are empty.
    #[allow(clippy::cast_precision_loss)]
    pub fn evaluate(self, truth: &[f64], predicted: &[f64]) -> Result<f64> {
        if truth.len() != predicted.len() {
            return Err(Error::LengthMismatch {
                expected: truth.len(),
                got: predicted.len(),
            });
        }
        if truth.is_empty() {
            return Err(Error::InvalidShape("cannot score an empty fold".into()));
        }
        let residuals = truth.iter().zip(predicted).map(|(t, p)| t - p);
        let total: f64 = match self {
            Metric::MeanSquaredError => residuals.map(|r| r * r).sum(),
            Metric::MeanAbsoluteError => residuals.map(f64::abs).sum(),
        };
        Ok(total / truth.len() as f64)
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mse" | "mean_squared_error" => Ok(Metric::MeanSquaredError),
            "mae" | "mean_absolute_error" => Ok(Metric::MeanAbsoluteError),
            _ => Err(Error::UnsupportedMetric(s.to_owned())),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
