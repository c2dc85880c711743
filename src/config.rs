//! Engine configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Direction;

/// Which built-in pruning policy the engine consults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Policy {
    /// Deterministic test: prune when the current mean is worse than the
    /// best mean by more than the configured tolerance.
    #[default]
    Tolerance,
    /// Bayesian test: prune on a Beta-posterior draw over pairwise fold
    /// wins. A fixed seed makes the draws reproducible.
    Probabilistic {
        /// Seed for the posterior sampler. `None` seeds from entropy.
        seed: Option<u64>,
    },
}

/// Configuration shared by every trial of a search.
///
/// # Examples
///
/// ```
/// use prunedcv::{Direction, PrunedCvConfig};
///
/// let config = PrunedCvConfig::new(5, 0.1);
/// assert_eq!(config.folds, 5);
/// assert_eq!(config.splits_to_start_pruning, 2);
/// assert_eq!(config.direction, Direction::Minimize);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrunedCvConfig {
    /// Number of cross-validation folds.
    pub folds: usize,
    /// Fractional margin by which a run must trail the best run to be pruned.
    pub tolerance: f64,
    /// First fold (1-based) at which pruning may be attempted.
    pub splits_to_start_pruning: usize,
    /// Whether lower or higher fold errors are better.
    pub direction: Direction,
    /// The pruning policy.
    pub policy: Policy,
}

impl PrunedCvConfig {
    /// Creates a minimizing, tolerance-policy configuration that starts
    /// pruning at the second fold.
    #[must_use]
    pub fn new(folds: usize, tolerance: f64) -> Self {
        Self {
            folds,
            tolerance,
            splits_to_start_pruning: 2,
            direction: Direction::Minimize,
            policy: Policy::Tolerance,
        }
    }

    /// Checks the invariants every engine relies on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFolds`] for fewer than two folds,
    /// and [`Error::InvalidTolerance`] for a negative or non-finite tolerance.
    pub fn validate(&self) -> Result<()> {
        if self.folds < 2 {
            return Err(Error::InvalidFolds(self.folds));
        }
        validate_tolerance(self.tolerance)
    }

    /// Returns `true` if the decider may be consulted after `split` folds.
    ///
    /// Splits are 1-based, so a start of `0` behaves like `1`. The final fold
    /// is never eligible: it completes the trial anyway.
    #[must_use]
    pub fn is_prunable_split(&self, split: usize) -> bool {
        split >= self.splits_to_start_pruning && split < self.folds
    }
}

pub(crate) fn validate_tolerance(tolerance: f64) -> Result<()> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(Error::InvalidTolerance(tolerance));
    }
    Ok(())
}
