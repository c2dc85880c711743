use crate::config::{Policy, PrunedCvConfig};
use crate::error::Result;
use crate::pruner::Pruner;
use crate::types::Direction;

use super::{PrunedCv, builtin_pruner};

/// A builder for constructing [`PrunedCv`] engines with a fluent API.
///
/// Created via [`PrunedCv::builder()`].
///
/// # Defaults
///
/// - Direction: [`Minimize`](Direction::Minimize)
/// - `splits_to_start_pruning`: 2
/// - Policy: [`Tolerance`](Policy::Tolerance)
///
/// # Examples
///
/// ```
/// use prunedcv::prelude::*;
///
/// let cv = PrunedCv::builder(5, 0.2)
///     .maximize()
///     .pruner(NopPruner)
///     .build()?;
///
/// assert_eq!(cv.config().direction, Direction::Maximize);
/// # Ok::<(), prunedcv::Error>(())
/// ```
pub struct PrunedCvBuilder {
    config: PrunedCvConfig,
    pruner: Option<Box<dyn Pruner>>,
}

impl PrunedCvBuilder {
    pub(super) fn new(folds: usize, tolerance: f64) -> Self {
        Self {
            config: PrunedCvConfig::new(folds, tolerance),
            pruner: None,
        }
    }

    /// Set the number of folds.
    #[must_use]
    pub fn folds(mut self, folds: usize) -> Self {
        self.config.folds = folds;
        self
    }

    /// Set the tolerance of the deterministic policy.
    #[must_use]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// Set the first fold (1-based) at which pruning may happen.
    #[must_use]
    pub fn splits_to_start_pruning(mut self, split: usize) -> Self {
        self.config.splits_to_start_pruning = split;
        self
    }

    /// Treat lower fold errors as better (the default).
    #[must_use]
    pub fn minimize(mut self) -> Self {
        self.config.direction = Direction::Minimize;
        self
    }

    /// Treat higher fold errors as better.
    #[must_use]
    pub fn maximize(mut self) -> Self {
        self.config.direction = Direction::Maximize;
        self
    }

    /// Set the comparison direction explicitly.
    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.config.direction = direction;
        self
    }

    /// Switch between the tolerance policy and the probabilistic policy.
    ///
    /// Switching on keeps a seed previously set with [`seed`](Self::seed).
    #[must_use]
    pub fn probabilistic(mut self, enabled: bool) -> Self {
        self.config.policy = match (enabled, self.config.policy) {
            (false, _) => Policy::Tolerance,
            (true, Policy::Probabilistic { seed }) => Policy::Probabilistic { seed },
            (true, Policy::Tolerance) => Policy::Probabilistic { seed: None },
        };
        self
    }

    /// Seed the probabilistic policy. Implies [`probabilistic(true)`](Self::probabilistic).
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.policy = Policy::Probabilistic { seed: Some(seed) };
        self
    }

    /// Set the policy explicitly.
    #[must_use]
    pub fn policy(mut self, policy: Policy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Use a custom pruner instead of the built-in one for the policy.
    #[must_use]
    pub fn pruner(mut self, pruner: impl Pruner + 'static) -> Self {
        self.pruner = Some(Box::new(pruner));
        self
    }

    /// Build the engine.
    ///
    /// # Errors
    ///
    /// Returns the error from [`PrunedCvConfig::validate`].
    pub fn build(self) -> Result<PrunedCv> {
        let pruner = self
            .pruner
            .unwrap_or_else(|| builtin_pruner(self.config.policy));
        PrunedCv::with_pruner(self.config, pruner)
    }
}
