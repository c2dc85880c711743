//! Core types shared across the crate.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The direction in which fold errors are compared.
///
/// Values are always stored exactly as the caller produced them. Every
/// comparison goes through this type, so a maximized metric never has to
/// be negated to fit a "lower is better" convention.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Lower values are better (losses, error metrics).
    #[default]
    Minimize,
    /// Higher values are better (scores, accuracies).
    Maximize,
}

impl Direction {
    /// Returns `true` if `a` is strictly better than `b`.
    ///
    /// ```
    /// use prunedcv::Direction;
    ///
    /// assert!(Direction::Minimize.is_better(1.0, 2.0));
    /// assert!(Direction::Maximize.is_better(2.0, 1.0));
    /// assert!(!Direction::Minimize.is_better(1.0, 1.0));
    /// ```
    #[must_use]
    pub fn is_better(self, a: f64, b: f64) -> bool {
        match self {
            Direction::Minimize => a < b,
            Direction::Maximize => a > b,
        }
    }

    /// Returns `true` if `a` is better than or equal to `b`.
    #[must_use]
    pub fn is_at_least_as_good(self, a: f64, b: f64) -> bool {
        match self {
            Direction::Minimize => a <= b,
            Direction::Maximize => a >= b,
        }
    }

    /// Returns `true` when this direction minimizes.
    #[must_use]
    pub fn is_minimize(self) -> bool {
        self == Direction::Minimize
    }
}

/// How a trial ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TrialOutcome {
    /// Every fold was evaluated; the score is the exact k-fold mean.
    Complete,
    /// The trial was stopped early; the score is extrapolated.
    Pruned,
}
