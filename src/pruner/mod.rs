//! Pruner trait and implementations for cutting cross-validation runs short.
//!
//! After each eligible fold the engine hands the pruner the running trial's
//! fold errors together with the matching prefix of the best trajectory seen
//! so far in the search. The pruner answers one question: is the running
//! trial hopeless enough to stop now?

mod nop;
mod probabilistic;
mod tolerance;

pub use nop::NopPruner;
pub use probabilistic::ProbabilisticPruner;
pub use tolerance::TolerancePruner;

use crate::score;
use crate::types::Direction;

/// Everything a pruner may look at when deciding.
///
/// `best_prefix` and `current` always have the same length: the number of
/// folds the running trial has completed.
#[derive(Clone, Copy, Debug)]
pub struct PruneContext<'a> {
    /// Whether lower or higher fold errors are better.
    pub direction: Direction,
    /// The engine's current tolerance.
    pub tolerance: f64,
    /// Number of folds evaluated so far (1-based index of the latest fold).
    pub split: usize,
    /// The best trajectory's first `split` values.
    pub best_prefix: &'a [f64],
    /// The running trial's values.
    pub current: &'a [f64],
}

impl PruneContext<'_> {
    /// Mean of the best trajectory's prefix.
    #[must_use]
    pub fn best_mean(&self) -> f64 {
        score::mean(self.best_prefix)
    }

    /// Mean of the running trial's values.
    #[must_use]
    pub fn current_mean(&self) -> f64 {
        score::mean(self.current)
    }
}

/// Trait for pluggable pruning policies.
///
/// Pruners are only consulted once a best trajectory exists and only for
/// folds inside the configured pruning window, so implementations never
/// see an empty prefix. The trait requires `Send + Sync` so an engine can
/// be moved across threads between trials.
///
/// # Implementing a custom pruner
///
/// ```
/// use prunedcv::pruner::{PruneContext, Pruner};
///
/// /// Prune as soon as any single fold is twice as bad as the best run's.
/// struct FoldSpikePruner;
///
/// impl Pruner for FoldSpikePruner {
///     fn should_prune(&self, ctx: &PruneContext<'_>) -> bool {
///         ctx.best_prefix
///             .iter()
///             .zip(ctx.current)
///             .any(|(&best, &curr)| ctx.direction.is_better(best * 2.0, curr))
///     }
/// }
/// ```
pub trait Pruner: Send + Sync {
    /// Decide whether the running trial should stop after `ctx.split` folds.
    fn should_prune(&self, ctx: &PruneContext<'_>) -> bool;
}
