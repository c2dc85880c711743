use super::{PruneContext, Pruner};
use crate::types::Direction;

/// Prune runs whose mean fold error trails the best run's by more than
/// the tolerance.
///
/// The test is one-sided. With tolerance `t`, a minimizing run is pruned
/// when `best_mean * (1 + t) < current_mean`; a maximizing run when
/// `current_mean * (1 + t) < best_mean`. Equal or better runs never prune,
/// and a larger tolerance never prunes more.
///
/// The margin is relative, so fold errors are expected to be non-negative,
/// as they are for `mse` and `mae`.
///
/// # Examples
///
/// ```
/// use prunedcv::Direction;
/// use prunedcv::pruner::{PruneContext, Pruner, TolerancePruner};
///
/// let ctx = PruneContext {
///     direction: Direction::Minimize,
///     tolerance: 0.1,
///     split: 2,
///     best_prefix: &[1.0, 1.0],
///     current: &[2.0, 2.0],
/// };
/// assert!(TolerancePruner.should_prune(&ctx));
/// ```
pub struct TolerancePruner;

impl TolerancePruner {
    /// The scale factors applied to the `(best, current)` means.
    ///
    /// The tolerance always inflates whichever side represents the better
    /// value, so the current run must lose by more than that margin.
    fn scales(direction: Direction, tolerance: f64) -> (f64, f64) {
        match direction {
            Direction::Minimize => (1.0 + tolerance, 1.0),
            Direction::Maximize => (1.0, 1.0 + tolerance),
        }
    }
}

impl Pruner for TolerancePruner {
    fn should_prune(&self, ctx: &PruneContext<'_>) -> bool {
        let (best_scale, current_scale) = Self::scales(ctx.direction, ctx.tolerance);
        let best = ctx.best_mean() * best_scale;
        let current = ctx.current_mean() * current_scale;
        ctx.direction.is_better(best, current)
    }
}
