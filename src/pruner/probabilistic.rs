use parking_lot::Mutex;

use super::{PruneContext, Pruner};

/// Prune on a Bayesian posterior over "the best run truly dominates".
///
/// A run whose mean is at least as good as the best run's is never pruned.
/// Otherwise the pruner counts fold positions where the best run beat the
/// current one (`wins`) and where it lost (`losses`), draws once from
/// `Beta(1 + wins, 1 + losses)`, and prunes when the draw exceeds 0.5.
/// Runs that lose consistently are pruned almost surely; runs that trade
/// blows with the best run usually survive.
///
/// # Examples
///
/// ```
/// use prunedcv::pruner::ProbabilisticPruner;
///
/// // Entropy-seeded
/// let pruner = ProbabilisticPruner::new();
///
/// // Reproducible
/// let pruner = ProbabilisticPruner::with_seed(42);
/// ```
pub struct ProbabilisticPruner {
    rng: Mutex<fastrand::Rng>,
}

impl ProbabilisticPruner {
    /// Creates a pruner seeded from entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    /// Creates a pruner whose draws are reproducible for a given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }

    pub(crate) fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::with_seed)
    }
}

impl Default for ProbabilisticPruner {
    fn default() -> Self {
        Self::new()
    }
}

impl Pruner for ProbabilisticPruner {
    fn should_prune(&self, ctx: &PruneContext<'_>) -> bool {
        if ctx
            .direction
            .is_at_least_as_good(ctx.current_mean(), ctx.best_mean())
        {
            return false;
        }

        let (wins, losses) = count_wins(ctx);
        let draw = sample_beta(&mut self.rng.lock(), 1 + wins, 1 + losses);
        trace_debug!(wins, losses, draw, "posterior draw");
        draw > 0.5
    }
}

/// Counts `(best beats current, current beats best)` over aligned folds.
/// Ties count for neither side.
fn count_wins(ctx: &PruneContext<'_>) -> (usize, usize) {
    ctx.best_prefix
        .iter()
        .zip(ctx.current)
        .fold((0, 0), |(wins, losses), (&best, &curr)| {
            if ctx.direction.is_better(best, curr) {
                (wins + 1, losses)
            } else if ctx.direction.is_better(curr, best) {
                (wins, losses + 1)
            } else {
                (wins, losses)
            }
        })
}

/// Draws from `Beta(alpha, beta)` for integer shape parameters.
///
/// The `alpha`-th smallest of `alpha + beta - 1` independent uniforms is
/// exactly `Beta(alpha, beta)` distributed.
fn sample_beta(rng: &mut fastrand::Rng, alpha: usize, beta: usize) -> f64 {
    debug_assert!(alpha >= 1 && beta >= 1);
    let mut uniforms: Vec<f64> = (0..alpha + beta - 1).map(|_| rng.f64()).collect();
    uniforms.sort_unstable_by(f64::total_cmp);
    uniforms[alpha - 1]
}
