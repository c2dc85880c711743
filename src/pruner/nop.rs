use super::{PruneContext, Pruner};

/// A pruner that never prunes. Turns the engine into plain k-fold
/// cross-validation that still tracks the best trajectory.
pub struct NopPruner;

impl Pruner for NopPruner {
    fn should_prune(&self, _ctx: &PruneContext<'_>) -> bool {
        false
    }
}
