//! Fold-error trajectories for the running trial and the best trial so far.

use crate::score;
use crate::types::Direction;

/// Fold errors of the trial currently in progress, in fold order.
#[derive(Clone, Debug, Default)]
pub struct TrialState {
    values: Vec<f64>,
}

impl TrialState {
    /// Creates an empty trial state with room for `folds` values.
    #[must_use]
    pub fn with_capacity(folds: usize) -> Self {
        Self {
            values: Vec::with_capacity(folds),
        }
    }

    pub(crate) fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    pub(crate) fn clear(&mut self) {
        self.values.clear();
    }

    pub(crate) fn take(&mut self) -> Vec<f64> {
        core::mem::take(&mut self.values)
    }

    /// The values recorded so far.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of folds recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` before the first fold of a trial is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Mean of the recorded values.
    #[must_use]
    pub fn mean(&self) -> f64 {
        score::mean(&self.values)
    }
}

/// Fold errors of the best completed trial, shared by every trial of a search.
///
/// The trajectory stays empty and incomplete until the first trial has run
/// all of its folds. While that first trial runs, its values accumulate in a
/// provisional buffer; no pruning is possible during this phase.
#[derive(Clone, Debug, Default)]
pub struct BestTrajectory {
    values: Vec<f64>,
    completed: bool,
}

impl BestTrajectory {
    /// Creates an empty, incomplete trajectory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once a first trial has run every fold.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// The stored fold errors. While incomplete these are provisional.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The first `len` values, aligned with a trial that has run `len` folds.
    #[must_use]
    pub fn prefix(&self, len: usize) -> &[f64] {
        &self.values[..len.min(self.values.len())]
    }

    /// Sum of every stored value.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Mean of every stored value, i.e. the best trial's k-fold score.
    #[must_use]
    pub fn mean(&self) -> f64 {
        score::mean(&self.values)
    }

    /// Appends a value while the first trial populates the trajectory.
    ///
    /// Marks the trajectory completed once `folds` values are stored.
    pub(crate) fn populate(&mut self, value: f64, folds: usize) {
        debug_assert!(!self.completed, "populating a completed trajectory");
        self.values.push(value);
        if self.values.len() == folds {
            self.completed = true;
        }
    }

    /// Drops a partially populated first trial. A completed trajectory is kept.
    pub(crate) fn discard_provisional(&mut self) {
        if !self.completed {
            self.values.clear();
        }
    }

    /// Replaces the trajectory with `candidate` if its total is strictly
    /// better. Returns `true` on replacement.
    pub(crate) fn replace_if_better(&mut self, candidate: Vec<f64>, direction: Direction) -> bool {
        let candidate_sum: f64 = candidate.iter().sum();
        if direction.is_better(candidate_sum, self.sum()) {
            self.values = candidate;
            true
        } else {
            false
        }
    }

    /// Forgets the best trial so the next trial repopulates it.
    pub fn reset(&mut self) {
        self.values.clear();
        self.completed = false;
    }
}
