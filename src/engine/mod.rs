//! The pruned cross-validation engine.

mod builder;

pub use builder::PrunedCvBuilder;

use crate::config::{self, Policy, PrunedCvConfig};
use crate::data::Dataset;
use crate::error::{Error, Result};
use crate::estimator::Estimator;
use crate::kfold::KFold;
use crate::metric::Metric;
use crate::pruner::{ProbabilisticPruner, PruneContext, Pruner, TolerancePruner};
use crate::score;
use crate::trajectory::{BestTrajectory, TrialState};
use crate::types::TrialOutcome;

/// What the engine decided after recording one fold error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FoldDecision {
    /// Request the next fold.
    Continue,
    /// Stop requesting folds; `score` is the extrapolated estimate.
    Pruned {
        /// The reported score for the trial.
        score: f64,
    },
    /// The last fold was recorded; `score` is the exact k-fold mean.
    Complete {
        /// The reported score for the trial.
        score: f64,
    },
}

/// The result of one trial.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialReport {
    /// The reported score, in the caller's own lower/higher-is-better sense.
    pub score: f64,
    /// Whether the trial ran every fold or was pruned.
    pub outcome: TrialOutcome,
    /// How many folds were actually evaluated.
    pub folds_evaluated: usize,
}

impl TrialReport {
    /// Returns `true` if the trial was stopped early.
    #[must_use]
    pub fn is_pruned(&self) -> bool {
        self.outcome == TrialOutcome::Pruned
    }
}

/// Pruned k-fold cross-validation.
///
/// One engine is meant to score every candidate of a search. It keeps the
/// fold-error trajectory of the best completed trial, and later trials are
/// compared against it fold by fold. A trial that is clearly worse is
/// stopped early and receives an extrapolated score on the same scale as a
/// fully cross-validated one, so candidates still rank normally.
///
/// The first trial always runs every fold: it populates the best trajectory.
///
/// # Examples
///
/// ```
/// use prunedcv::{PrunedCv, TrialOutcome};
///
/// let mut cv = PrunedCv::new(5, 0.1)?;
///
/// // First trial: always complete.
/// let first = cv.run_trial(|_fold| Ok(1.0))?;
/// assert_eq!(first.outcome, TrialOutcome::Complete);
///
/// // Second trial: twice as bad, pruned after the second fold.
/// let second = cv.run_trial(|_fold| Ok(2.0))?;
/// assert_eq!(second.outcome, TrialOutcome::Pruned);
/// assert_eq!(second.folds_evaluated, 2);
/// assert!((second.score - 2.0).abs() < 1e-12);
/// # Ok::<(), prunedcv::Error>(())
/// ```
pub struct PrunedCv {
    config: PrunedCvConfig,
    pruner: Box<dyn Pruner>,
    best: BestTrajectory,
    current: TrialState,
    /// Set once the pruner stops the running trial.
    pruned: bool,
    n_trials: usize,
    n_pruned: usize,
}

impl core::fmt::Debug for PrunedCv {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PrunedCv")
            .field("config", &self.config)
            .field("best", &self.best)
            .field("current", &self.current)
            .field("pruned", &self.pruned)
            .field("n_trials", &self.n_trials)
            .field("n_pruned", &self.n_pruned)
            .finish_non_exhaustive()
    }
}

impl PrunedCv {
    /// Creates a minimizing engine with the tolerance policy that starts
    /// pruning at the second fold.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFolds`] if `folds < 2` and
    /// [`Error::InvalidTolerance`] if `tolerance` is negative or not finite.
    pub fn new(folds: usize, tolerance: f64) -> Result<Self> {
        Self::from_config(PrunedCvConfig::new(folds, tolerance))
    }

    /// Creates an engine from a full configuration, using the built-in
    /// pruner for `config.policy`.
    ///
    /// # Errors
    ///
    /// Returns the error from [`PrunedCvConfig::validate`].
    pub fn from_config(config: PrunedCvConfig) -> Result<Self> {
        let pruner = builtin_pruner(config.policy);
        Self::with_pruner(config, pruner)
    }

    /// Returns a [`PrunedCvBuilder`] for the given fold count and tolerance.
    ///
    /// ```
    /// use prunedcv::PrunedCv;
    ///
    /// let cv = PrunedCv::builder(10, 0.05)
    ///     .maximize()
    ///     .splits_to_start_pruning(3)
    ///     .probabilistic(true)
    ///     .seed(42)
    ///     .build()?;
    /// assert_eq!(cv.config().folds, 10);
    /// # Ok::<(), prunedcv::Error>(())
    /// ```
    #[must_use]
    pub fn builder(folds: usize, tolerance: f64) -> PrunedCvBuilder {
        PrunedCvBuilder::new(folds, tolerance)
    }

    pub(crate) fn with_pruner(config: PrunedCvConfig, pruner: Box<dyn Pruner>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            current: TrialState::with_capacity(config.folds),
            config,
            pruner,
            best: BestTrajectory::new(),
            pruned: false,
            n_trials: 0,
            n_pruned: 0,
        })
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &PrunedCvConfig {
        &self.config
    }

    /// Changes the tolerance used by subsequent pruning decisions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTolerance`] if `tolerance` is negative or not
    /// finite. The previous tolerance is kept in that case.
    pub fn set_tolerance(&mut self, tolerance: f64) -> Result<()> {
        config::validate_tolerance(tolerance)?;
        self.config.tolerance = tolerance;
        Ok(())
    }

    /// The best trajectory seen so far.
    #[must_use]
    pub fn best_trajectory(&self) -> &BestTrajectory {
        &self.best
    }

    /// The running trial's recorded fold errors.
    #[must_use]
    pub fn trial_state(&self) -> &TrialState {
        &self.current
    }

    /// Returns `true` once a best trajectory exists and pruning is possible.
    #[must_use]
    pub fn is_warm(&self) -> bool {
        self.best.is_completed()
    }

    /// Returns `true` if the last recorded fold pruned its trial.
    #[must_use]
    pub fn is_pruned(&self) -> bool {
        self.pruned
    }

    /// Number of trials that produced a score.
    #[must_use]
    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    /// Number of trials that were pruned.
    #[must_use]
    pub fn n_pruned(&self) -> usize {
        self.n_pruned
    }

    /// Forgets the best trajectory and any trial in progress.
    pub fn reset(&mut self) {
        self.best.reset();
        self.current.clear();
        self.pruned = false;
        self.n_trials = 0;
        self.n_pruned = 0;
    }

    /// Records the next fold error of the running trial and decides whether
    /// the trial continues.
    ///
    /// The first value after a finished trial starts a new one. After
    /// [`FoldDecision::Pruned`] or [`FoldDecision::Complete`] the caller must
    /// stop producing folds for that trial.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteFoldError`] for NaN or infinite values. The
    /// running trial is discarded.
    pub fn add_split_value(&mut self, value: f64) -> Result<FoldDecision> {
        if self.current.is_empty() {
            self.pruned = false;
        }
        let split = self.current.len() + 1;
        if !value.is_finite() {
            self.abort_trial();
            return Err(Error::NonFiniteFoldError { fold: split, value });
        }

        self.current.push(value);
        let populating = !self.best.is_completed();

        if populating {
            self.best.populate(value, self.config.folds);
        } else if self.config.is_prunable_split(split) && self.decide_prune(split) {
            let score = score::extrapolated_score(
                self.current.mean(),
                score::mean(self.best.prefix(split)),
                self.best.mean(),
            );
            self.current.clear();
            self.pruned = true;
            self.n_trials += 1;
            self.n_pruned += 1;
            trace_info!(fold = split, score, "trial pruned");
            return Ok(FoldDecision::Pruned { score });
        }

        if split == self.config.folds {
            return Ok(FoldDecision::Complete {
                score: self.finish_trial(populating),
            });
        }
        Ok(FoldDecision::Continue)
    }

    /// Runs one trial, pulling fold errors from `fold_error` in fold order.
    ///
    /// `fold_error` receives the 1-based fold index of the fold to evaluate.
    /// It is only ever called for folds that still have to run: once the
    /// decider orders a stop the trial returns immediately, so a call always
    /// means "pruning has not been ordered" and the source never has to check
    /// for it. Folds are requested strictly in order `1..=folds`, at most once
    /// each per trial.
    ///
    /// # Errors
    ///
    /// Propagates any error from `fold_error` and rejects non-finite values.
    /// Either way the trial is discarded and the best trajectory is left as
    /// it was before the trial started.
    pub fn run_trial<F>(&mut self, mut fold_error: F) -> Result<TrialReport>
    where
        F: FnMut(usize) -> Result<f64>,
    {
        self.abort_trial();
        for fold in 1..=self.config.folds {
            let value = fold_error(fold).inspect_err(|_| self.abort_trial())?;
            match self.add_split_value(value)? {
                FoldDecision::Continue => {}
                FoldDecision::Pruned { score } => {
                    return Ok(TrialReport {
                        score,
                        outcome: TrialOutcome::Pruned,
                        folds_evaluated: fold,
                    });
                }
                FoldDecision::Complete { score } => {
                    return Ok(TrialReport {
                        score,
                        outcome: TrialOutcome::Complete,
                        folds_evaluated: fold,
                    });
                }
            }
        }
        Err(Error::Internal("trial ended without completing its last fold"))
    }

    /// Cross-validates `estimator` on `data`, pruning against the best
    /// trajectory, and returns the reported score.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotEnoughSamples`] if `data` has fewer rows than
    /// folds, and propagates estimator and metric errors.
    pub fn cross_val_score<E>(
        &mut self,
        estimator: &mut E,
        data: &Dataset,
        metric: Metric,
        shuffle: bool,
        seed: Option<u64>,
    ) -> Result<f64>
    where
        E: Estimator + ?Sized,
    {
        self.cross_validate(estimator, data, metric, shuffle, seed)
            .map(|report| report.score)
    }

    /// Like [`cross_val_score`](Self::cross_val_score) but returns the full
    /// [`TrialReport`].
    ///
    /// # Errors
    ///
    /// See [`cross_val_score`](Self::cross_val_score).
    pub fn cross_validate<E>(
        &mut self,
        estimator: &mut E,
        data: &Dataset,
        metric: Metric,
        shuffle: bool,
        seed: Option<u64>,
    ) -> Result<TrialReport>
    where
        E: Estimator + ?Sized,
    {
        let kfold = KFold::new(self.config.folds)?.shuffle(shuffle).seed(seed);
        let mut splits = kfold.split(data.len())?;
        self.run_trial(|_fold| {
            let (train_idx, test_idx) = splits.next().ok_or(Error::NotEnoughSamples {
                n_samples: data.len(),
                n_splits: kfold.n_splits(),
            })?;
            let train = data.select(&train_idx);
            let test = data.select(&test_idx);
            estimator.fit(train.features(), train.targets())?;
            let predictions = estimator.predict(test.features())?;
            metric.evaluate(test.targets(), &predictions)
        })
    }

    fn decide_prune(&self, split: usize) -> bool {
        let ctx = PruneContext {
            direction: self.config.direction,
            tolerance: self.config.tolerance,
            split,
            best_prefix: self.best.prefix(split),
            current: self.current.values(),
        };
        self.pruner.should_prune(&ctx)
    }

    fn finish_trial(&mut self, populating: bool) -> f64 {
        let score = score::completed_score(self.current.values(), self.config.folds);
        let values = self.current.take();
        if !populating && self.best.replace_if_better(values, self.config.direction) {
            trace_debug!(score, "best trajectory replaced");
        }
        self.n_trials += 1;
        trace_info!(score, "trial completed");
        score
    }

    /// Drops the running trial, including a partially populated first trial.
    fn abort_trial(&mut self) {
        self.current.clear();
        self.best.discard_provisional();
        self.pruned = false;
    }
}

fn builtin_pruner(policy: Policy) -> Box<dyn Pruner> {
    match policy {
        Policy::Tolerance => Box::new(TolerancePruner),
        Policy::Probabilistic { seed } => Box::new(ProbabilisticPruner::from_seed(seed)),
    }
}
