//! Exhaustive grid search over an estimator's hyperparameters, scored with
//! pruned cross-validation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::PrunedCvConfig;
use crate::data::Dataset;
use crate::engine::PrunedCv;
use crate::error::{Error, Result};
use crate::estimator::Estimator;
use crate::grid::{ParamSet, ParameterGrid};
use crate::metric::Metric;
use crate::types::TrialOutcome;

/// The score one candidate configuration received.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CandidateResult {
    /// The configuration that was evaluated.
    pub params: ParamSet,
    /// Exact k-fold mean, or the extrapolated estimate if pruned.
    pub score: f64,
    /// Whether cross-validation ran every fold.
    pub outcome: TrialOutcome,
    /// How many folds were actually evaluated.
    pub folds_evaluated: usize,
}

/// Grid search that prunes hopeless candidates part-way through
/// cross-validation.
///
/// Every candidate of the grid is scored by one shared [`PrunedCv`] engine,
/// so each later candidate is compared against the best trajectory found
/// anywhere in the search so far. Candidates are ranked by their reported
/// score in the configured direction; ties keep the earlier candidate.
///
/// # Examples
///
/// ```
/// use prunedcv::prelude::*;
///
/// #[derive(Default)]
/// struct Constant(f64);
///
/// impl Estimator for Constant {
///     fn set_params(&mut self, params: &ParamSet) -> prunedcv::Result<()> {
///         self.0 = params["value"].as_f64("value")?;
///         Ok(())
///     }
///     fn fit(&mut self, _: &[Vec<f64>], _: &[f64]) -> prunedcv::Result<()> {
///         Ok(())
///     }
///     fn predict(&self, x: &[Vec<f64>]) -> prunedcv::Result<Vec<f64>> {
///         Ok(vec![self.0; x.len()])
///     }
/// }
///
/// let data = Dataset::from_pairs(&[(0.0, 1.0), (1.0, 1.0), (2.0, 1.0), (3.0, 1.0)])?;
/// let grid = ParameterGrid::new().param("value", [1.0, 5.0, 0.5]);
///
/// let config = PrunedCvConfig::new(4, 0.1);
/// let mut search = PrunedGridSearchCv::new(Constant::default(), grid, config);
/// search.fit(&data, Metric::MeanSquaredError, false, None)?;
///
/// assert_eq!(search.best_params()?["value"], ParamValue::Float(1.0));
/// assert_eq!(search.n_pruned(), 2);
/// # Ok::<(), prunedcv::Error>(())
/// ```
pub struct PrunedGridSearchCv<E> {
    estimator: E,
    grid: ParameterGrid,
    config: PrunedCvConfig,
    results: Vec<CandidateResult>,
    best_index: Option<usize>,
}

impl<E: Estimator> PrunedGridSearchCv<E> {
    /// Creates a search over `grid` for `estimator`.
    #[must_use]
    pub fn new(estimator: E, grid: ParameterGrid, config: PrunedCvConfig) -> Self {
        Self {
            estimator,
            grid,
            config,
            results: Vec::new(),
            best_index: None,
        }
    }

    /// Scores every configuration of the grid and records the best one.
    ///
    /// Results of a previous `fit` are discarded; the best trajectory starts
    /// empty for every call.
    ///
    /// # Errors
    ///
    /// Returns configuration errors from [`PrunedCvConfig::validate`],
    /// [`Error::EmptyChoices`] for a parameter without candidates, and
    /// any error raised while configuring, fitting or scoring a candidate.
    /// An error aborts the whole search.
    pub fn fit(
        &mut self,
        data: &Dataset,
        metric: Metric,
        shuffle: bool,
        seed: Option<u64>,
    ) -> Result<()> {
        let engine = PrunedCv::from_config(self.config.clone())?;
        self.fit_with_engine(engine, data, metric, shuffle, seed)
    }

    /// Like [`fit`](Self::fit) but scores candidates with a caller-built
    /// engine, e.g. one with a custom pruner. The engine's configuration
    /// replaces the search's. An engine that already holds a best
    /// trajectory prunes the first candidates against it.
    ///
    /// # Errors
    ///
    /// See [`fit`](Self::fit).
    pub fn fit_with_engine(
        &mut self,
        mut engine: PrunedCv,
        data: &Dataset,
        metric: Metric,
        shuffle: bool,
        seed: Option<u64>,
    ) -> Result<()> {
        self.grid.validate()?;
        self.config = engine.config().clone();
        self.results.clear();
        self.best_index = None;
        let direction = self.config.direction;

        for params in self.grid.iter() {
            self.estimator.set_params(&params)?;
            let report = engine.cross_validate(&mut self.estimator, data, metric, shuffle, seed)?;
            trace_info!(
                candidate = self.results.len(),
                score = report.score,
                folds = report.folds_evaluated,
                "candidate evaluated"
            );

            let improves = self
                .best_index
                .is_none_or(|i| direction.is_better(report.score, self.results[i].score));
            if improves {
                self.best_index = Some(self.results.len());
            }
            self.results.push(CandidateResult {
                params,
                score: report.score,
                outcome: report.outcome,
                folds_evaluated: report.folds_evaluated,
            });
        }
        Ok(())
    }

    /// The best configuration found by the last [`fit`](Self::fit).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCompletedTrials`] before a successful `fit`.
    pub fn best_params(&self) -> Result<&ParamSet> {
        self.best_result().map(|r| &r.params)
    }

    /// The reported score of the best configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCompletedTrials`] before a successful `fit`.
    pub fn best_score(&self) -> Result<f64> {
        self.best_result().map(|r| r.score)
    }

    /// The full record of the best configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCompletedTrials`] before a successful `fit`.
    pub fn best_result(&self) -> Result<&CandidateResult> {
        self.best_index
            .map(|i| &self.results[i])
            .ok_or(Error::NoCompletedTrials)
    }

    /// One entry per evaluated configuration, in grid order.
    #[must_use]
    pub fn results(&self) -> &[CandidateResult] {
        &self.results
    }

    /// Number of candidates whose cross-validation was cut short.
    #[must_use]
    pub fn n_pruned(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome == TrialOutcome::Pruned)
            .count()
    }

    /// Total folds evaluated across all candidates.
    #[must_use]
    pub fn folds_evaluated(&self) -> usize {
        self.results.iter().map(|r| r.folds_evaluated).sum()
    }

    /// The search configuration.
    #[must_use]
    pub fn config(&self) -> &PrunedCvConfig {
        &self.config
    }

    /// The estimator, configured with the last evaluated candidate.
    #[must_use]
    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    /// Consumes the search and returns the estimator.
    #[must_use]
    pub fn into_estimator(self) -> E {
        self.estimator
    }
}
