#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Pruned k-fold cross-validation for hyperparameter search.
//!
//! Grid search spends most of its time cross-validating candidates that
//! were never going to win. This crate scores every candidate with k-fold
//! cross-validation but compares each run, fold by fold, against the best
//! run seen so far in the search. Runs that are clearly worse stop early
//! and receive an extrapolated score on the same scale as a full k-fold
//! mean, so ranking and selection work unchanged.
//!
//! # Getting Started
//!
//! Feed fold errors directly:
//!
//! ```
//! use prunedcv::prelude::*;
//!
//! let mut cv = PrunedCv::new(5, 0.1)?;
//!
//! let baseline = cv.run_trial(|_fold| Ok(1.0))?;
//! assert_eq!(baseline.folds_evaluated, 5);
//!
//! let worse = cv.run_trial(|_fold| Ok(2.0))?;
//! assert!(worse.is_pruned());
//! assert_eq!(worse.folds_evaluated, 2);
//! # Ok::<(), prunedcv::Error>(())
//! ```
//!
//! Or let [`PrunedGridSearchCv`] drive an [`Estimator`] over a
//! [`ParameterGrid`].
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`PrunedCv`] | Run one trial at a time; keep the best trajectory across trials. |
//! | [`PrunedGridSearchCv`] | Score every grid candidate with one shared engine and keep the best. |
//! | [`Pruner`](pruner::Pruner) | Decide, after an eligible fold, whether to stop the running trial. |
//! | [`BestTrajectory`] | Fold errors of the best completed trial. |
//! | [`Direction`] | Whether lower or higher fold errors are better. |
//!
//! # Pruning policies
//!
//! | Pruner | Decision | Deterministic |
//! |--------|----------|---------------|
//! | [`TolerancePruner`](pruner::TolerancePruner) | Current mean worse than best mean by more than `tolerance` | yes |
//! | [`ProbabilisticPruner`](pruner::ProbabilisticPruner) | `Beta(1 + wins, 1 + losses)` draw above 0.5 | with a seed |
//! | [`NopPruner`](pruner::NopPruner) | Never | yes |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on configuration, parameter values and results | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) when trials are pruned or completed | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod config;
mod data;
mod engine;
mod error;
mod estimator;
mod grid;
mod kfold;
mod metric;
pub mod pruner;
pub mod score;
mod search;
mod trajectory;
mod types;

pub use config::{Policy, PrunedCvConfig};
pub use data::Dataset;
pub use engine::{FoldDecision, PrunedCv, PrunedCvBuilder, TrialReport};
pub use error::{Error, Result};
pub use estimator::Estimator;
pub use grid::{ParamSet, ParamValue, ParameterGrid};
pub use kfold::{Folds, KFold};
pub use metric::Metric;
pub use search::{CandidateResult, PrunedGridSearchCv};
pub use trajectory::{BestTrajectory, TrialState};
pub use types::{Direction, TrialOutcome};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use prunedcv::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{Policy, PrunedCvConfig};
    pub use crate::data::Dataset;
    pub use crate::engine::{FoldDecision, PrunedCv, PrunedCvBuilder, TrialReport};
    pub use crate::error::{Error, Result};
    pub use crate::estimator::Estimator;
    pub use crate::grid::{ParamSet, ParamValue, ParameterGrid};
    pub use crate::kfold::KFold;
    pub use crate::metric::Metric;
    pub use crate::pruner::{
        NopPruner, ProbabilisticPruner, PruneContext, Pruner, TolerancePruner,
    };
    pub use crate::search::{CandidateResult, PrunedGridSearchCv};
    pub use crate::trajectory::{BestTrajectory, TrialState};
    pub use crate::types::{Direction, TrialOutcome};
}
