//! The model interface the engine trains and evaluates on each fold.

use crate::error::Result;
use crate::grid::ParamSet;

/// A trainable model.
///
/// The engine never inspects an estimator: it only configures it, fits it
/// on a fold's training rows, and predicts the fold's test rows.
///
/// # Examples
///
/// ```
/// use prunedcv::{Estimator, ParamSet, Result};
///
/// /// Predicts the mean training target plus a configurable bias.
/// #[derive(Default)]
/// struct MeanModel {
///     bias: f64,
///     mean: f64,
/// }
///
/// impl Estimator for MeanModel {
///     fn set_params(&mut self, params: &ParamSet) -> Result<()> {
///         if let Some(bias) = params.get("bias") {
///             self.bias = bias.as_f64("bias")?;
///         }
///         Ok(())
///     }
///
///     fn fit(&mut self, _features: &[Vec<f64>], targets: &[f64]) -> Result<()> {
///         self.mean = targets.iter().sum::<f64>() / targets.len() as f64;
///         Ok(())
///     }
///
///     fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<f64>> {
///         Ok(vec![self.mean + self.bias; features.len()])
///     }
/// }
/// ```
pub trait Estimator {
    /// Apply one candidate configuration.
    ///
    /// # Errors
    ///
    /// Implementations should return
    /// [`Error::InvalidParameter`](crate::Error::InvalidParameter) for names
    /// or values they do not accept.
    fn set_params(&mut self, params: &ParamSet) -> Result<()>;

    /// Train on `features` / `targets`.
    ///
    /// # Errors
    ///
    /// Any training failure; it aborts the current trial.
    fn fit(&mut self, features: &[Vec<f64>], targets: &[f64]) -> Result<()>;

    /// Predict one value per row of `features`.
    ///
    /// # Errors
    ///
    /// Any inference failure; it aborts the current trial.
    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<f64>>;
}

impl<E: Estimator + ?Sized> Estimator for Box<E> {
    fn set_params(&mut self, params: &ParamSet) -> Result<()> {
        (**self).set_params(params)
    }

    fn fit(&mut self, features: &[Vec<f64>], targets: &[f64]) -> Result<()> {
        (**self).fit(features, targets)
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<f64>> {
        (**self).predict(features)
    }
}
