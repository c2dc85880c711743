//! Parameter values and exhaustive parameter grids.

use core::fmt;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One candidate value of a hyperparameter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParamValue {
    /// A floating-point value.
    Float(f64),
    /// An integer value.
    Int(i64),
    /// A boolean flag.
    Bool(bool),
    /// A named choice, e.g. a kernel or solver name.
    Categorical(String),
}

impl ParamValue {
    /// Reads the value as a float. Integers are widened.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] naming `name` for other variants.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self, name: &str) -> Result<f64> {
        match self {
            ParamValue::Float(v) => Ok(*v),
            ParamValue::Int(v) => Ok(*v as f64),
            other => Err(mismatch(name, "a number", other)),
        }
    }

    /// Reads the value as an integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] naming `name` for other variants.
    pub fn as_i64(&self, name: &str) -> Result<i64> {
        match self {
            ParamValue::Int(v) => Ok(*v),
            other => Err(mismatch(name, "an integer", other)),
        }
    }

    /// Reads the value as a boolean.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] naming `name` for other variants.
    pub fn as_bool(&self, name: &str) -> Result<bool> {
        match self {
            ParamValue::Bool(v) => Ok(*v),
            other => Err(mismatch(name, "a boolean", other)),
        }
    }

    /// Reads the value as a categorical choice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] naming `name` for other variants.
    pub fn as_str(&self, name: &str) -> Result<&str> {
        match self {
            ParamValue::Categorical(v) => Ok(v),
            other => Err(mismatch(name, "a categorical choice", other)),
        }
    }
}

fn mismatch(name: &str, expected: &str, got: &ParamValue) -> Error {
    Error::InvalidParameter {
        name: name.to_owned(),
        reason: format!("expected {expected}, got {got}"),
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Float(v) => write!(f, "{v}"),
            ParamValue::Int(v) => write!(f, "{v}"),
            ParamValue::Bool(v) => write!(f, "{v}"),
            ParamValue::Categorical(v) => write!(f, "{v:?}"),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(i64::from(v))
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Categorical(v.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Categorical(v)
    }
}

/// One concrete configuration: parameter name to value, in name order.
pub type ParamSet = BTreeMap<String, ParamValue>;

/// The Cartesian product of candidate values, optionally the union of
/// several independent sub-grids.
///
/// Within a sub-grid, configurations are enumerated with parameter names in
/// sorted order and the last name varying fastest. Sub-grids are enumerated
/// in the order they were added.
///
/// # Examples
///
/// ```
/// use prunedcv::ParameterGrid;
///
/// let grid = ParameterGrid::new()
///     .param("alpha", [0.1, 1.0])
///     .param("fit_intercept", [true, false]);
/// assert_eq!(grid.len(), 4);
///
/// let first = grid.iter().next().unwrap();
/// assert_eq!(first["alpha"].as_f64("alpha")?, 0.1);
/// assert!(first["fit_intercept"].as_bool("fit_intercept")?);
/// # Ok::<(), prunedcv::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterGrid {
    grids: Vec<BTreeMap<String, Vec<ParamValue>>>,
}

impl ParameterGrid {
    /// Creates a grid with a single, still empty, sub-grid.
    ///
    /// An empty sub-grid yields exactly one configuration with no parameters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            grids: vec![BTreeMap::new()],
        }
    }

    /// Adds (or replaces) a parameter's candidate values in the last sub-grid.
    #[must_use]
    pub fn param<I, V>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ParamValue>,
    {
        if let Some(grid) = self.grids.last_mut() {
            grid.insert(name.into(), values.into_iter().map(Into::into).collect());
        }
        self
    }

    /// Appends the sub-grids of `other` after this grid's.
    ///
    /// ```
    /// use prunedcv::ParameterGrid;
    ///
    /// let grid = ParameterGrid::new()
    ///     .param("kernel", ["linear"])
    ///     .union(ParameterGrid::new().param("kernel", ["rbf"]).param("gamma", [0.1, 1.0]));
    /// assert_eq!(grid.len(), 3);
    /// ```
    #[must_use]
    pub fn union(mut self, other: ParameterGrid) -> Self {
        self.grids.extend(other.grids);
        self
    }

    /// Checks that every parameter has at least one candidate value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyChoices`] naming the first empty parameter.
    pub fn validate(&self) -> Result<()> {
        for grid in &self.grids {
            if let Some((name, _)) = grid.iter().find(|(_, values)| values.is_empty()) {
                return Err(Error::EmptyChoices(name.clone()));
            }
        }
        Ok(())
    }

    /// Number of configurations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.grids.iter().map(sub_grid_len).sum()
    }

    /// Returns `true` if the grid yields no configuration.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The configuration at position `index` in enumeration order.
    #[must_use]
    pub fn get(&self, mut index: usize) -> Option<ParamSet> {
        for grid in &self.grids {
            let len = sub_grid_len(grid);
            if index < len {
                return Some(decode(grid, index));
            }
            index -= len;
        }
        None
    }

    /// Iterates over every configuration in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = ParamSet> + '_ {
        (0..self.len()).filter_map(|i| self.get(i))
    }
}

impl Default for ParameterGrid {
    fn default() -> Self {
        Self::new()
    }
}

fn sub_grid_len(grid: &BTreeMap<String, Vec<ParamValue>>) -> usize {
    grid.values().map(Vec::len).product()
}

/// Mixed-radix decode of `index`, last key least significant.
fn decode(grid: &BTreeMap<String, Vec<ParamValue>>, mut index: usize) -> ParamSet {
    let mut set = ParamSet::new();
    for (name, values) in grid.iter().rev() {
        set.insert(name.clone(), values[index % values.len()].clone());
        index /= values.len();
    }
    set
}
