//! K-fold partitioning of row indices.

use crate::error::{Error, Result};

/// Splits `n_samples` rows into `n_splits` consecutive test folds.
///
/// Every row lands in exactly one test fold. The first `n_samples %
/// n_splits` folds hold one extra row. With shuffling enabled the rows are
/// permuted once before folding; a fixed seed makes the permutation, and
/// therefore every split, reproducible.
///
/// # Examples
///
/// ```
/// use prunedcv::KFold;
///
/// let folds: Vec<_> = KFold::new(3)?.split(7)?.collect();
/// assert_eq!(folds.len(), 3);
/// assert_eq!(folds[0].1, vec![0, 1, 2]);
/// assert_eq!(folds[1].1, vec![3, 4]);
/// assert_eq!(folds[2].0, vec![0, 1, 2, 3, 4]);
/// # Ok::<(), prunedcv::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KFold {
    n_splits: usize,
    shuffle: bool,
    seed: Option<u64>,
}

impl KFold {
    /// Creates an unshuffled splitter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFolds`] if `n_splits < 2`.
    pub fn new(n_splits: usize) -> Result<Self> {
        if n_splits < 2 {
            return Err(Error::InvalidFolds(n_splits));
        }
        Ok(Self {
            n_splits,
            shuffle: false,
            seed: None,
        })
    }

    /// Enable or disable shuffling of rows before folding.
    #[must_use]
    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Seed the shuffle. Ignored when shuffling is off.
    #[must_use]
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Number of folds produced by [`split`](Self::split).
    #[must_use]
    pub fn n_splits(&self) -> usize {
        self.n_splits
    }

    /// Returns a lazy iterator of `(train_indices, test_indices)` pairs.
    ///
    /// Calling `split` again restarts the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotEnoughSamples`] if `n_samples < n_splits`.
    pub fn split(&self, n_samples: usize) -> Result<Folds> {
        if n_samples < self.n_splits {
            return Err(Error::NotEnoughSamples {
                n_samples,
                n_splits: self.n_splits,
            });
        }
        let mut order: Vec<usize> = (0..n_samples).collect();
        if self.shuffle {
            let mut rng = self.seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
            rng.shuffle(&mut order);
        }
        Ok(Folds {
            order,
            n_splits: self.n_splits,
            fold: 0,
            start: 0,
        })
    }
}

/// Iterator over the folds of one [`KFold::split`] call.
#[derive(Clone, Debug)]
pub struct Folds {
    order: Vec<usize>,
    n_splits: usize,
    fold: usize,
    start: usize,
}

impl Folds {
    fn fold_size(&self, fold: usize) -> usize {
        let n = self.order.len();
        n / self.n_splits + usize::from(fold < n % self.n_splits)
    }
}

impl Iterator for Folds {
    type Item = (Vec<usize>, Vec<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.fold == self.n_splits {
            return None;
        }
        let end = self.start + self.fold_size(self.fold);
        let test = self.order[self.start..end].to_vec();

        let mut in_test = vec![false; self.order.len()];
        for &i in &test {
            in_test[i] = true;
        }
        let train = (0..self.order.len()).filter(|&i| !in_test[i]).collect();

        self.start = end;
        self.fold += 1;
        Some((train, test))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.n_splits - self.fold;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Folds {}
