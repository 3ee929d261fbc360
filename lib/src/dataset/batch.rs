use super::{Dataset, DatasetBatchIter};
use crate::backend::Backend;
use crate::error::DatasetError;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Visiting order over `0..n` split into batches of `batch_size`.
///
/// The permutation is drawn once, at construction, from an explicitly seeded `StdRng`,
/// so two plans built with the same `(n, batch_size, shuffle, seed)` are identical and
/// nothing depends on process-wide random state. Every call to [`BatchPlan::epoch`]
/// replays the same order.
///
/// The last batch holds `n % batch_size` examples when `n` is not a multiple of
/// `batch_size`.
///
/// # Example
/// ```
/// use logreg_rs::dataset::BatchPlan;
///
/// let plan = BatchPlan::new(10, 4, true, Some(71)).unwrap();
/// assert_eq!(plan.n_batches(), 3);
///
/// let mut seen = plan.order().to_vec();
/// seen.sort_unstable();
/// assert_eq!(seen, (0..10).collect::<Vec<_>>());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPlan {
    order: Vec<usize>,
    batch_size: usize,
}

impl BatchPlan {
    /// Builds a plan over `n` examples.
    ///
    /// With `shuffle`, the order is a permutation drawn from `StdRng::seed_from_u64(seed)`,
    /// or from an OS-seeded generator when `seed` is `None`. Without it the order is
    /// `0..n` and `seed` is ignored.
    ///
    /// # Errors
    /// [`DatasetError::Empty`] if `n == 0`, [`DatasetError::InvalidBatchSize`] if
    /// `batch_size == 0`.
    pub fn new(
        n: usize,
        batch_size: usize,
        shuffle: bool,
        seed: Option<u64>,
    ) -> Result<Self, DatasetError> {
        if n == 0 {
            return Err(DatasetError::Empty);
        }
        if batch_size == 0 {
            return Err(DatasetError::InvalidBatchSize);
        }

        let mut order: Vec<usize> = (0..n).collect();
        if shuffle {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            order.shuffle(&mut rng);
        }
        debug!(
            "batch plan: n={} batch_size={} shuffle={} seed={:?}",
            n, batch_size, shuffle, seed
        );

        Ok(Self { order, batch_size })
    }

    /// Plan visiting `0..n` in order.
    pub fn sequential(n: usize, batch_size: usize) -> Result<Self, DatasetError> {
        Self::new(n, batch_size, false, None)
    }

    /// Number of examples covered.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always `false`: empty plans are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// `ceil(n / batch_size)`.
    pub fn n_batches(&self) -> usize {
        self.order.len().div_ceil(self.batch_size)
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Fresh single-pass iterator over this plan's batches, gathered from `dataset`.
    ///
    /// The plan should have been built for `dataset.len()` examples; indices past the end
    /// of the dataset surface as the dataset's own error.
    pub fn epoch<'a, B: Backend, D: Dataset + ?Sized>(
        &'a self,
        dataset: &'a D,
    ) -> DatasetBatchIter<'a, B, D> {
        DatasetBatchIter::new(dataset, &self.order, self.batch_size)
    }
}
