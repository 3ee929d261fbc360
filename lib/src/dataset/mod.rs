//! Dataset abstractions and mini-batch iteration.
//!
//! # Core Concepts
//!
//! - **Dataset**: N examples `(x, y)` with `x` of fixed dimension D and `y ∈ {0, 1}`,
//!   addressable by row index. See [`Dataset`] and [`InMemoryDataset`].
//! - **BatchPlan**: an order over `0..N` (identity or a seeded shuffle) cut into
//!   chunks of the batch size. Built once per `fit`; every epoch walks the same order.
//! - **DatasetBatchIter**: a one-shot iterator over the plan's chunks for a single
//!   epoch. A new one is created by [`BatchPlan::epoch`] for each pass.
//!
//! # Example
//!
//! ```rust
//! use logreg_rs::backend::CpuBackend;
//! use logreg_rs::dataset::{BatchPlan, InMemoryDataset};
//!
//! let x = vec![vec![1.0], vec![2.0], vec![3.0]];
//! let y = vec![0.0, 1.0, 1.0];
//! let dataset = InMemoryDataset::new(x, y).unwrap();
//!
//! let plan = BatchPlan::new(3, 2, true, Some(7)).unwrap();
//! assert_eq!(plan.n_batches(), 2);
//!
//! for batch in plan.epoch::<CpuBackend, _>(&dataset) {
//!     let batch = batch.unwrap();
//!     assert_eq!(batch.x.rows(), batch.indices.len());
//! }
//! ```

use crate::backend::{Backend, Tensor1D, Tensor2D};
use std::fmt::Debug;
use std::marker::PhantomData;

mod batch;
pub mod memory;

pub use self::batch::BatchPlan;
pub use self::memory::InMemoryDataset;

/// Random-access source of labeled examples.
///
/// # Example Implementation
///
/// ```rust
/// use logreg_rs::backend::{Backend, Tensor1D, Tensor2D};
/// use logreg_rs::dataset::Dataset;
///
/// /// `n` points on a line, labeled by sign.
/// struct Line {
///     n: usize,
/// }
///
/// impl Dataset for Line {
///     type Error = String;
///
///     fn len(&self) -> usize {
///         self.n
///     }
///
///     fn n_features(&self) -> usize {
///         1
///     }
///
///     fn get_batch<B: Backend>(
///         &self,
///         indices: &[usize],
///     ) -> Result<(Tensor2D<B>, Tensor1D<B>), Self::Error> {
///         let xs: Vec<f32> = indices.iter().map(|&i| i as f32 - self.n as f32 / 2.0).collect();
///         let ys = xs.iter().map(|&v| if v > 0.0 { 1.0 } else { 0.0 }).collect();
///         Ok((Tensor2D::new(xs, indices.len(), 1), Tensor1D::new(ys)))
///     }
/// }
///
/// let ds = Line { n: 4 };
/// let (x, y) = ds.get_batch::<logreg_rs::backend::CpuBackend>(&[0, 3]).unwrap();
/// assert_eq!(x.shape(), (2, 1));
/// assert_eq!(y.to_vec(), vec![0.0, 1.0]);
/// ```
pub trait Dataset {
    /// Error type returned when accessing data.
    type Error: Debug + 'static;

    /// Number of examples.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dimension D of every feature vector.
    fn n_features(&self) -> usize;

    /// Gathers the rows at `indices`, in that order, as a feature matrix
    /// `(indices.len(), D)` and a label vector `(indices.len(),)`.
    fn get_batch<B: Backend>(
        &self,
        indices: &[usize],
    ) -> Result<(Tensor2D<B>, Tensor1D<B>), Self::Error>;
}

/// One mini-batch: the dataset rows it was gathered from and their tensors.
pub struct Batch<'a, B: Backend> {
    pub indices: &'a [usize],
    pub x: Tensor2D<B>,
    pub y: Tensor1D<B>,
}

impl<B: Backend> Batch<'_, B> {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Single-pass iterator over the batches of one epoch.
///
/// Created by [`BatchPlan::epoch`]. Data is gathered lazily in `next()`; errors from
/// [`Dataset::get_batch`] are yielded as `Some(Err(_))`. Once exhausted it stays
/// exhausted; the next epoch gets a new iterator.
pub struct DatasetBatchIter<'a, B: Backend, D: ?Sized> {
    dataset: &'a D,
    chunks: std::slice::Chunks<'a, usize>,
    _backend: PhantomData<B>,
}

impl<'a, B: Backend, D: Dataset + ?Sized> DatasetBatchIter<'a, B, D> {
    pub(crate) fn new(dataset: &'a D, order: &'a [usize], batch_size: usize) -> Self {
        Self {
            dataset,
            chunks: order.chunks(batch_size),
            _backend: PhantomData,
        }
    }
}

impl<'a, B: Backend, D: Dataset + ?Sized> Iterator for DatasetBatchIter<'a, B, D> {
    type Item = Result<Batch<'a, B>, D::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let indices = self.chunks.next()?;
        Some(
            self.dataset
                .get_batch::<B>(indices)
                .map(|(x, y)| Batch { indices, x, y }),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl<B: Backend, D: Dataset + ?Sized> ExactSizeIterator for DatasetBatchIter<'_, B, D> {}
