use super::tensor1d::Tensor1D;
use crate::backend::Backend;
use std::marker::PhantomData;

/// Backend-typed row-major matrix: one row per example, one column per feature.
///
/// # Example
/// ```
/// use logreg_rs::backend::{CpuBackend, Tensor1D, Tensor2D};
///
/// // X = [[1, 2], [3, 4], [5, 6]]
/// let x = Tensor2D::<CpuBackend>::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2);
/// assert_eq!(x.shape(), (3, 2));
///
/// let g = Tensor1D::<CpuBackend>::new(vec![1.0, 0.0, 2.0]);
/// assert_eq!(x.tdot(&g).to_vec(), vec![11.0, 14.0]);
/// ```
#[derive(Clone)]
pub struct Tensor2D<B: Backend> {
    pub(crate) data: B::Tensor2D,
    pub(crate) backend: PhantomData<B>,
}

impl<B: Backend> Tensor2D<B> {
    /// Builds a matrix from row-major `f32` data.
    ///
    /// # Panics
    /// If `data.len() != rows * cols`.
    pub fn new(data: Vec<f32>, rows: usize, cols: usize) -> Self {
        Self {
            data: B::from_vec_2d(data, rows, cols),
            backend: PhantomData,
        }
    }

    /// Builds a matrix from row-major `f64` data without narrowing.
    ///
    /// # Panics
    /// If `data.len() != rows * cols`.
    pub fn from_f64(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        Self {
            data: B::from_f64_vec_2d(data, rows, cols),
            backend: PhantomData,
        }
    }

    /// Builds a matrix from equally sized rows.
    ///
    /// # Panics
    /// If rows have different lengths.
    pub fn from_rows(rows: &[Vec<f32>]) -> Self {
        let n_cols = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|r| r.len() == n_cols),
            "All rows must have same length"
        );
        let data = rows.iter().flat_map(|r| r.iter()).copied().collect();
        Self::new(data, rows.len(), n_cols)
    }

    /// Matrix-vector product `self · other`.
    ///
    /// # Panics
    /// If `self.cols() != other.len()`.
    pub fn dot(&self, other: &Tensor1D<B>) -> Tensor1D<B> {
        Tensor1D::from_raw(B::matvec(&self.data, &other.data))
    }

    /// Transposed product `selfᵀ · other`.
    ///
    /// # Panics
    /// If `self.rows() != other.len()`.
    pub fn tdot(&self, other: &Tensor1D<B>) -> Tensor1D<B> {
        Tensor1D::from_raw(B::matvec_transposed(&self.data, &other.data))
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        B::shape(&self.data)
    }

    pub fn rows(&self) -> usize {
        self.shape().0
    }

    pub fn cols(&self) -> usize {
        self.shape().1
    }
}
