use crate::backend::{Backend, Tensor1D, Tensor2D};
use crate::dataset::Dataset;
use crate::error::DatasetError;

/// Validated binary-classification data held in memory.
///
/// Features are stored row-major in a single buffer. Construction checks:
/// - at least one example;
/// - as many labels as rows;
/// - every row has the same, non-zero, number of features;
/// - every feature is finite;
/// - every label is exactly `0.0` or `1.0`.
///
/// The data is never modified afterwards; shuffling is done on an index order
/// ([`crate::dataset::BatchPlan`]), not on the storage.
///
/// # Example
/// ```
/// use logreg_rs::dataset::{Dataset, InMemoryDataset};
///
/// let ds = InMemoryDataset::new(
///     vec![vec![-2.0, -1.0], vec![-1.0, -1.0], vec![1.0, 1.0], vec![2.0, 1.0]],
///     vec![0.0, 0.0, 1.0, 1.0],
/// )
/// .unwrap();
/// assert_eq!(ds.len(), 4);
/// assert_eq!(ds.n_features(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryDataset {
    features: Vec<f64>,
    labels: Vec<f32>,
    n_features: usize,
}

impl InMemoryDataset {
    /// Builds a dataset from `f32` feature rows and labels. Features are widened to
    /// `f64` on the way in.
    pub fn new(x: Vec<Vec<f32>>, y: Vec<f32>) -> Result<Self, DatasetError> {
        let x = x
            .into_iter()
            .map(|r| r.into_iter().map(f64::from).collect())
            .collect();
        Self::from_f64_rows(x, y)
    }

    /// Builds a dataset from `f64` feature rows, stored without narrowing.
    pub fn from_f64_rows(x: Vec<Vec<f64>>, y: Vec<f32>) -> Result<Self, DatasetError> {
        let n_features = x.first().map_or(0, Vec::len);
        if let Some((row, r)) = x.iter().enumerate().find(|(_, r)| r.len() != n_features) {
            return Err(DatasetError::RaggedRows {
                row,
                expected: n_features,
                got: r.len(),
            });
        }
        let features = x.into_iter().flatten().collect();
        Self::from_flat_f64(features, n_features, y)
    }

    /// Builds a dataset from a row-major feature buffer of `labels.len() * n_features`
    /// values.
    pub fn from_flat(
        features: Vec<f32>,
        n_features: usize,
        labels: Vec<f32>,
    ) -> Result<Self, DatasetError> {
        Self::from_flat_f64(
            features.into_iter().map(f64::from).collect(),
            n_features,
            labels,
        )
    }

    /// [`InMemoryDataset::from_flat`] for `f64` buffers.
    pub fn from_flat_f64(
        features: Vec<f64>,
        n_features: usize,
        labels: Vec<f32>,
    ) -> Result<Self, DatasetError> {
        if labels.is_empty() && features.is_empty() {
            return Err(DatasetError::Empty);
        }
        if n_features == 0 {
            return Err(DatasetError::ZeroFeatures);
        }
        let rows = features.len() / n_features;
        if features.len() % n_features != 0 {
            return Err(DatasetError::RaggedRows {
                row: rows,
                expected: n_features,
                got: features.len() % n_features,
            });
        }
        if rows != labels.len() {
            return Err(DatasetError::LengthMismatch {
                rows,
                labels: labels.len(),
            });
        }
        if let Some(pos) = features.iter().position(|v| !v.is_finite()) {
            return Err(DatasetError::NonFiniteFeature {
                row: pos / n_features,
                col: pos % n_features,
            });
        }
        if let Some((index, &value)) = labels
            .iter()
            .enumerate()
            .find(|&(_, &l)| l != 0.0 && l != 1.0)
        {
            return Err(DatasetError::InvalidLabel { index, value });
        }

        Ok(Self {
            features,
            labels,
            n_features,
        })
    }

    /// Features of row `i`.
    ///
    /// # Panics
    /// If `i >= self.len()`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.features[i * self.n_features..(i + 1) * self.n_features]
    }

    pub fn labels(&self) -> &[f32] {
        &self.labels
    }

    /// The whole dataset as tensors, rows in storage order.
    pub fn to_tensors<B: Backend>(&self) -> (Tensor2D<B>, Tensor1D<B>) {
        (
            Tensor2D::from_f64(self.features.clone(), self.labels.len(), self.n_features),
            Tensor1D::new(self.labels.clone()),
        )
    }
}

impl Dataset for InMemoryDataset {
    type Error = DatasetError;

    fn len(&self) -> usize {
        self.labels.len()
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn get_batch<B: Backend>(
        &self,
        indices: &[usize],
    ) -> Result<(Tensor2D<B>, Tensor1D<B>), Self::Error> {
        let len = self.len();
        if let Some(&index) = indices.iter().find(|&&i| i >= len) {
            return Err(DatasetError::IndexOutOfBounds { index, len });
        }

        let mut x = Vec::with_capacity(indices.len() * self.n_features);
        let mut y = Vec::with_capacity(indices.len());
        for &i in indices {
            x.extend_from_slice(self.row(i));
            y.push(self.labels[i]);
        }

        Ok((
            Tensor2D::from_f64(x, indices.len(), self.n_features),
            Tensor1D::new(y),
        ))
    }
}
