//! Loading, scaling and splitting binary-classification data on the host side.

use csv::ReaderBuilder;
use logreg_rs::backend::{Backend, Tensor2D};
use logreg_rs::dataset::InMemoryDataset;
use logreg_rs::error::DatasetError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read data: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("label column '{0}' not found in header")]
    MissingLabelColumn(String),

    #[error("CSV needs a label column and at least one feature column")]
    TooFewColumns,

    #[error("record {record}, column '{column}': cannot parse '{value}' as a number")]
    Parse {
        record: usize,
        column: String,
        value: String,
    },

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Feature rows and 0/1 labels, kept in file order.
///
/// # Example
/// ```
/// use logreg_benchmarks::data::BinaryClassificationData;
///
/// let csv = "a,b,label\n1.0,2.0,0\n3.0,4.0,1\n";
/// let data = BinaryClassificationData::from_reader(csv.as_bytes(), None).unwrap();
/// assert_eq!(data.len(), 2);
/// assert_eq!(data.feature_names(), &["a", "b"]);
/// ```
#[derive(Debug, Clone)]
pub struct BinaryClassificationData {
    features: Vec<Vec<f32>>,
    labels: Vec<f32>,
    feature_names: Vec<String>,
}

impl BinaryClassificationData {
    pub fn new(features: Vec<Vec<f32>>, labels: Vec<f32>, feature_names: Vec<String>) -> Self {
        Self {
            features,
            labels,
            feature_names,
        }
    }

    /// Loads a headed CSV file.
    ///
    /// `label_column` names the label column; when `None` the last column is used.
    /// Every other column is a numeric feature.
    pub fn load(path: impl AsRef<Path>, label_column: Option<&str>) -> Result<Self, DataError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), label_column)
    }

    pub fn from_reader<R: Read>(reader: R, label_column: Option<&str>) -> Result<Self, DataError> {
        let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        if headers.len() < 2 {
            return Err(DataError::TooFewColumns);
        }

        let label_idx = match label_column {
            Some(name) => headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| DataError::MissingLabelColumn(name.to_string()))?,
            None => headers.len() - 1,
        };

        let mut features = Vec::new();
        let mut labels = Vec::new();
        for (record_idx, result) in rdr.records().enumerate() {
            let record = result?;
            let mut row = Vec::with_capacity(headers.len() - 1);
            for (col, field) in record.iter().enumerate() {
                let value: f32 = field.parse().map_err(|_| DataError::Parse {
                    record: record_idx,
                    column: headers.get(col).cloned().unwrap_or_default(),
                    value: field.to_string(),
                })?;
                if col == label_idx {
                    labels.push(value);
                } else {
                    row.push(value);
                }
            }
            features.push(row);
        }

        let feature_names = headers
            .into_iter()
            .enumerate()
            .filter(|&(i, _)| i != label_idx)
            .map(|(_, h)| h)
            .collect();

        Ok(Self {
            features,
            labels,
            feature_names,
        })
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn features(&self) -> &[Vec<f32>] {
        &self.features
    }

    pub fn labels(&self) -> &[f32] {
        &self.labels
    }

    /// Splits off the last `floor(len * test_ratio)` rows as the test set.
    ///
    /// No shuffling: the split is positional, so callers who need a random split
    /// shuffle first.
    pub fn split(&self, test_ratio: f64) -> (Self, Self) {
        let n_test = ((self.len() as f64 * test_ratio) as usize).min(self.len());
        let n_train = self.len() - n_test;
        let part = |range: std::ops::Range<usize>| Self {
            features: self.features[range.clone()].to_vec(),
            labels: self.labels[range].to_vec(),
            feature_names: self.feature_names.clone(),
        };
        (part(0..n_train), part(n_train..self.len()))
    }

    /// Validates and converts to the trainer's dataset type.
    pub fn to_in_memory_dataset(&self) -> Result<InMemoryDataset, DatasetError> {
        InMemoryDataset::new(self.features.clone(), self.labels.clone())
    }

    /// Feature matrix for prediction.
    pub fn to_tensor2d<B: Backend>(&self) -> Tensor2D<B> {
        let flat: Vec<f32> = self.features.iter().flatten().copied().collect();
        Tensor2D::new(flat, self.len(), self.n_features())
    }
}

/// Per-column z-score statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Standardizer {
    means: Vec<f32>,
    stds: Vec<f32>,
}

impl Standardizer {
    /// Computes population mean and standard deviation of every column.
    ///
    /// Columns with a standard deviation below `1e-6` get a divisor of 1.
    pub fn fit(rows: &[Vec<f32>]) -> Self {
        let n_features = rows.first().map_or(0, Vec::len);
        let n = rows.len().max(1) as f32;

        let mut means = vec![0.0_f32; n_features];
        for row in rows {
            for (m, &v) in means.iter_mut().zip(row) {
                *m += v;
            }
        }
        means.iter_mut().for_each(|m| *m /= n);

        let mut stds = vec![0.0_f32; n_features];
        for row in rows {
            for ((s, &v), &m) in stds.iter_mut().zip(row).zip(&means) {
                *s += (v - m) * (v - m);
            }
        }
        for s in stds.iter_mut() {
            *s = (*s / n).sqrt();
            if *s < 1e-6 {
                *s = 1.0;
            }
        }

        Self { means, stds }
    }

    pub fn transform(&self, rows: &mut [Vec<f32>]) {
        for row in rows {
            for ((v, &m), &s) in row.iter_mut().zip(&self.means).zip(&self.stds) {
                *v = (*v - m) / s;
            }
        }
    }

    pub fn means(&self) -> &[f32] {
        &self.means
    }

    pub fn stds(&self) -> &[f32] {
        &self.stds
    }
}

impl BinaryClassificationData {
    /// Z-scores every feature with statistics fitted on this data, returning them.
    pub fn standardize(&mut self) -> Standardizer {
        let scaler = Standardizer::fit(&self.features);
        scaler.transform(&mut self.features);
        scaler
    }

    /// Applies statistics fitted elsewhere, e.g. on the training split.
    pub fn standardize_with(&mut self, scaler: &Standardizer) {
        scaler.transform(&mut self.features);
    }
}

/// Two Gaussian blobs in `n_features` dimensions, centered at `-separation` and
/// `+separation` on every axis, with unit variance. Labels alternate 0, 1, 0, ...
///
/// Deterministic for a given `seed`.
pub fn synthetic_blobs(
    n_samples: usize,
    n_features: usize,
    separation: f32,
    seed: u64,
) -> BinaryClassificationData {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut features = Vec::with_capacity(n_samples);
    let mut labels = Vec::with_capacity(n_samples);

    for i in 0..n_samples {
        let label = (i % 2) as f32;
        let center = if label == 1.0 { separation } else { -separation };
        let row = (0..n_features)
            .map(|_| center + standard_normal(&mut rng))
            .collect();
        features.push(row);
        labels.push(label);
    }

    let feature_names = (0..n_features).map(|j| format!("x{}", j)).collect();
    BinaryClassificationData::new(features, labels, feature_names)
}

// Box-Muller.
fn standard_normal<R: Rng>(rng: &mut R) -> f32 {
    let u1: f32 = rng.random_range(f32::EPSILON..1.0);
    let u2: f32 = rng.random();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f32::consts::PI * u2).cos()
}
