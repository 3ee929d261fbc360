//! Error types for dataset construction, training and prediction.

use crate::model::Coefficients;
use thiserror::Error;

/// Errors raised while building a dataset or a batch plan.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    #[error("dataset is empty")]
    Empty,

    #[error("feature rows ({rows}) and labels ({labels}) differ in length")]
    LengthMismatch { rows: usize, labels: usize },

    #[error("row {row} has {got} features, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("feature vectors must have at least one dimension")]
    ZeroFeatures,

    #[error("label at index {index} is {value}, expected 0 or 1")]
    InvalidLabel { index: usize, value: f32 },

    #[error("feature {col} of row {row} is not finite")]
    NonFiniteFeature { row: usize, col: usize },

    #[error("batch size must be positive")]
    InvalidBatchSize,

    #[error("index {index} out of bounds for dataset of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Errors raised by the trainer and by fitted models.
#[derive(Debug, Error)]
pub enum TrainError {
    /// Non-positive batch size, epoch count, reporting cadence, or a non-positive or
    /// non-finite learning rate.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Row-count or feature-dimension disagreement between the arguments of a call.
    #[error("shape mismatch for {what}: expected {expected}, got {got}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    /// A NaN or infinity appeared in a gradient or a loss value.
    ///
    /// `last_good` holds the parameters as they were after the last batch that
    /// completed cleanly.
    #[error("non-finite value at epoch {epoch}, batch {batch}")]
    NumericInstability {
        epoch: usize,
        batch: usize,
        last_good: Coefficients,
    },

    #[error(transparent)]
    Dataset(DatasetError),

    #[error("failed to parse trainer config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Row-count and row-width disagreements are shape errors; everything else stays a
/// dataset error.
impl From<DatasetError> for TrainError {
    fn from(err: DatasetError) -> Self {
        match err {
            DatasetError::LengthMismatch { rows, labels } => TrainError::ShapeMismatch {
                what: "labels",
                expected: rows,
                got: labels,
            },
            DatasetError::RaggedRows { expected, got, .. } => TrainError::ShapeMismatch {
                what: "feature row width",
                expected,
                got,
            },
            other => TrainError::Dataset(other),
        }
    }
}

impl TrainError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}
