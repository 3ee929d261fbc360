//! Data loading, metrics and timing helpers shared by the logreg-rs binaries and
//! benchmarks.
//!
//! - CSV loading, standardization and tail splits for binary-classification data
//! - Synthetic Gaussian blobs
//! - Accuracy and log-loss
//! - Timing

pub mod data;
pub mod metrics;
pub mod utils;

pub use data::{synthetic_blobs, BinaryClassificationData, DataError, Standardizer};
pub use metrics::{ClassificationMetrics, Metrics};
pub use utils::{time_fn, Timer};
