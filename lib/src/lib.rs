//! # logreg-rs
//!
//! Binary logistic regression trained by mini-batch gradient descent, with pluggable
//! tensor backends and strict separation between training and inference phases.
//!
//! ## Core Design Principles
//!
//! - **Stateful Type Safety**: models carry their training state in the type system
//!   (`Unfitted` vs `Fitted`). Predicting with an untrained model, or training a fitted
//!   one again, does not compile.
//! - **Numerical Stability**: sigmoid and log-loss never evaluate `exp` of a positive
//!   argument (see [`stable`]), so they stay finite for any logit.
//! - **Reproducibility**: shuffling uses an explicitly seeded generator owned by each
//!   `fit` call; there is no process-wide random state.
//! - **Backend Agnosticism**: the `Backend` trait has a pure-Rust CPU implementation and,
//!   with the `ndarray` feature, an `ndarray` one.
//!
//! ## Quick Start
//!
//! ```rust
//! use logreg_rs::backend::{CpuBackend, Tensor2D};
//! use logreg_rs::dataset::InMemoryDataset;
//! use logreg_rs::loss::BCEWithLogitsLoss;
//! use logreg_rs::model::{InferenceModel, LogisticRegression};
//! use logreg_rs::optimizer::SGD;
//! use logreg_rs::trainer::Trainer;
//!
//! let dataset = InMemoryDataset::new(
//!     vec![vec![-2.0, -1.0], vec![-1.0, -1.0], vec![1.0, 1.0], vec![2.0, 1.0]],
//!     vec![0.0, 0.0, 1.0, 1.0],
//! )
//! .unwrap();
//!
//! let trainer = Trainer::builder(BCEWithLogitsLoss, SGD::new(1.0))
//!     .batch_size(64)
//!     .max_epochs(1000)
//!     .verbose(false)
//!     .build()
//!     .unwrap();
//!
//! let fitted = trainer
//!     .fit(LogisticRegression::<CpuBackend>::new(2), &dataset)
//!     .unwrap();
//!
//! let x = Tensor2D::<CpuBackend>::new(vec![-1.5, -1.0, 1.5, 1.0], 2, 2);
//! let p = fitted.predict_batch(&x).unwrap().to_vec();
//! assert!(p[0] < 0.5 && p[1] > 0.5);
//! ```
//!
//! ## Module Structure
//!
//! - `backend`: tensor abstractions and computation primitives (`Tensor1D`, `Tensor2D`)
//! - `stable`: overflow-free sigmoid, log-sum-exp and log-loss
//! - `dataset`: validated in-memory data and seeded mini-batch plans
//! - `model`: logistic regression with stateful type parameters
//! - `loss`: binary cross-entropy on logits
//! - `optimizer`: plain SGD
//! - `trainer`: the epoch loop
//! - `config`: serde-loadable hyperparameters

pub mod backend;

/// Trainer hyperparameters.
pub mod config;

/// Data containers and mini-batch iteration.
pub mod dataset;

/// Error types.
pub mod error;

/// Differentiable loss functions for model training.
pub mod loss;

/// Machine learning models with compile-time state safety.
pub mod model;

/// Optimization algorithms for parameter updates.
pub mod optimizer;

/// Numerically stable sigmoid and log-loss.
pub mod stable;

/// High-level training loop orchestration.
pub mod trainer;

/// Re-export of core types for convenient usage.
pub use backend::{Backend, CpuBackend, Scalar, ScalarOps, Tensor1D, Tensor2D};
#[cfg(feature = "ndarray")]
pub use backend::NdarrayBackend;
pub use config::TrainerConfig;
pub use dataset::{BatchPlan, Dataset, InMemoryDataset};
pub use error::{DatasetError, TrainError};
pub use model::{Coefficients, InferenceModel, LogisticModel, LogisticRegression};
pub use trainer::{Trainer, TrainingHistory};
